//! Plain-text dumps of a rendered buffer.

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// One string per row, wide glyphs counted once, trailing spaces trimmed.
pub fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut out = buffer_to_lines(buf).join("\n");
    out.push('\n');
    out
}
