//! List entries and their derived captions.

/// One row of the fruit project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry {
    pub label: &'static str,
}

impl ListEntry {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Second line of the row, e.g. "Because smoothies matter".
    pub fn caption(&self) -> String {
        caption_for(self.label)
    }
}

/// The list shown when the card is expanded, in display order.
pub const FRUIT_PROJECTS: [ListEntry; 5] = [
    ListEntry::new("Banana smoothies"),
    ListEntry::new("Orange cakes"),
    ListEntry::new("Apple pies"),
    ListEntry::new("Chocolate cherries"),
    ListEntry::new("Crunchy kiwis"),
];

/// Build the caption for a label by dropping its first word.
///
/// A label with no space keeps the whole label.
pub fn caption_for(label: &str) -> String {
    let rest = label
        .split_once(' ')
        .map(|(_, rest)| rest)
        .unwrap_or(label);
    format!("Because {} matter", rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_drops_first_word() {
        assert_eq!(caption_for("Banana smoothies"), "Because smoothies matter");
    }

    #[test]
    fn test_caption_single_word_uses_whole_label() {
        assert_eq!(caption_for("Kiwis"), "Because Kiwis matter");
    }

    #[test]
    fn test_caption_keeps_everything_after_first_space() {
        assert_eq!(
            caption_for("Very ripe red apples"),
            "Because ripe red apples matter"
        );
    }

    #[test]
    fn test_caption_empty_label() {
        assert_eq!(caption_for(""), "Because  matter");
    }

    #[test]
    fn test_fruit_projects_order() {
        let labels: Vec<&str> = FRUIT_PROJECTS.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Banana smoothies",
                "Orange cakes",
                "Apple pies",
                "Chocolate cherries",
                "Crunchy kiwis",
            ]
        );
    }

    #[test]
    fn test_entry_caption() {
        assert_eq!(FRUIT_PROJECTS[4].caption(), "Because kiwis matter");
    }
}
