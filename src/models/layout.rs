//! Row layout derived from list position.
//!
//! Rows alternate: even rows sit at the start of the list and read
//! left-to-right, odd rows sit at the end and are mirrored. Nothing here is
//! stored per row; every value comes from `index % 2`.

/// Reading direction of a row's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirection {
    Ltr,
    Rtl,
}

/// Horizontal edge of a row, relative to the list's left-to-right flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Where the row's card sits inside the list width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPlacement {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLayout {
    pub direction: LayoutDirection,
    /// Edge the card grows from and shrinks toward
    pub origin: Edge,
    pub placement: RowPlacement,
}

impl ItemLayout {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self {
                direction: LayoutDirection::Ltr,
                origin: Edge::Trailing,
                placement: RowPlacement::Start,
            }
        } else {
            Self {
                direction: LayoutDirection::Rtl,
                origin: Edge::Leading,
                placement: RowPlacement::End,
            }
        }
    }

    pub fn is_mirrored(&self) -> bool {
        self.direction == LayoutDirection::Rtl
    }
}
