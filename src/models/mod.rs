//! Static content shown on the card.
//!
//! - [`ListEntry`] and [`FRUIT_PROJECTS`] - the fixed list behind the button
//! - [`Profile`] - name, title and handle on the card
//! - [`Asset`] - opaque image handles resolved by the UI layer
//! - [`ItemLayout`] - direction and expansion origin derived from a row index

mod entry;
mod layout;
mod profile;

pub use entry::{caption_for, ListEntry, FRUIT_PROJECTS};
pub use layout::{Edge, ItemLayout, LayoutDirection, RowPlacement};
pub use profile::{Asset, Profile};
