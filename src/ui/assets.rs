//! Glyphs standing in for image assets.

use crate::models::Asset;

pub fn glyph(asset: Asset) -> &'static str {
    match asset {
        Asset::Profile => "👤",
        Asset::Lightbulb => "💡",
        Asset::Breakfast => "☕",
    }
}
