//! Profile content and image handles.

/// Identity shown at the top of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub handle: &'static str,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "George J.",
            title: "Competent Fruit Seller",
            handle: "@bananananas578",
        }
    }
}

/// Opaque image handle.
///
/// The UI layer decides how each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Person placeholder for the profile picture
    Profile,
    /// Theme toggle icon
    Lightbulb,
    /// Icon on each list row
    Breakfast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.name, "George J.");
        assert_eq!(profile.title, "Competent Fruit Seller");
        assert_eq!(profile.handle, "@bananananas578");
    }
}
