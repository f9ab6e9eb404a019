//! Clickable regions registered during rendering.
//!
//! Components register hit areas as they draw, and the event loop queries
//! the registry to turn a mouse click into an action. The registry is cleared
//! at the start of every frame.

use ratatui::layout::{Position, Rect};

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// The lightbulb in the card corner
    ToggleTheme,
    /// The "Fruit projects" button
    ToggleExpansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position::new(x, y))
    }
}

#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Later entries sit on top of earlier ones
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register an area. Empty rects are ignored.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.is_empty() {
            return;
        }
        self.areas.push(HitArea { rect, action });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Rect registered for an action, if any.
    pub fn rect_for(&self, action: ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(10, 2, 6, 3), ClickAction::ToggleTheme);

        assert_eq!(registry.hit_test(10, 2), Some(ClickAction::ToggleTheme));
        assert_eq!(registry.hit_test(15, 4), Some(ClickAction::ToggleTheme));
        assert_eq!(registry.hit_test(16, 4), None);
        assert_eq!(registry.hit_test(10, 5), None);
    }

    #[test]
    fn test_topmost_wins() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 20, 20), ClickAction::ToggleExpansion);
        registry.register(Rect::new(5, 5, 2, 2), ClickAction::ToggleTheme);

        assert_eq!(registry.hit_test(5, 5), Some(ClickAction::ToggleTheme));
        assert_eq!(registry.hit_test(1, 1), Some(ClickAction::ToggleExpansion));
    }

    #[test]
    fn test_empty_rect_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(3, 3, 0, 4), ClickAction::ToggleTheme);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 1, 1), ClickAction::ToggleTheme);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.rect_for(ClickAction::ToggleTheme),
            Some(Rect::new(0, 0, 1, 1))
        );
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(0, 0), None);
    }
}
