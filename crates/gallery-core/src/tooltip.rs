//! Hover tooltip placement and lifecycle.
//!
//! At most one tooltip is live: showing a new one replaces the previous,
//! and leaving the owning card hides it.

use crate::grid::UnitId;

/// Gap between anchor and tooltip, and minimum distance to viewport edges.
pub const TOOLTIP_MARGIN: f64 = 10.0;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Top-left position for a tooltip of `size` next to `anchor`.
///
/// Centered below the anchor; clamped horizontally inside the viewport;
/// moved above the anchor when it would overflow the bottom edge.
pub fn place_tooltip(anchor: Rect, size: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
    let (width, height) = size;
    let (viewport_width, viewport_height) = viewport;

    let mut left = anchor.center_x() - width / 2.0;
    let mut top = anchor.bottom() + TOOLTIP_MARGIN;

    if left < TOOLTIP_MARGIN {
        left = TOOLTIP_MARGIN;
    }
    if left + width > viewport_width - TOOLTIP_MARGIN {
        left = viewport_width - width - TOOLTIP_MARGIN;
    }
    if top + height > viewport_height - TOOLTIP_MARGIN {
        top = anchor.top - height - TOOLTIP_MARGIN;
    }

    (left, top)
}

/// The live tooltip, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    current: Option<ActiveTooltip>,
}

/// Owner and anchor of the live tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTooltip {
    pub unit: UnitId,
    pub anchor: Rect,
}

impl TooltipState {
    /// Show a tooltip for `unit`, replacing any other.
    pub fn show(&mut self, unit: UnitId, anchor: Rect) {
        self.current = Some(ActiveTooltip { unit, anchor });
    }

    /// Hide the tooltip if `unit` owns it. A late leave event from a card
    /// whose tooltip was already replaced does nothing.
    pub fn hide(&mut self, unit: UnitId) {
        if self.current.is_some_and(|t| t.unit == unit) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<ActiveTooltip> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    const VIEWPORT: (f64, f64) = (800.0, 600.0);

    #[test]
    fn test_centered_below_anchor() {
        let anchor = Rect::new(100.0, 100.0, 50.0, 50.0);
        assert_eq!(place_tooltip(anchor, (80.0, 30.0), VIEWPORT), (85.0, 160.0));
    }

    #[test]
    fn test_clamped_to_left_edge() {
        let anchor = Rect::new(0.0, 100.0, 20.0, 20.0);
        assert_eq!(place_tooltip(anchor, (100.0, 30.0), VIEWPORT).0, 10.0);
    }

    #[test]
    fn test_clamped_to_right_edge() {
        let anchor = Rect::new(780.0, 100.0, 20.0, 20.0);
        assert_eq!(place_tooltip(anchor, (100.0, 30.0), VIEWPORT).0, 690.0);
    }

    #[test]
    fn test_flips_above_near_bottom() {
        let anchor = Rect::new(100.0, 550.0, 40.0, 40.0);
        assert_eq!(place_tooltip(anchor, (60.0, 30.0), VIEWPORT).1, 510.0);
    }

    #[test]
    fn test_single_live_tooltip() {
        let mut grid = Grid::new();
        grid.rebuild(&[0, 1]);
        let (a, b) = (grid.units()[0].id, grid.units()[1].id);

        let mut state = TooltipState::default();
        state.show(a, Rect::default());
        state.show(b, Rect::default());
        assert_eq!(state.current().map(|t| t.unit), Some(b));

        // Stale leave from the first card keeps the second tooltip.
        state.hide(a);
        assert!(state.current().is_some());
        state.hide(b);
        assert!(state.current().is_none());
    }
}
