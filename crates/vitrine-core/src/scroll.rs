//! Pure scroll-position maps for fade-out and parallax drift.

/// Fade window expressed as fractions of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeSpec {
    pub start_fraction: f32,
    pub end_fraction: f32,
}

impl Default for FadeSpec {
    fn default() -> Self {
        // Hero fade: start at 30% of the viewport, fully faded at 80%.
        Self {
            start_fraction: 0.3,
            end_fraction: 0.8,
        }
    }
}

impl FadeSpec {
    pub const fn new(start_fraction: f32, end_fraction: f32) -> Self {
        Self {
            start_fraction,
            end_fraction,
        }
    }

    /// Opacity for the current scroll offset: 1.0 up to the start point,
    /// linear down to 0.0 at the end point. A degenerate window (end at or
    /// before start) collapses to a step at the start point.
    pub fn opacity(self, scroll_px: f32, viewport_px: f32) -> f32 {
        let start = self.start_fraction * viewport_px;
        let end = self.end_fraction * viewport_px;

        if scroll_px <= start {
            return 1.0;
        }
        if end <= start || scroll_px >= end {
            return 0.0;
        }

        1.0 - (scroll_px - start) / (end - start)
    }
}

/// Vertical drift applied to a layer scrolling slower than the page.
pub fn parallax_offset(scroll_px: f32, factor: f32) -> f32 {
    scroll_px * factor
}
