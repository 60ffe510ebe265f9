use std::time::Duration;

use crate::sparselife::Coordinate;

const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);
const DEFAULT_HELP_DURATION: Duration = Duration::from_millis(4500);
const DEFAULT_PAGE_STEP: i64 = 10;
const DEFAULT_TOP_LEFT: Coordinate = Coordinate::new(-10, -10);
const DEFAULT_BOTTOM_RIGHT: Coordinate = Coordinate::new(80, 40);

/// Configuration for an interactive viewing session.
///
/// Use `ViewerConfig::default()` for the stock terminal layout, or customise
/// individual knobs via the builder methods.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Minimum time a rendered frame stays on screen before the next repaint.
    pub frame_delay: Duration,
    /// How long the key help stays on screen.
    pub help_duration: Duration,
    /// Cells moved by a page-step event.
    pub page_step: i64,
    /// Initial viewport, inclusive on both corners.
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_delay: DEFAULT_FRAME_DELAY,
            help_duration: DEFAULT_HELP_DURATION,
            page_step: DEFAULT_PAGE_STEP,
            top_left: DEFAULT_TOP_LEFT,
            bottom_right: DEFAULT_BOTTOM_RIGHT,
        }
    }
}

impl ViewerConfig {
    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn help_duration(mut self, duration: Duration) -> Self {
        self.help_duration = duration;
        self
    }

    /// Set the page step; clamped to at least one cell.
    pub fn page_step(mut self, step: i64) -> Self {
        self.page_step = step.max(1);
        self
    }

    pub fn viewport(mut self, top_left: Coordinate, bottom_right: Coordinate) -> Self {
        self.top_left = top_left;
        self.bottom_right = bottom_right;
        self
    }
}
