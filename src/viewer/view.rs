//! View-window state machine.
//!
//! `ViewState` is a plain value; every event maps, through a static table, to
//! a pure function producing the next state.

use super::event::ViewEvent;
use crate::sparselife::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub paused: bool,
    pub show_help: bool,
    pub ended: bool,
    pub interrupted: bool,
}

type Transition = fn(ViewState, i64) -> ViewState;

const TRANSITIONS: [(ViewEvent, Transition); 12] = [
    (ViewEvent::Up, |s, _| s.pan(0, -1)),
    (ViewEvent::Down, |s, _| s.pan(0, 1)),
    (ViewEvent::Left, |s, _| s.pan(-1, 0)),
    (ViewEvent::Right, |s, _| s.pan(1, 0)),
    (ViewEvent::PageUp, |s, page| s.pan(0, -page)),
    (ViewEvent::PageDown, |s, page| s.pan(0, page)),
    (ViewEvent::PageLeft, |s, page| s.pan(-page, 0)),
    (ViewEvent::PageRight, |s, page| s.pan(page, 0)),
    (ViewEvent::Help, |s, _| ViewState {
        show_help: true,
        ..s
    }),
    (ViewEvent::Pause, |s, _| ViewState {
        paused: !s.paused,
        ..s
    }),
    (ViewEvent::Stop, |s, _| ViewState { ended: true, ..s }),
    (ViewEvent::Interrupt, |s, _| ViewState {
        ended: true,
        interrupted: true,
        ..s
    }),
];

impl ViewState {
    pub fn new(top_left: Coordinate, bottom_right: Coordinate) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
            paused: false,
            show_help: false,
            ended: false,
            interrupted: false,
        }
    }

    #[inline]
    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.left, self.top)
    }

    #[inline]
    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.right, self.bottom)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn wants_help(&self) -> bool {
        self.show_help
    }

    #[inline]
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Ended by a signal rather than a stop key.
    #[inline]
    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    /// State after the help text has been shown.
    pub fn help_shown(self) -> Self {
        Self {
            show_help: false,
            ..self
        }
    }

    /// Shift the window by `(dx, dy)`, keeping its size.
    pub fn pan(self, dx: i64, dy: i64) -> Self {
        Self {
            left: self.left.wrapping_add(dx),
            right: self.right.wrapping_add(dx),
            top: self.top.wrapping_add(dy),
            bottom: self.bottom.wrapping_add(dy),
            ..self
        }
    }

    /// Next state for `event`; page events move by `page_step` cells.
    pub fn apply(self, event: ViewEvent, page_step: i64) -> Self {
        TRANSITIONS
            .iter()
            .find(|(e, _)| *e == event)
            .map_or(self, |(_, transition)| transition(self, page_step))
    }
}
