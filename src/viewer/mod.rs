//! Terminal front end: key mapping, view-window state, display and the
//! session loop driving a [`World`](crate::sparselife::World).

mod config;
mod display;
mod event;
mod session;
mod view;

pub use config::ViewerConfig;
pub use display::{Display, TerminalDisplay};
pub use event::{HELP_TEXT, ViewEvent};
pub use session::{
    EventSource, INTERRUPT_MESSAGE, STOP_MESSAGE, Session, TerminalEvents, run_headless,
    run_terminal,
};
pub use view::ViewState;
