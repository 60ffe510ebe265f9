//! The interactive loop: evolve, render, poll one event, repeat.
//!
//! Evolution and rendering run on the same thread, so the world has a single
//! owner and needs no locking.

use std::ffi::c_int;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
#[cfg(unix)]
use signal_hook::consts::SIGHUP;
use signal_hook::SigId;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{debug, error, info, warn};

use super::config::ViewerConfig;
use super::display::{Display, TerminalDisplay};
use super::event::{HELP_TEXT, ViewEvent};
use super::view::ViewState;
use crate::sparselife::{Coordinate, World};

pub const STOP_MESSAGE: &str = "Time to stop";
pub const INTERRUPT_MESSAGE: &str = "Program interrupted";

#[cfg(unix)]
const INTERRUPT_SIGNALS: &[c_int] = &[SIGINT, SIGTERM, SIGHUP];
#[cfg(not(unix))]
const INTERRUPT_SIGNALS: &[c_int] = &[SIGINT, SIGTERM];

/// Source of view events.
pub trait EventSource {
    /// Next event, waiting at most `timeout`. `Ok(None)` on timeout or when
    /// the input was not a bound key.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<ViewEvent>>;
}

/// Keyboard events from the controlling terminal, plus termination signals.
///
/// Raw mode disables the terminal's own signal keys, but SIGTERM and SIGHUP
/// still arrive from outside. Each one only raises a flag; the next poll
/// turns it into [`ViewEvent::Interrupt`] so the session ends through its
/// normal teardown.
pub struct TerminalEvents {
    interrupted: Arc<AtomicBool>,
    registrations: Vec<SigId>,
}

impl TerminalEvents {
    /// Register the interrupt signals for the lifetime of the returned value.
    pub fn new() -> io::Result<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let mut registrations = Vec::with_capacity(INTERRUPT_SIGNALS.len());
        for &signal in INTERRUPT_SIGNALS {
            match signal_hook::flag::register(signal, Arc::clone(&interrupted)) {
                Ok(id) => registrations.push(id),
                Err(err) => {
                    for id in registrations {
                        signal_hook::low_level::unregister(id);
                    }
                    return Err(err);
                }
            }
        }
        Ok(Self {
            interrupted,
            registrations,
        })
    }

    /// Event source driven by an existing flag. No signal is registered.
    pub fn with_flag(interrupted: Arc<AtomicBool>) -> Self {
        Self {
            interrupted,
            registrations: Vec::new(),
        }
    }
}

impl Drop for TerminalEvents {
    fn drop(&mut self) {
        for id in self.registrations.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<ViewEvent>> {
        if self.interrupted.swap(false, Ordering::Relaxed) {
            return Ok(Some(ViewEvent::Interrupt));
        }
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(ViewEvent::from_key(key)),
            _ => Ok(None),
        }
    }
}

pub struct Session<D, E> {
    world: World,
    view: ViewState,
    config: ViewerConfig,
    display: D,
    events: E,
}

impl<D: Display, E: EventSource> Session<D, E> {
    pub fn new(world: World, config: ViewerConfig, display: D, events: E) -> Self {
        let view = ViewState::new(config.top_left, config.bottom_right);
        Self {
            world,
            view,
            config,
            display,
            events,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// One loop iteration. Returns `false` once the view has ended.
    pub fn tick(&mut self) -> io::Result<bool> {
        if self.view.wants_help() {
            self.display
                .update_and_hold(HELP_TEXT, self.config.help_duration)?;
            self.view = self.view.help_shown();
        }
        if !self.view.is_paused() {
            self.world.evolve();
        }

        let frame = self
            .world
            .render_viewport(self.view.top_left(), self.view.bottom_right());
        self.display
            .update_and_hold(&frame, self.config.frame_delay)?;

        if let Some(event) = self.events.poll(Duration::ZERO)? {
            debug!(?event, "view event");
            self.view = self.view.apply(event, self.config.page_step);
        }
        Ok(!self.view.has_ended())
    }

    /// Loop until a stop or interrupt event, then show the farewell message.
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {}
        let message = if self.view.was_interrupted() {
            warn!(generation = self.world.generation(), "session interrupted");
            INTERRUPT_MESSAGE
        } else {
            STOP_MESSAGE
        };
        info!(
            generation = self.world.generation(),
            population = self.world.population(),
            "session stopped"
        );
        self.display.update_and_close(message)
    }

    pub fn into_world(self) -> World {
        self.world
    }
}

/// Run an interactive session on the controlling terminal.
///
/// Raw mode, the alternate screen and cursor visibility are restored even
/// when the session fails or is ended by SIGINT, SIGTERM or SIGHUP.
pub fn run_terminal(world: World, config: ViewerConfig) -> io::Result<World> {
    let events = TerminalEvents::new()?;
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
        restore_terminal(&mut stdout);
        return Err(err);
    }

    let mut session = Session::new(world, config, TerminalDisplay::new(stdout), events);
    let result = session.run();

    restore_terminal(&mut io::stdout());
    result.map(|()| session.into_world())
}

/// Undo the terminal setup, logging each failed step. Every step is attempted
/// regardless of earlier failures. Returns `true` when all of them succeeded.
fn restore_terminal<W: Write>(out: &mut W) -> bool {
    let mut clean = true;
    if let Err(err) = execute!(out, Show, LeaveAlternateScreen) {
        error!(?err, "failed to leave alternate screen");
        clean = false;
    }
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
        clean = false;
    }
    if let Err(err) = out.flush() {
        error!(?err, "failed to flush terminal");
        clean = false;
    }
    clean
}

/// Evolve `generations` steps without a terminal and return the final
/// viewport text.
pub fn run_headless(
    mut world: World,
    top_left: Coordinate,
    bottom_right: Coordinate,
    generations: u64,
) -> String {
    world.step_n(generations);
    info!(
        generation = world.generation(),
        population = world.population(),
        "headless run completed"
    );
    world.render_viewport(top_left, bottom_right)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::{self, Write};
    use std::time::Duration;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::{
        Display, EventSource, INTERRUPT_MESSAGE, STOP_MESSAGE, Session, TerminalEvents,
        restore_terminal,
    };
    use crate::sparselife::{Coordinate, World};
    use crate::viewer::{HELP_TEXT, ViewEvent, ViewerConfig};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<String>,
        holds: Vec<Duration>,
        closed_with: Option<String>,
    }

    impl Display for Recorder {
        fn update_and_hold(&mut self, content: &str, hold: Duration) -> io::Result<()> {
            self.frames.push(content.to_owned());
            self.holds.push(hold);
            Ok(())
        }

        fn update_and_close(&mut self, message: &str) -> io::Result<()> {
            self.closed_with = Some(message.to_owned());
            Ok(())
        }

        fn close(&mut self) {}
    }

    struct Scripted(VecDeque<Option<ViewEvent>>);

    impl EventSource for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<Option<ViewEvent>> {
            Ok(self.0.pop_front().unwrap_or(Some(ViewEvent::Stop)))
        }
    }

    fn session(events: &[Option<ViewEvent>]) -> Session<Recorder, Scripted> {
        let blinker: World = [(0, 0), (1, 0), (2, 0)]
            .into_iter()
            .map(Coordinate::from)
            .collect();
        let config = ViewerConfig::default()
            .frame_delay(Duration::ZERO)
            .help_duration(Duration::from_millis(7))
            .viewport(Coordinate::new(-1, -1), Coordinate::new(3, 1));
        Session::new(
            blinker,
            config,
            Recorder::default(),
            Scripted(events.iter().copied().collect()),
        )
    }

    #[test]
    fn each_tick_evolves_and_renders() {
        let mut s = session(&[None, None]);
        assert!(s.tick().unwrap());
        assert!(s.tick().unwrap());
        assert_eq!(s.world().generation(), 2);
        assert_eq!(s.display().frames.len(), 2);
        assert!(s.display().frames[0].ends_with("  x  \n  x  \n  x  \n"));
    }

    #[test]
    fn pause_stops_evolution() {
        let mut s = session(&[Some(ViewEvent::Pause), None, None]);
        s.tick().unwrap();
        s.tick().unwrap();
        s.tick().unwrap();
        assert_eq!(s.world().generation(), 1);
        assert!(s.view().is_paused());
    }

    #[test]
    fn help_is_shown_once_for_its_duration() {
        let mut s = session(&[Some(ViewEvent::Help), None]);
        s.tick().unwrap();
        s.tick().unwrap();
        let frames = &s.display().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1], HELP_TEXT);
        assert_eq!(s.display().holds[1], Duration::from_millis(7));
        assert!(!s.view().wants_help());
    }

    #[test]
    fn panning_moves_rendered_window() {
        let mut s = session(&[Some(ViewEvent::Right), None]);
        s.tick().unwrap();
        s.tick().unwrap();
        assert_eq!(s.view().top_left(), Coordinate::new(0, -1));
        let last = s.display().frames.last().cloned().unwrap_or_default();
        assert!(last.ends_with("     \nxxx  \n     \n"), "{last:?}");
    }

    #[test]
    fn run_stops_and_says_goodbye() {
        let mut s = session(&[None, Some(ViewEvent::Stop)]);
        s.run().unwrap();
        assert!(s.view().has_ended());
        assert_eq!(s.world().generation(), 2);
        assert_eq!(s.display().closed_with.as_deref(), Some(STOP_MESSAGE));
    }

    #[test]
    fn interrupt_stops_with_interrupt_message() {
        let mut s = session(&[None, Some(ViewEvent::Interrupt)]);
        s.run().unwrap();
        assert!(s.view().was_interrupted());
        assert_eq!(s.world().generation(), 2);
        let closed = s.display().closed_with.as_deref();
        assert_eq!(closed, Some(INTERRUPT_MESSAGE));
    }

    #[test]
    fn raised_flag_polls_as_interrupt_once() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut events = TerminalEvents::with_flag(Arc::clone(&flag));
        flag.store(true, Ordering::Relaxed);

        let event = events.poll(Duration::ZERO).unwrap();
        assert_eq!(event, Some(ViewEvent::Interrupt));
        assert!(!flag.load(Ordering::Relaxed));
    }

    /// Accepts writes, fails every flush.
    #[derive(Default)]
    struct StuckTerminal {
        written: Vec<u8>,
        flushes: usize,
    }

    impl Write for StuckTerminal {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Err(io::Error::other("terminal went away"))
        }
    }

    #[test]
    fn restore_reports_flush_failure_and_still_runs_every_step() {
        let mut out = StuckTerminal::default();
        assert!(!restore_terminal(&mut out));
        assert_eq!(out.flushes, 2);
        assert!(!out.written.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn hangup_signal_becomes_interrupt() {
        let mut events = TerminalEvents::new().unwrap();
        signal_hook::low_level::raise(signal_hook::consts::SIGHUP).unwrap();

        let event = events.poll(Duration::ZERO).unwrap();
        assert_eq!(event, Some(ViewEvent::Interrupt));
    }
}
