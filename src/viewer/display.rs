//! Rate-limited full-screen text output.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

pub trait Display {
    /// Wait for the previous hold to expire, repaint with `content`, then keep
    /// it on screen for at least `hold`.
    fn update_and_hold(&mut self, content: &str, hold: Duration) -> io::Result<()>;

    /// Paint a final message and close. Later updates are ignored.
    fn update_and_close(&mut self, message: &str) -> io::Result<()>;

    fn close(&mut self);
}

/// [`Display`] drawing to a raw-mode terminal through crossterm.
pub struct TerminalDisplay<W: Write> {
    out: W,
    held_until: Option<Instant>,
    closed: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            held_until: None,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait_for_hold(&mut self) {
        if let Some(until) = self.held_until.take() {
            let now = Instant::now();
            if until > now {
                thread::sleep(until - now);
            }
        }
    }

    fn paint(&mut self, content: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        // Raw mode does not translate `\n` into a carriage return.
        for line in content.lines() {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn update_and_hold(&mut self, content: &str, hold: Duration) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.wait_for_hold();
        self.paint(content)?;
        self.held_until = Some(Instant::now() + hold);
        Ok(())
    }

    fn update_and_close(&mut self, message: &str) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.close();
        self.paint(message)
    }

    fn close(&mut self) {
        self.closed = true;
        self.held_until = None;
    }
}
