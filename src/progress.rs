//! Textual progress reporting for long runs.
//!
//! The engine ticks a [`ProgressSink`] once per trial. [`ConsoleMeter`]
//! renders the ticks as a fixed-width dot bar between a header and a
//! closing bracket; [`NullProgress`] drops them.

use std::io::{self, Write};

use crate::constants::PROGRESS_STEP_PERCENT;
use crate::format::pretty_num;

/// Receiver for per-trial completion ticks.
pub trait ProgressSink {
    /// Called once per trial with the trial index and the total count.
    fn on_trial(&mut self, completed: u64, total: u64);
}

/// Sink that ignores all ticks.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_trial(&mut self, _completed: u64, _total: u64) {}
}

/// Dot-bar meter: one `.` each time completion crosses another 5% step,
/// 20 dots over a full run.
///
/// Write errors are swallowed; the meter is courtesy output and must not
/// disturb the run.
pub struct ConsoleMeter<W: Write> {
    out: W,
    next_percent: u8,
}

impl<W: Write> ConsoleMeter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_percent: 0,
        }
    }

    /// Print the header lines and the opening `[` of the dot bar.
    pub fn banner(&mut self, rounds: u64) -> io::Result<()> {
        writeln!(self.out, "Progress meter for {} rounds", pretty_num(rounds))?;
        writeln!(self.out, "[ 0%            100% ]")?;
        write!(self.out, "[")?;
        self.out.flush()
    }

    /// Close the dot bar and leave a blank line.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "]")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ConsoleMeter<W> {
    fn on_trial(&mut self, completed: u64, total: u64) {
        let percent_done = completed as f64 / total as f64 * 100.0;
        if (self.next_percent as f64) < percent_done {
            self.next_percent += PROGRESS_STEP_PERCENT;
            let _ = write!(self.out, ".");
            let _ = self.out.flush();
        }
    }
}
