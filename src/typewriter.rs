//! Two-line typewriter reveal.
//!
//! The sequencer is a plain state machine: every call to [`Typewriter::tick`]
//! reveals exactly one character of the active line. The caller owns the
//! single tick source and drops it once [`Typewriter::is_done`] reports true,
//! so cancelling the animation never needs more than one operation.
//! [`start_ticking`] is the only place a tick source is started.

use std::time::Duration;

pub const CURSOR_GLYPH: &str = "|";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    First,
    Second,
    Done,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Done => "done",
        }
    }

    fn line_index(self) -> Option<usize> {
        match self {
            Self::First => Some(0),
            Self::Second => Some(1),
            Self::Done => None,
        }
    }

    fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second | Self::Done => Self::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// One more character of the active line is visible.
    Typed,
    /// The first line completed on this tick and the second line is now active.
    SecondLineStarted,
    /// The last pending character was revealed on this tick.
    Finished,
    /// The sequence was already over.
    Idle,
}

/// A periodic timer. It calls `on_tick` every `interval_ms` until the
/// returned handle is dropped.
pub trait TickSource {
    type Handle;

    fn start(&self, interval_ms: u64, on_tick: Box<dyn FnMut()>) -> Option<Self::Handle>;
}

/// Starts `source` for `typewriter`, or returns `None` when nothing is left to type.
pub fn start_ticking<S: TickSource>(
    source: &S,
    typewriter: &Typewriter,
    interval_ms: u64,
    on_tick: impl FnMut() + 'static,
) -> Option<S::Handle> {
    if typewriter.is_done() {
        return None;
    }
    source.start(interval_ms, Box::new(on_tick))
}

/// What the hero banner renders at a given moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text1: String,
    pub text2: String,
    pub cursor1: bool,
    pub cursor2: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    lines: [Vec<char>; 2],
    revealed: [usize; 2],
    phase: Phase,
}

impl Typewriter {
    pub fn new(first: &str, second: &str) -> Self {
        let mut typewriter = Self {
            lines: [first.chars().collect(), second.chars().collect()],
            revealed: [0, 0],
            phase: Phase::First,
        };
        typewriter.skip_completed_lines();
        typewriter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn ticks_remaining(&self) -> usize {
        self.lines
            .iter()
            .zip(self.revealed)
            .map(|(line, revealed)| line.len() - revealed)
            .sum()
    }

    /// Time from now until the last character shows, at `interval` per tick.
    pub fn remaining_duration(&self, interval: Duration) -> Duration {
        let ticks = u32::try_from(self.ticks_remaining()).unwrap_or(u32::MAX);
        interval.saturating_mul(ticks)
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Some(index) = self.phase.line_index() else {
            return TickOutcome::Idle;
        };

        self.revealed[index] += 1;
        let before = self.phase;
        self.skip_completed_lines();

        match self.phase {
            Phase::Done => TickOutcome::Finished,
            phase if phase != before => TickOutcome::SecondLineStarted,
            _ => TickOutcome::Typed,
        }
    }

    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            text1: self.lines[0][..self.revealed[0]].iter().collect(),
            text2: self.lines[1][..self.revealed[1]].iter().collect(),
            cursor1: self.phase == Phase::First,
            cursor2: self.phase == Phase::Second,
        }
    }

    /// The frame visible `elapsed` after mount when ticking every `interval`.
    #[cfg(test)]
    pub fn frame_at(first: &str, second: &str, interval: Duration, elapsed: Duration) -> TypewriterFrame {
        let mut typewriter = Self::new(first, second);
        let remaining = typewriter.ticks_remaining();
        let ticks = if interval.is_zero() {
            remaining
        } else {
            usize::try_from(elapsed.as_nanos() / interval.as_nanos())
                .unwrap_or(usize::MAX)
                .min(remaining)
        };

        for _ in 0..ticks {
            typewriter.tick();
        }

        typewriter.frame()
    }

    // Empty lines complete without consuming a tick.
    fn skip_completed_lines(&mut self) {
        while let Some(index) = self.phase.line_index() {
            if self.revealed[index] < self.lines[index].len() {
                break;
            }
            self.phase = self.phase.next();
        }
    }
}
