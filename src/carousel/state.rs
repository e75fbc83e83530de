//! Navigation state machine of the looping carousel.
//!
//! Positions run over the displayed sequence, so `0` is the clone of the
//! last event and `N + 1` the clone of the first. Landing on a clone moves
//! the machine into a snapping phase; finishing the transition jumps
//! (without animation) to the real slide the clone stands for.

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl TryFrom<i32> for Direction {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            other => Err(AppError::InvalidDirection(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    /// Showing the clone of the first event; will jump to index 1.
    SnappingToStart,
    /// Showing the clone of the last event; will jump to index N.
    SnappingToEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    real_count: usize,
    phase: Phase,
}

impl CarouselState {
    /// `None` for zero events: an empty carousel has no positions.
    pub fn new(real_count: usize) -> Option<Self> {
        (real_count > 0).then_some(Self {
            index: 1,
            real_count,
            phase: Phase::Normal,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of displayed slides, clones included.
    pub fn total(&self) -> usize {
        self.real_count + 2
    }

    /// 0-based event shown at the current index.
    pub fn real_position(&self) -> usize {
        match self.index {
            0 => self.real_count - 1,
            i if i == self.total() - 1 => 0,
            i => i - 1,
        }
    }

    /// Animated move by one slide.
    ///
    /// A snap still pending from the previous move is applied first, so the
    /// index never leaves `[0, N + 1]`. Returns the new index.
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.finish_transition();

        self.index = match direction {
            Direction::Next => self.index + 1,
            Direction::Previous => self.index - 1,
        };

        self.phase = if self.index == self.total() - 1 {
            Phase::SnappingToStart
        } else if self.index == 0 {
            Phase::SnappingToEnd
        } else {
            Phase::Normal
        };

        self.index
    }

    /// Called when the slide animation completes.
    ///
    /// Returns the index jumped to, or `None` if no snap was pending.
    pub fn finish_transition(&mut self) -> Option<usize> {
        let target = match self.phase {
            Phase::Normal => return None,
            Phase::SnappingToStart => 1,
            Phase::SnappingToEnd => self.real_count,
        };

        self.index = target;
        self.phase = Phase::Normal;
        Some(target)
    }
}
