use super::state::CarouselState;
use crate::models::EventRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Real,
    /// Copy of the last event placed before the first one.
    CloneOfLast,
    /// Copy of the first event placed after the last one.
    CloneOfFirst,
}

impl SlideKind {
    pub fn is_clone(&self) -> bool {
        !matches!(self, SlideKind::Real)
    }
}

/// One position of the displayed sequence, pointing back at its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub event: usize,
    pub kind: SlideKind,
}

/// Displayed sequence `[clone(last), e1 … eN, clone(first)]`.
///
/// An empty input yields an empty deck; there is nothing to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    real_count: usize,
}

impl SlideDeck {
    pub fn build(events: &[EventRecord]) -> Self {
        Self::with_real_count(events.len())
    }

    pub fn with_real_count(n: usize) -> Self {
        if n == 0 {
            return Self {
                slides: Vec::new(),
                real_count: 0,
            };
        }

        let mut slides = Vec::with_capacity(n + 2);
        slides.push(Slide {
            event: n - 1,
            kind: SlideKind::CloneOfLast,
        });
        slides.extend((0..n).map(|event| Slide {
            event,
            kind: SlideKind::Real,
        }));
        slides.push(Slide {
            event: 0,
            kind: SlideKind::CloneOfFirst,
        });

        Self {
            slides,
            real_count: n,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Navigation state positioned on the first real slide.
    pub fn state(&self) -> Option<CarouselState> {
        CarouselState::new(self.real_count)
    }
}
