//! Looping event carousel.
//!
//! The deck puts a clone of the last event in front and a clone of the first
//! event at the back; the state machine walks that sequence and snaps off the
//! clones once a transition ends, which reads as endless wraparound.

pub mod deck;
pub mod render;
pub mod state;

pub use deck::{Slide, SlideDeck, SlideKind};
pub use render::{CarouselOptions, carousel_markup, render_carousel, render_page};
pub use state::{CarouselState, Direction, Phase};
