//! Result surface: handoff params in, rendered verdict out.

pub mod handoff;
pub mod verdict;

pub use handoff::{RenderedResult, ResultParams, ResultScreen, ResultView};
pub use verdict::{color_for, guidance_for, label_for, Color};
