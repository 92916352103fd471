//! Core data structures for macro panels.

mod frame;
mod frequency;

pub use frame::{MacroFrame, MacroFrameBuilder, DISPLAY_DECIMALS};
pub use frequency::Frequency;
