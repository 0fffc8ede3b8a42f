//! Interactive collection of a change record
//!
//! Answers come from a [`LineSource`], so the same session runs against a
//! terminal, a piped file, or a scripted test double.

mod collector;
mod input;

pub use collector::collect;
pub use input::{LineSource, Terminal};
