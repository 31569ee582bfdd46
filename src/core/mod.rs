//! Timing substrate shared by every animated primitive.

pub mod constants;
pub mod timer;

pub use constants::*;
pub use timer::{TimerError, TimerHandle, TimerQueue};
