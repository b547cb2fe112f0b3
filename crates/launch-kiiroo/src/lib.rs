//! Launch Kiiroo - Timeline text codec and algorithm contract
//!
//! This crate implements the Kiiroo timeline format:
//! - Event codec (`<seconds>:<value>`)
//! - Event collections (`{<event>,<event>,...}`) and canonical ordering
//! - The `Algorithm` contract that turns events into timed device actions

pub mod algorithm;
pub mod error;
pub mod event;
pub mod events;

pub use algorithm::*;
pub use error::*;
pub use event::*;
pub use events::*;
