//! Growable storage shared by every dynamic collection in the engine.
//!
//! Widget lists, log rings, backend tables and instance buffers all grow through
//! [`GrowableBuffer`], so they share one capacity policy:
//! - an empty buffer jumps straight to its initial capacity hint
//! - a non-empty buffer doubles until the request fits
//! - capacity never shrinks implicitly

mod buffer;
mod error;

pub use buffer::{grow_capacity, GrowableBuffer, DEFAULT_INITIAL_CAPACITY};
pub use error::BufferError;
