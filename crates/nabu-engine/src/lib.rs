//! Nabu engine crate.
//!
//! Rendering and layout core: coordinate spaces, layout resolution, the
//! renderer backend contract and registry, render command instrumentation,
//! and the growable storage everything else is built on.

pub mod backend;
pub mod config;
pub mod coords;
pub mod logging;
pub mod memory;
pub mod render;
