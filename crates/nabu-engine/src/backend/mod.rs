//! Pluggable renderer backends.
//!
//! A backend implements [`RendererBackend`]; the application registers
//! instances in a [`BackendRegistry`] at startup and looks them up by id.
//!
//! Concrete GPU backends live outside this crate. Two CPU-only backends ship
//! here: [`HeadlessBackend`] (full layout + instance packing) and
//! [`NullBackend`] (lifecycle only).

mod backend;
mod error;
mod headless;
mod null;
mod registry;

pub use backend::{RenderBackendInit, RendererBackend};
pub use error::RegistryError;
pub use headless::{HeadlessBackend, QuadInstance};
pub use null::NullBackend;
pub use registry::{BackendRegistry, MAX_BACKENDS};
