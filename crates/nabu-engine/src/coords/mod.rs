//! Coordinate spaces and the math that moves points between them.
//!
//! Spaces, outermost first:
//! - world: authoring units
//! - logical: UI-scaled units (layout + hit-testing)
//! - screen: DPI-scaled device pixels (GPU)
//!
//! All spaces share a top-left origin with +X right and +Y down.

mod local;
mod mat4;
mod transform;
mod vec2;

pub use local::Transform2D;
pub use mat4::Mat4;
pub use transform::{CoordinateSpace, CoordinateTransformer};
pub use vec2::Vec2;
