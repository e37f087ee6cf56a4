//! Layout resolution.
//!
//! A [`RenderContext`] turns logical [`LayoutBox`]es into device-space boxes for
//! the active backend, and hit-tests logical points for input handling.
//!
//! Convention:
//! - layout and hit-testing happen in logical units
//! - backends only ever see the `device` half of a [`LayoutResult`]

mod ctx;
mod layout;
mod layout_box;

pub use ctx::RenderContext;
pub use layout::{layout_hit_test, layout_hit_test_topmost, layout_resolve, LayoutResult};
pub use layout_box::LayoutBox;
