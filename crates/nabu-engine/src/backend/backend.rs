use std::path::Path;

use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

use crate::coords::CoordinateTransformer;
use crate::logging::{RenderLogger, RenderLoggerConfig};
use crate::render::LayoutBox;

/// Everything a backend needs to come up.
///
/// Paths and handles are optional so headless backends can ignore them.
#[derive(Debug, Clone, Copy)]
pub struct RenderBackendInit<'a> {
    pub window: Option<RawWindowHandle>,
    pub display: Option<RawDisplayHandle>,
    pub vertex_shader: Option<&'a Path>,
    pub fragment_shader: Option<&'a Path>,
    pub font_path: Option<&'a Path>,
    /// Initial widget set, in logical units.
    pub widgets: &'a [LayoutBox],
    pub transformer: CoordinateTransformer,
    /// `None` leaves the backend's logger disabled.
    pub logger_config: Option<&'a RenderLoggerConfig>,
}

impl<'a> RenderBackendInit<'a> {
    /// Init parameters with only a transformer set.
    pub fn new(transformer: CoordinateTransformer) -> Self {
        Self {
            window: None,
            display: None,
            vertex_shader: None,
            fragment_shader: None,
            font_path: None,
            widgets: &[],
            transformer,
            logger_config: None,
        }
    }
}

/// Lifecycle contract shared by every renderer backend.
///
/// Callers own the sequencing: `init` once, `update_transformer` on every
/// resize or DPI change, `draw` once per frame, `cleanup` at teardown.
/// `cleanup` must tolerate repeated calls.
pub trait RendererBackend {
    /// Stable, unique identifier used for registry lookup.
    fn id(&self) -> &str;

    fn logger(&self) -> &RenderLogger;

    fn init(&mut self, init: &RenderBackendInit<'_>) -> anyhow::Result<()>;

    /// Called on viewport or DPI change. Safe to call repeatedly.
    fn update_transformer(&mut self, transformer: &CoordinateTransformer);

    /// Replaces the widget set drawn on subsequent frames.
    fn update_ui(&mut self, widgets: &[LayoutBox]) {
        let _ = widgets;
    }

    /// Renders one frame.
    fn draw(&mut self);

    /// Releases backend resources. Idempotent.
    fn cleanup(&mut self);
}
