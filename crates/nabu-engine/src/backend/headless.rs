use anyhow::Context;
use bytemuck::{Pod, Zeroable};

use crate::coords::{CoordinateTransformer, Vec2};
use crate::logging::{RenderLogLevel, RenderLogger};
use crate::memory::{BufferError, GrowableBuffer};
use crate::render::{layout_hit_test_topmost, LayoutBox, LayoutResult, RenderContext};

use super::{RenderBackendInit, RendererBackend};

/// One device-space quad, laid out for direct upload as instance data.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
}

impl From<&LayoutBox> for QuadInstance {
    fn from(b: &LayoutBox) -> Self {
        Self {
            origin: b.origin.to_array(),
            size: b.size.to_array(),
        }
    }
}

/// Backend that performs the full CPU side of a frame without a GPU.
///
/// Each frame resolves the widget set into device space and packs it into a
/// quad instance buffer, exactly what a GPU backend would upload. Every
/// lifecycle call is timed through the backend's [`RenderLogger`].
pub struct HeadlessBackend {
    id: String,
    logger: RenderLogger,
    context: RenderContext,
    widgets: GrowableBuffer<LayoutBox>,
    layouts: GrowableBuffer<LayoutResult>,
    instances: GrowableBuffer<QuadInstance>,
    frames: u64,
    initialized: bool,
}

impl HeadlessBackend {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            logger: RenderLogger::disabled(&id),
            id,
            context: RenderContext::new(&CoordinateTransformer::default(), None),
            widgets: GrowableBuffer::new(),
            layouts: GrowableBuffer::new(),
            instances: GrowableBuffer::with_initial_capacity(64),
            frames: 0,
            initialized: false,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Layouts resolved against the current transformer.
    #[inline]
    pub fn layouts(&self) -> &[LayoutResult] {
        &self.layouts
    }

    /// Instances produced by the last `draw`.
    #[inline]
    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    #[inline]
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.instances.as_slice())
    }

    /// Index of the top-most widget under a logical point.
    pub fn hit_test(&self, logical_point: Vec2) -> Option<usize> {
        layout_hit_test_topmost(&self.layouts, logical_point)
    }

    fn relayout(&mut self) -> Result<(), BufferError> {
        self.layouts.clear();
        self.layouts.ensure_capacity(self.widgets.len())?;
        for widget in self.widgets.iter() {
            self.layouts.push(self.context.resolve(widget))?;
        }
        Ok(())
    }

    fn set_widgets(&mut self, widgets: &[LayoutBox]) -> Result<(), BufferError> {
        self.widgets.clear();
        self.widgets.extend_from_slice(widgets)?;
        self.relayout()
    }
}

impl RendererBackend for HeadlessBackend {
    fn id(&self) -> &str {
        &self.id
    }

    fn logger(&self) -> &RenderLogger {
        &self.logger
    }

    fn init(&mut self, init: &RenderBackendInit<'_>) -> anyhow::Result<()> {
        anyhow::ensure!(!self.initialized, "backend '{}' is already initialized", self.id);

        let device = init.transformer.device_viewport();
        anyhow::ensure!(
            device.x > 0.0 && device.y > 0.0 && device.is_finite(),
            "backend '{}': viewport has zero size ({}x{})",
            self.id,
            device.x,
            device.y
        );
        for path in [init.vertex_shader, init.fragment_shader, init.font_path].into_iter().flatten() {
            anyhow::ensure!(path.exists(), "backend '{}': missing resource {}", self.id, path.display());
        }

        if let Some(config) = init.logger_config {
            self.logger = RenderLogger::new(config, &self.id);
        }
        let span = self.logger.span(RenderLogLevel::Info, "init");

        self.context = RenderContext::from_viewport(&init.transformer);
        self.set_widgets(init.widgets)
            .with_context(|| format!("backend '{}': storing initial widgets", self.id))?;
        self.frames = 0;
        self.initialized = true;

        let params = span
            .is_recording()
            .then(|| format!("viewport={}x{} widgets={}", device.x, device.y, self.widgets.len()));
        self.logger.finish(span, params.as_deref());
        log::info!("renderer backend '{}' initialized", self.id);
        Ok(())
    }

    fn update_transformer(&mut self, transformer: &CoordinateTransformer) {
        let span = self.logger.span(RenderLogLevel::Info, "update_transformer");

        self.context = RenderContext::from_viewport(transformer);
        if let Err(err) = self.relayout() {
            log::error!("backend '{}': relayout after transformer change failed: {err}", self.id);
        }

        let params = span.is_recording().then(|| {
            let v = transformer.viewport_size();
            format!(
                "dpi={:.2} ui={:.2} viewport={}x{}",
                transformer.dpi_scale(),
                transformer.ui_scale(),
                v.x,
                v.y
            )
        });
        self.logger.finish(span, params.as_deref());
    }

    fn update_ui(&mut self, widgets: &[LayoutBox]) {
        let span = self.logger.span(RenderLogLevel::Info, "update_ui");
        if let Err(err) = self.set_widgets(widgets) {
            log::error!("backend '{}': widget update failed: {err}", self.id);
        }
        let params = span.is_recording().then(|| format!("widgets={}", widgets.len()));
        self.logger.finish(span, params.as_deref());
    }

    fn draw(&mut self) {
        if !self.initialized {
            log::debug!("backend '{}': draw before init ignored", self.id);
            return;
        }
        let span = self.logger.span(RenderLogLevel::Verbose, "draw");

        self.instances.clear();
        let packed = self
            .layouts
            .iter()
            .try_for_each(|layout| self.instances.push(QuadInstance::from(&layout.device)));
        if let Err(err) = packed {
            log::error!("backend '{}': frame {} dropped: {err}", self.id, self.frames);
        }
        self.frames = self.frames.wrapping_add(1);

        let params = span
            .is_recording()
            .then(|| format!("frame={} quads={}", self.frames, self.instances.len()));
        self.logger.finish(span, params.as_deref());
    }

    fn cleanup(&mut self) {
        if self.initialized {
            let span = self.logger.span(RenderLogLevel::Info, "cleanup");
            self.logger.finish(span, None);
            log::info!("renderer backend '{}' cleaned up after {} frames", self.id, self.frames);
        }

        self.logger.cleanup();
        self.widgets.clear();
        self.layouts.clear();
        self.instances.clear();
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::logging::{RenderLogSink, RenderLoggerConfig};

    use super::*;

    fn transformer(dpi: f32) -> CoordinateTransformer {
        CoordinateTransformer::new(dpi, 1.0, Vec2::new(800.0, 600.0))
    }

    fn ring_config() -> RenderLoggerConfig {
        RenderLoggerConfig {
            sink: RenderLogSink::RingBuffer,
            ring_capacity: 16,
            level: RenderLogLevel::Verbose,
            ..RenderLoggerConfig::default()
        }
    }

    const WIDGETS: [LayoutBox; 2] = [LayoutBox::new(0.0, 0.0, 100.0, 50.0), LayoutBox::new(10.0, 10.0, 20.0, 20.0)];

    fn ready(dpi: f32, config: &RenderLoggerConfig) -> HeadlessBackend {
        let mut backend = HeadlessBackend::new("headless");
        backend
            .init(&RenderBackendInit {
                widgets: &WIDGETS,
                logger_config: Some(config),
                ..RenderBackendInit::new(transformer(dpi))
            })
            .unwrap();
        backend
    }

    #[test]
    fn draw_packs_device_space_quads() {
        let mut backend = ready(2.0, &ring_config());
        backend.draw();

        assert_eq!(backend.frames(), 1);
        assert_eq!(
            backend.instances(),
            &[
                QuadInstance { origin: [0.0, 0.0], size: [200.0, 100.0] },
                QuadInstance { origin: [20.0, 20.0], size: [40.0, 40.0] },
            ]
        );
        assert_eq!(backend.instance_bytes().len(), 2 * 16);
    }

    #[test]
    fn transformer_update_relayouts() {
        let mut backend = ready(1.0, &ring_config());
        backend.update_transformer(&transformer(3.0));
        backend.draw();
        assert_eq!(backend.instances()[0].size, [300.0, 150.0]);
        assert_eq!(backend.layouts()[0].logical, WIDGETS[0]);
    }

    #[test]
    fn hit_test_returns_topmost_widget() {
        let backend = ready(2.0, &ring_config());
        assert_eq!(backend.hit_test(Vec2::new(15.0, 15.0)), Some(1));
        assert_eq!(backend.hit_test(Vec2::new(90.0, 40.0)), Some(0));
        assert_eq!(backend.hit_test(Vec2::new(150.0, 40.0)), None);
    }

    #[test]
    fn lifecycle_is_logged() {
        let mut backend = ready(1.0, &ring_config());
        backend.update_transformer(&transformer(2.0));
        backend.draw();

        let ring = backend.logger().ring().unwrap();
        let commands: Vec<_> = ring.iter().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, ["init", "update_transformer", "draw"]);
        assert_eq!(ring.latest().unwrap().parameters, "frame=1 quads=2");
    }

    #[test]
    fn info_level_skips_per_frame_commands() {
        let config = RenderLoggerConfig {
            level: RenderLogLevel::Info,
            ..ring_config()
        };
        let mut backend = ready(1.0, &config);
        backend.draw();
        backend.draw();
        assert_eq!(backend.logger().ring().unwrap().len(), 1);
    }

    #[test]
    fn init_rejects_empty_viewport() {
        let mut backend = HeadlessBackend::new("headless");
        let t = CoordinateTransformer::new(1.0, 1.0, Vec2::new(0.0, 600.0));
        assert!(backend.init(&RenderBackendInit::new(t)).is_err());
        assert!(!backend.is_initialized());
    }

    #[test]
    fn init_rejects_missing_font() {
        let mut backend = HeadlessBackend::new("headless");
        let init = RenderBackendInit {
            font_path: Some(Path::new("/definitely/not/here.ttf")),
            ..RenderBackendInit::new(transformer(1.0))
        };
        let err = backend.init(&init).unwrap_err();
        assert!(err.to_string().contains("missing resource"));
    }

    #[test]
    fn draw_before_init_does_nothing() {
        let mut backend = HeadlessBackend::new("headless");
        backend.draw();
        assert_eq!(backend.frames(), 0);
        assert!(backend.instances().is_empty());
    }

    #[test]
    fn cleanup_is_idempotent_and_allows_reinit() {
        let mut backend = ready(1.0, &ring_config());
        backend.cleanup();
        backend.cleanup();
        assert!(!backend.is_initialized());
        assert!(backend.logger().ring().is_none());

        backend.init(&RenderBackendInit::new(transformer(1.0))).unwrap();
        assert!(backend.is_initialized());
        assert!(backend.layouts().is_empty());
    }

    #[test]
    fn update_ui_replaces_widgets() {
        let mut backend = ready(1.0, &ring_config());
        backend.update_ui(&[LayoutBox::new(1.0, 2.0, 3.0, 4.0)]);
        backend.draw();
        assert_eq!(backend.instances(), &[QuadInstance { origin: [1.0, 2.0], size: [3.0, 4.0] }]);
    }
}
