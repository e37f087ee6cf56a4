use crate::coords::CoordinateTransformer;
use crate::logging::{RenderLogLevel, RenderLogger};

use super::{RenderBackendInit, RendererBackend};

/// Backend that renders nothing.
///
/// Still honours the lifecycle and logs every call, which makes it a useful
/// fallback and a cheap stand-in for tests.
pub struct NullBackend {
    id: String,
    logger: RenderLogger,
    transformer: CoordinateTransformer,
    frames: u64,
}

impl NullBackend {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            logger: RenderLogger::disabled(&id),
            id,
            transformer: CoordinateTransformer::default(),
            frames: 0,
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }
}

impl RendererBackend for NullBackend {
    fn id(&self) -> &str {
        &self.id
    }

    fn logger(&self) -> &RenderLogger {
        &self.logger
    }

    fn init(&mut self, init: &RenderBackendInit<'_>) -> anyhow::Result<()> {
        if let Some(config) = init.logger_config {
            self.logger = RenderLogger::new(config, &self.id);
        }
        self.transformer = init.transformer;
        self.logger.log(RenderLogLevel::Info, "init", None, 0.0);
        Ok(())
    }

    fn update_transformer(&mut self, transformer: &CoordinateTransformer) {
        self.transformer = *transformer;
        self.logger.log(RenderLogLevel::Info, "update_transformer", None, 0.0);
    }

    fn draw(&mut self) {
        self.frames = self.frames.wrapping_add(1);
        self.logger.log(RenderLogLevel::Verbose, "draw", None, 0.0);
    }

    fn cleanup(&mut self) {
        self.logger.log(RenderLogLevel::Info, "cleanup", None, 0.0);
        self.logger.cleanup();
    }
}
