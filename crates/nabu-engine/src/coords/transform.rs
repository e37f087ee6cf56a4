use super::Vec2;

/// Named coordinate spaces understood by [`CoordinateTransformer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordinateSpace {
    /// Authoring units, before UI scaling.
    World,
    /// UI-scaled units used by layout and hit-testing.
    Logical,
    /// DPI-scaled device pixels consumed by the GPU backend.
    Screen,
}

/// Converts points between world, logical and screen space.
///
/// ```text
/// world --(* ui_scale)--> logical --(* dpi_scale)--> screen
/// ```
///
/// A zero scale factor is tolerated: its inverse falls back to `1.0` instead of
/// producing infinities. All conversions are pure and never fail.
///
/// The value only changes through [`reinit`](Self::reinit); callers sharing it
/// across threads must synchronize that themselves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateTransformer {
    dpi_scale: f32,
    ui_scale: f32,
    /// Viewport extent in logical units.
    viewport_size: Vec2,
}

impl CoordinateTransformer {
    #[inline]
    pub const fn new(dpi_scale: f32, ui_scale: f32, viewport_size: Vec2) -> Self {
        Self {
            dpi_scale,
            ui_scale,
            viewport_size,
        }
    }

    /// Replaces all parameters, e.g. after a resize or a DPI change.
    pub fn reinit(&mut self, dpi_scale: f32, ui_scale: f32, viewport_size: Vec2) {
        *self = Self::new(dpi_scale, ui_scale, viewport_size);
    }

    #[inline]
    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }

    #[inline]
    pub fn ui_scale(&self) -> f32 {
        self.ui_scale
    }

    #[inline]
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Viewport extent in device pixels.
    #[inline]
    pub fn device_viewport(&self) -> Vec2 {
        self.logical_to_screen(self.viewport_size)
    }

    #[inline]
    pub fn screen_to_logical(&self, p: Vec2) -> Vec2 {
        if self.dpi_scale == 0.0 { p } else { p / self.dpi_scale }
    }

    #[inline]
    pub fn logical_to_screen(&self, p: Vec2) -> Vec2 {
        p * self.dpi_scale
    }

    #[inline]
    pub fn world_to_logical(&self, p: Vec2) -> Vec2 {
        p * self.ui_scale
    }

    #[inline]
    pub fn logical_to_world(&self, p: Vec2) -> Vec2 {
        if self.ui_scale == 0.0 { p } else { p / self.ui_scale }
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        self.logical_to_screen(self.world_to_logical(p))
    }

    #[inline]
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        self.logical_to_world(self.screen_to_logical(p))
    }

    /// Converts `p` from one space to another. Same-space conversion is the identity.
    pub fn convert(&self, from: CoordinateSpace, to: CoordinateSpace, p: Vec2) -> Vec2 {
        use CoordinateSpace::*;

        match (from, to) {
            (World, Logical) => self.world_to_logical(p),
            (Logical, World) => self.logical_to_world(p),
            (Logical, Screen) => self.logical_to_screen(p),
            (Screen, Logical) => self.screen_to_logical(p),
            (World, Screen) => self.world_to_screen(p),
            (Screen, World) => self.screen_to_world(p),
            (World, World) | (Logical, Logical) | (Screen, Screen) => p,
        }
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new(1.0, 1.0, Vec2::ZERO)
    }
}
