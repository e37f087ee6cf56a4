use crate::memory::GrowableBuffer;

use super::{RegistryError, RendererBackend};

/// Default number of backend slots.
pub const MAX_BACKENDS: usize = 8;

/// Bounded, append-only table of renderer backends.
///
/// Owned by the application's startup routine and passed to whoever needs
/// lookup. Registration order matters: the first backend registered is the
/// default. There is no unregistration.
///
/// The registry only provides discovery; it never drives backend lifecycles.
pub struct BackendRegistry {
    backends: GrowableBuffer<Box<dyn RendererBackend>>,
    max: usize,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::with_max(MAX_BACKENDS)
    }

    pub fn with_max(max: usize) -> Self {
        Self {
            backends: GrowableBuffer::with_initial_capacity(max),
            max,
        }
    }

    /// Appends `backend`.
    ///
    /// A duplicate id is accepted but shadowed: lookups keep returning the
    /// earlier registration.
    pub fn register(&mut self, backend: Box<dyn RendererBackend>) -> Result<(), RegistryError> {
        if self.backends.len() >= self.max {
            log::warn!("backend '{}' rejected: registry full ({} slots)", backend.id(), self.max);
            return Err(RegistryError::Full { max: self.max });
        }
        if self.position(backend.id()).is_some() {
            log::warn!("backend id '{}' registered twice; lookups return the first", backend.id());
        }

        log::debug!("registered renderer backend '{}'", backend.id());
        self.backends.push(backend)?;
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.backends.iter().position(|b| b.id() == id)
    }

    /// First backend whose id equals `id`.
    pub fn get(&self, id: &str) -> Option<&dyn RendererBackend> {
        self.position(id).map(|i| self.backends[i].as_ref())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn RendererBackend + 'static)> {
        let i = self.position(id)?;
        Some(self.backends[i].as_mut())
    }

    /// First registered backend, if any.
    pub fn default_backend(&self) -> Option<&dyn RendererBackend> {
        self.backends.first().map(|b| b.as_ref())
    }

    pub fn default_backend_mut(&mut self) -> Option<&mut (dyn RendererBackend + 'static)> {
        let backend = self.backends.first_mut()?;
        Some(backend.as_mut())
    }

    /// `preferred` when registered, otherwise the default backend.
    pub fn resolve_mut(&mut self, preferred: Option<&str>) -> Option<&mut (dyn RendererBackend + 'static)> {
        let index = match preferred {
            Some(id) => match self.position(id) {
                Some(i) => Some(i),
                None => {
                    log::warn!("renderer backend '{id}' not registered, falling back to default");
                    (!self.backends.is_empty()).then_some(0)
                }
            },
            None => (!self.backends.is_empty()).then_some(0),
        }?;
        Some(self.backends[index].as_mut())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.backends.iter().map(|b| b.id())
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
