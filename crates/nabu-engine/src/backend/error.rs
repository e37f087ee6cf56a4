use crate::memory::BufferError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// All slots are taken; the registry never evicts.
    #[error("backend registry is full ({max} backends)")]
    Full { max: usize },

    #[error("backend registry could not grow")]
    Allocation(#[from] BufferError),
}
