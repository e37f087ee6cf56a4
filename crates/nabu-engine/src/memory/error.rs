use std::collections::TryReserveError;

/// Failure to grow a [`GrowableBuffer`](super::GrowableBuffer).
///
/// The buffer is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Zero-sized element types have no meaningful capacity.
    #[error("element type has zero size")]
    ZeroSizedElement,

    /// Doubling the capacity would wrap around `usize`.
    #[error("capacity overflow while growing from {current} to hold {required} elements")]
    CapacityOverflow { current: usize, required: usize },

    /// The allocator refused the request.
    #[error("failed to allocate room for {requested} elements")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
