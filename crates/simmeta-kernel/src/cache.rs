//! Collective cache initialization contract
//!
//! Particle creation modules fill a per-super-cell cache (for example a copy of
//! the field values around the super cell) before their kernels run. The
//! functor that builds that cache only has to satisfy this interface; the
//! engine calling it is not part of this crate.

/// Builds the cache for one super cell, collectively for all threads of
/// `worker`.
pub trait InitCacheFunctor<Index> {
    /// Execution context shared by the cooperating threads.
    type Worker;
    /// Anything else the cache needs (field boxes, time step, ...).
    type AdditionalData;
    /// The initialized cache.
    type Cache;

    fn get_cache(
        worker: &Self::Worker,
        super_cell_index: Index,
        additional: Self::AdditionalData,
    ) -> Self::Cache;
}
