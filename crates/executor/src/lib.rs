//! Batch executors for the folio pipeline.
//!
//! A single report generation is synchronous and shares nothing mutable, so a
//! batch of reports can be fanned out over any executor. Results always come
//! back in input order.
//!
//! - [`SyncExecutor`]: one report after another
//! - [`RayonExecutor`]: rayon's work-stealing pool (feature: `rayon`)

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

use std::fmt::Debug;

/// Maps a function over a batch of independent items.
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item and returns the results in input order.
    ///
    /// Items are independent: when `R` is a `Result`, one error never stops
    /// the remaining items.
    fn map_ordered<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync;

    /// Number of items that may be processed at once.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Processes items sequentially on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn map_ordered<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}

/// Concrete executor choice.
///
/// `Executor` has generic methods and cannot be a trait object, so the
/// generator stores this enum.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl Executor for ExecutorImpl {
    fn map_ordered<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        match self {
            ExecutorImpl::Sync(sync) => sync.map_ordered(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(pool) => pool.map_ordered(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(sync) => sync.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(pool) => pool.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(sync) => sync.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(pool) => pool.name(),
        }
    }
}

/// Rayon when the feature is enabled, otherwise sequential.
impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}
