//! Execution primitives the pipeline is written against

use std::ops::Deref;
use std::sync::Arc;

/// Fixed chunk size for reductions
///
/// Chunk boundaries do not depend on scheduling, so a reduction over the same
/// snapshot always combines values in the same order and yields the same bits.
pub const AGGREGATE_CHUNK: usize = 1024;

/// The four collection primitives of a parallel execution substrate
pub trait ExecutionEngine {
    /// Apply `f` to every item of a lazy source; output order is unspecified
    fn map<I, T, U, F>(&self, source: I, f: F) -> Vec<U>
    where
        I: Iterator<Item = T> + Send,
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync + Send;

    /// Keep the items for which `keep` returns true
    fn filter<T, P>(&self, items: Vec<T>, keep: P) -> Vec<T>
    where
        T: Send,
        P: Fn(&T) -> bool + Sync + Send;

    /// Freeze a collection into an immutable snapshot
    fn materialize<T>(&self, items: Vec<T>) -> Materialized<T> {
        Materialized::from(items)
    }

    /// Reduce a snapshot: `fold` within chunks of [`AGGREGATE_CHUNK`] items,
    /// then `reduce` the chunk results in chunk order
    fn aggregate<T, A, ID, F, R>(
        &self,
        items: &Materialized<T>,
        identity: ID,
        fold: F,
        reduce: R,
    ) -> A
    where
        T: Sync,
        A: Send,
        ID: Fn() -> A + Sync + Send,
        F: Fn(A, &T) -> A + Sync + Send,
        R: Fn(A, A) -> A + Sync + Send;

    /// Number of workers evaluating in parallel
    fn parallelism(&self) -> usize;
}

/// An evaluated collection shared between readers
///
/// Cloning is cheap and every clone sees the same items in the same order.
#[derive(Debug)]
pub struct Materialized<T> {
    items: Arc<[T]>,
}

impl<T> Materialized<T> {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in snapshot order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Clone the first `n` items
    pub fn head(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().take(n).cloned().collect()
    }
}

impl<T> Clone for Materialized<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> From<Vec<T>> for Materialized<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> Deref for Materialized<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
