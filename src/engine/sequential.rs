//! Single-threaded engine

use super::traits::{ExecutionEngine, Materialized, AGGREGATE_CHUNK};

/// Evaluates everything on the calling thread
///
/// Uses the same chunked reduction as the parallel engine, so both produce
/// bit-identical aggregates over the same snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn map<I, T, U, F>(&self, source: I, f: F) -> Vec<U>
    where
        I: Iterator<Item = T> + Send,
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        source.map(f).collect()
    }

    fn filter<T, P>(&self, items: Vec<T>, keep: P) -> Vec<T>
    where
        T: Send,
        P: Fn(&T) -> bool + Sync + Send,
    {
        items.into_iter().filter(|item| keep(item)).collect()
    }

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
        R: Fn(A, A) -> A + Sync + Send,
    {
        items
            .as_slice()
            .chunks(AGGREGATE_CHUNK)
            .map(|chunk| chunk.iter().fold(identity(), |acc, item| fold(acc, item)))
            .fold(identity(), |acc, part| reduce(acc, part))
    }

    fn parallelism(&self) -> usize {
        1
    }
}
