//! Thread-pool engine backed by rayon
//!
//! Each engine owns a dedicated pool rather than using rayon's global one, so
//! the pool's lifetime is exactly the lifetime of a run.

use super::traits::{ExecutionEngine, Materialized, AGGREGATE_CHUNK};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Parallel engine session
///
/// Started with [`RayonEngine::start`]; the pool is released when the engine
/// is stopped or dropped, whichever comes first.
pub struct RayonEngine {
    pool: ThreadPool,
}

impl RayonEngine {
    /// Start a session with `threads` workers (`None` lets rayon decide)
    pub fn start(threads: Option<usize>) -> Result<Self, ThreadPoolBuildError> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("duration-worker-{}", index));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }

        let pool = builder.build()?;
        log::info!(
            "Execution engine started ({} worker threads)",
            pool.current_num_threads()
        );

        Ok(Self { pool })
    }

    /// End the session explicitly
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RayonEngine {
    fn drop(&mut self) {
        log::info!(
            "Execution engine stopped ({} worker threads released)",
            self.pool.current_num_threads()
        );
    }
}

impl ExecutionEngine for RayonEngine {
    fn map<I, T, U, F>(&self, source: I, f: F) -> Vec<U>
    where
        I: Iterator<Item = T> + Send,
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        self.pool
            .install(|| source.par_bridge().map(|item| f(item)).collect())
    }

    fn filter<T, P>(&self, items: Vec<T>, keep: P) -> Vec<T>
    where
        T: Send,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.pool
            .install(|| items.into_par_iter().filter(|item| keep(item)).collect())
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
        // Only the slice crosses into the pool; it needs `T: Sync`, not `T: Send`
        let slice = items.as_slice();
        let partials: Vec<A> = self.pool.install(|| {
            slice
                .par_chunks(AGGREGATE_CHUNK)
                .map(|chunk| chunk.iter().fold(identity(), |acc, item| fold(acc, item)))
                .collect()
        });

        partials.into_iter().fold(identity(), |acc, part| reduce(acc, part))
    }

    fn parallelism(&self) -> usize {
        self.pool.current_num_threads()
    }
}
