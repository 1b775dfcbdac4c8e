#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}

/// Owns the thread pool used for data parallel work.
#[derive(Clone)]
pub struct Parallelism {
    thread_pool: Arc<ThreadPool>,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` limited to the given amount of threads.
    pub fn new(available_cpus: usize) -> Self {
        Self { thread_pool: Arc::new(ThreadPool::new(available_cpus.max(1))) }
    }

    /// Executes given operation on the owned thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.thread_pool.execute(op)
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(get_cpus())
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates a new instance of `Environment` with a repeatable random sequence and a logger
    /// which swallows all messages.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)), Parallelism::default(), Arc::new(|_: &str| {}))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Parallelism::default(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
