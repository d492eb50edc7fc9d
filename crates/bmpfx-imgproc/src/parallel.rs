use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride for AutoRows must be valid.
    #[error("row stride must be > 0 for AutoRows strategy")]
    InvalidRowStride(usize),
}

/// Controls how parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process every element in parallel.
    ///
    /// This maximizes parallelism but may have overhead for small operations.
    #[default]
    ParallelElements,

    /// Use the global Rayon thread pool to process rows (chunks) in parallel.
    ///
    /// You must provide the row stride in elements (the image width in pixels).
    /// This is often more cache-friendly than [`ExecutionStrategy::ParallelElements`].
    AutoRows(usize),

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Map a user facing thread count to a strategy.
    ///
    /// `0` selects the global pool, `1` runs serially and any other value builds a
    /// local pool with that many threads.
    pub fn from_threads(threads: usize) -> Self {
        match threads {
            0 => ExecutionStrategy::ParallelElements,
            1 => ExecutionStrategy::Serial,
            n => ExecutionStrategy::Fixed(n),
        }
    }
}

fn build_pool(n: usize) -> Result<rayon::ThreadPool, ParallelError> {
    if n == 0 {
        return Err(ParallelError::InvalidThreadCount(n));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))
}

/// Fill every slot of `dst` with `f(index)`.
///
/// Each slot is written exactly once and `f` only gets its own index, so the slots can
/// be computed in any order. `f` usually reads from a shared input buffer.
///
/// # Arguments
///
/// * `dst` - The destination slice, already sized to the output.
/// * `strategy` - The execution strategy.
/// * `f` - Computes the value of the slot at a given linear index.
pub fn fill_indexed<T, F>(
    dst: &mut [T],
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    match strategy {
        ExecutionStrategy::Serial => {
            dst.iter_mut().enumerate().for_each(|(i, d)| *d = f(i));
        }
        ExecutionStrategy::ParallelElements => {
            dst.par_iter_mut().enumerate().for_each(|(i, d)| *d = f(i));
        }
        ExecutionStrategy::AutoRows(stride) => {
            if stride == 0 {
                return Err(ParallelError::InvalidRowStride(stride));
            }
            dst.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(row, dst_row)| {
                    let offset = row * stride;
                    dst_row
                        .iter_mut()
                        .enumerate()
                        .for_each(|(col, d)| *d = f(offset + col));
                });
        }
        ExecutionStrategy::Fixed(n) => {
            let pool = build_pool(n)?;
            pool.install(|| {
                dst.par_iter_mut().enumerate().for_each(|(i, d)| *d = f(i));
            });
        }
    }
    Ok(())
}
