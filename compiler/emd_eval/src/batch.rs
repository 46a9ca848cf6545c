//! Generation for a whole population.

use rayon::prelude::*;

use emd_ir::Tree;
use emd_primitives::{EvalContext, EvalError, PrimitiveRegistry};

use crate::generate;

/// Stack size for batch worker threads.
///
/// Evaluation grows the stack on demand, so this only sets how often that
/// happens on deep trees.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// How a batch is scheduled.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Evaluate trees on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count. `None` lets rayon pick.
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            parallel: true,
            threads: None,
        }
    }
}

impl BatchConfig {
    /// Single-threaded evaluation on the caller's thread.
    pub fn sequential() -> Self {
        BatchConfig {
            parallel: false,
            threads: None,
        }
    }
}

/// Generate NetLogo for every tree in `trees`.
///
/// Each tree is evaluated into its own carrier. Results come back in input
/// order whichever way the batch is scheduled; one tree failing does not
/// stop the others.
pub fn generate_batch(
    trees: &[Tree],
    registry: &PrimitiveRegistry,
    config: &BatchConfig,
) -> Vec<Result<String, EvalError>> {
    if config.parallel && trees.len() > 1 {
        generate_parallel(trees, registry, config)
    } else {
        tracing::debug!(trees = trees.len(), "generating sequentially");
        generate_sequential(trees, registry)
    }
}

fn generate_sequential(
    trees: &[Tree],
    registry: &PrimitiveRegistry,
) -> Vec<Result<String, EvalError>> {
    trees
        .iter()
        .map(|tree| generate(tree, registry, EvalContext::for_thread(0)))
        .collect()
}

/// Uses a scoped pool so no worker outlives the call.
fn generate_parallel(
    trees: &[Tree],
    registry: &PrimitiveRegistry,
    config: &BatchConfig,
) -> Vec<Result<String, EvalError>> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .stack_size(WORKER_STACK_SIZE)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            tracing::debug!(
                trees = trees.len(),
                threads = pool.current_num_threads(),
                "generating in parallel"
            );
            pool.install(|| {
                trees
                    .par_iter()
                    .map(|tree| {
                        let thread = rayon::current_thread_index().unwrap_or(0);
                        generate(tree, registry, EvalContext::for_thread(thread))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), generating sequentially");
            generate_sequential(trees, registry)
        })
}
