//! The `gen` command: generate NetLogo for every tree in a file.

use emd_eval::{generate_batch, BatchConfig, PrimitiveRegistry};
use emd_ir::parse_trees;

use super::CliError;

/// Options for `emd gen`.
#[derive(Clone, Debug, Default)]
pub struct GenOptions {
    /// Scheduling for the batch of trees.
    pub batch: BatchConfig,
    /// Force `debug` logging.
    pub verbose: bool,
}

/// Parse `gen` flags.
///
/// Arguments that do not start with `-` are positional and skipped here.
pub fn parse_gen_options(args: &[String]) -> Result<GenOptions, CliError> {
    let mut options = GenOptions::default();
    for arg in args {
        if arg == "--sequential" {
            options.batch.parallel = false;
        } else if let Some(n) = arg.strip_prefix("--threads=") {
            let threads = n
                .parse::<usize>()
                .ok()
                .filter(|&t| t > 0)
                .ok_or_else(|| CliError::InvalidOption(arg.clone()))?;
            options.batch.threads = Some(threads);
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if arg.starts_with('-') {
            return Err(CliError::InvalidOption(arg.clone()));
        }
    }
    Ok(options)
}

/// Generate one NetLogo fragment per tree in `source`, in file order.
///
/// Every tree is evaluated even if an earlier one fails; the first failure
/// (by position) is the one reported.
pub fn generate_source(
    source: &str,
    registry: &PrimitiveRegistry,
    options: &GenOptions,
) -> Result<Vec<String>, CliError> {
    let trees = parse_trees(source, registry).map_err(|e| CliError::parse(source, e))?;
    tracing::debug!(trees = trees.len(), "parsed");

    generate_batch(&trees, registry, &options.batch)
        .into_iter()
        .enumerate()
        .map(|(tree, result)| result.map_err(|source| CliError::Eval { tree, source }))
        .collect()
}
