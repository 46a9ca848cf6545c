//! EMD CLI
//!
//! Generates NetLogo agent code from GP trees.

use emd_eval::PrimitiveRegistry;
use emdc::commands::{
    check_source, generate_source, list_primitives, parse_gen_options, read_file,
};
use emdc::{init_tracing, CliError};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "gen" => gen(&args[2..]),
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: emd check <file>");
                std::process::exit(1);
            }
            check(&args[2])
        }
        "prims" => {
            for line in list_primitives(&PrimitiveRegistry::with_builtins()) {
                println!("{line}");
            }
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("emd {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn gen(args: &[String]) -> Result<(), CliError> {
    let options = parse_gen_options(args)?;
    init_tracing(options.verbose);

    let path = args
        .iter()
        .find(|arg| !arg.starts_with('-'))
        .ok_or(CliError::MissingPath)?;
    let source = read_file(path)?;
    for line in generate_source(&source, &PrimitiveRegistry::with_builtins(), &options)? {
        println!("{line}");
    }
    Ok(())
}

fn check(path: &str) -> Result<(), CliError> {
    init_tracing(false);
    let source = read_file(path)?;
    let report = check_source(&source, &PrimitiveRegistry::with_builtins())?;
    println!("{path}: {report}");
    Ok(())
}

fn print_usage() {
    println!("EMD - NetLogo generation from GP trees");
    println!();
    println!("Usage: emd <command> [options]");
    println!();
    println!("Commands:");
    println!("  gen <file>      Generate NetLogo for every tree in a file, one per line");
    println!("  check <file>    Parse and arity-check a tree file");
    println!("  prims           List built-in primitives as name/arity");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Gen options:");
    println!("  --sequential    Evaluate trees on one thread");
    println!("  --threads=<n>   Worker threads for parallel generation");
    println!("  --verbose, -v   Debug logging on stderr");
    println!();
    println!("Tree files hold trees in prefix notation, `;` starts a comment:");
    println!("  closest-water-patch(patches-with-water, farms)");
    println!();
    println!("Environment:");
    println!("  EMD_LOG         Log filter (falls back to RUST_LOG), e.g. emd_eval=trace");
}
