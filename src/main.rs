//! relnorm CLI - relational normalization analysis
//!
//! Commands:
//!   closure   - Attribute-set closure under the relation's dependencies
//!   keys      - Candidate keys and prime attributes
//!   nf        - Normal-form classification (2NF/3NF/BCNF)
//!   minify    - Minimal cover with the elimination trace
//!   lossless  - Tableau-chase lossless-join check for a decomposition
//!   preserve  - Dependency-preservation check for a decomposition

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        cli::print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "closure" => cli::cmd_closure(&args[2..]),
        "keys" => cli::cmd_keys(&args[2..]),
        "nf" => cli::cmd_nf(&args[2..]),
        "minify" => cli::cmd_minify(&args[2..]),
        "lossless" => cli::cmd_lossless(&args[2..]),
        "preserve" => cli::cmd_preserve(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("relnorm {}", relnorm::VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            cli::print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            cli::print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
