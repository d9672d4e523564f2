use opvm::Error;
use opvm::diagnostics;
use opvm::interpreter::RunConfig;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "opvm")]
#[command(about = "Run a program written in opcode assembly")]
struct Args {
    /// Source file to run
    file: PathBuf,

    /// Print the parsed program before running it
    #[arg(long)]
    dump: bool,

    /// Parse and link only, do not execute
    #[arg(long = "no-run")]
    no_run: bool,

    /// Abort after executing this many instructions
    #[arg(long = "max-steps")]
    max_steps: Option<u64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    let filepath = args.file.display().to_string();

    let contents = match fs::read_to_string(&args.file) {
        Ok(contents) => contents,
        Err(err) => {
            error!("Failed to read {}: {}", filepath, err);
            process::exit(1);
        }
    };
    let color = io::stderr().is_terminal();

    let program = match opvm::parse(&contents) {
        Ok(program) => program,
        Err(err) => {
            eprint!(
                "{}",
                diagnostics::render(&err, None, &filepath, &contents, color)
            );
            process::exit(1);
        }
    };
    info!(instructions = program.len(), "parsed {}", filepath);

    if args.dump {
        print!("{}", program.listing());
    }

    let config = RunConfig {
        max_steps: args.max_steps,
    };
    let result = if args.no_run {
        opvm::interpreter::LabelTable::link(&program)
            .map(|_| ())
            .map_err(Error::from)
    } else {
        opvm::run(&program, io::stdin().lock(), io::stdout().lock(), config)
    };

    if let Err(err) = result {
        eprint!(
            "{}",
            diagnostics::render(&err, Some(&program), &filepath, &contents, color)
        );
        process::exit(1);
    }
}
