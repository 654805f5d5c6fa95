use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use rpncalc::{run_lines, run_session};

/// rpncalc is an interactive calculator for arbitrary-precision integers.
///
/// Enter one expression per line, such as `x = ( 2 + 3 ) * 4`. Tokens are
/// separated by spaces. An empty line or `quit` ends the session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the session from a file instead of standard input.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Evaluates the given line instead of reading standard input. May be
    /// repeated; the lines share their variables.
    #[arg(short, long, value_name = "EXPR")]
    expr: Vec<String>,

    /// Increases log output on stderr (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|e| {
                                       eprintln!("Failed to read the input file '{}': {e}",
                                                 path.display());
                                       process::exit(1);
                                   });
        info!("reading session from {}", path.display());
        run_session(BufReader::new(file), &mut out, &mut err)
    } else if !args.expr.is_empty() {
        run_lines(&args.expr, &mut out, &mut err)
    } else {
        run_session(io::stdin().lock(), &mut out, &mut err)
    };

    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        process::exit(1);
    }
}
