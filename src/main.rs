//! hpgl-transform
//!
//! Translate, rotate, scale and shear the pen coordinates of HPGL files.

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use hpgl_transform::{USAGE, cli, parse_args};

#[derive(Debug, Parser)]
#[command(name = "hpgl-transform", version)]
#[command(about = "Apply geometric transformations to HPGL pen coordinates", long_about = None)]
#[command(after_help = USAGE)]
struct Args {
    /// More log output on stderr (-v info, -vv debug, -vvv trace); must come first
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Transformation flags, then the files to rewrite in place
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = parse_args(&args.args)
        .map_err(cli::Error::from)
        .and_then(|invocation| cli::run(&invocation, io::stdin().lock(), io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ cli::Error::Usage(_)) => {
            eprintln!("error: {e}\n\n{USAGE}");
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
