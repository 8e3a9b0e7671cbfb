use std::path::PathBuf;

use log::{info, LevelFilter};
use structopt::StructOpt;

use glob_bench::utils::cases::CASES;
use glob_bench::utils::method::Method;
use glob_bench::utils::runner::Runner;
use glob_bench::utils::writer::StdoutWriter;

#[derive(Debug, StructOpt)]
#[structopt(about = "Times filesystem glob lookups against a fixed set of patterns")]
struct Cli {
    /// Matching facility to time
    #[structopt(long = "method", default_value = "glob", possible_values = Method::VARIANTS)]
    method: Method,
    /// Increase log verbosity (may be repeated)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
    /// Directory the patterns are resolved against
    #[structopt(parse(from_os_str))]
    search_path: PathBuf,
    /// Anything after the search path is accepted and ignored
    #[structopt(name = "rest", hidden = true, parse(from_os_str))]
    _rest: Vec<PathBuf>,
}

fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    // Missing <search-path> exits with status 1 and the usage on stderr.
    let args = Cli::from_args();
    setup_logger(args.verbose);
    info!("search_path={:?}, method={}", args.search_path, args.method);

    let writer = StdoutWriter::new();
    Runner::new(&args.search_path, args.method, &writer).run_all(CASES)?;

    Ok(())
}
