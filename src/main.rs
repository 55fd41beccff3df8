use std::io;

use anyhow::{Context, Result};
use big_calc::{Session, SessionConfig};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "big_calc",
    about = "Arbitrary precision calculator for non-negative integers: +, -, *, / and !"
)]
struct Opt {
    /// Text shown before every input line
    #[structopt(long, default_value = ">> ")]
    prompt: String,
    /// Do not print the banner
    #[structopt(long, short)]
    quiet: bool,
    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[structopt(short, parse(from_occurrences))]
    verbose: u8,
}

/// Logs go to stderr so that stdout only carries answers.
fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| level.to_owned());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(env))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    setup_logger(opt.verbose);

    let config = SessionConfig { prompt: opt.prompt, banner: !opt.quiet };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config)
        .run()
        .context("reading from stdin or writing to stdout failed")?;

    Ok(())
}
