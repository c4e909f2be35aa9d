mod cli;
mod errors;
mod format;
mod pause;

use cli::{AppArgs, Base, ColorMode};
use format::OutputConfig;
use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(err) = run() {
        if is_broken_pipe(&err) {
            return;
        }
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run() -> anyhow::Result<()> {
    let args = cli::parse_cli_args()?;
    tracing::debug!(?args, "parsed arguments");

    let stdout = StandardStream::stdout(color_choice(args.color));
    {
        let mut stdout = stdout.lock();
        let written = write_powers(&mut stdout, &args)?;
        stdout.flush()?;
        tracing::debug!(written, "sequence complete");
    }

    if pause::should_pause(args.pause) {
        pause::wait(pause::KeySource::detect())?;
    }

    Ok(())
}

/// Pulls the sequence described by `args` and writes it to `output`.
fn write_powers<W: WriteColor + ?Sized>(output: &mut W, args: &AppArgs) -> anyhow::Result<u64> {
    let config = OutputConfig::new(args.separator.as_str());
    match args.base {
        Base::I32(base) => {
            format::write_sequence(output, powers::powers(base, args.exponent), &config)
        }
        Base::I64(base) => {
            format::write_sequence(output, powers::powers(base, args.exponent), &config)
        }
    }
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|err| err.kind() == io::ErrorKind::BrokenPipe)
        .unwrap_or(false)
}
