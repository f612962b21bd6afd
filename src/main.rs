use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mime_magic_reader::display::{self, DisplayOptions};
use mime_magic_reader::{MagicReader, DEFAULT_MAGIC_PATH};

/// Utility that parses the MIME types magic database.
///
/// Reads the binary magic file to get binary signatures for filetypes and
/// prints all types with their signatures.
#[derive(Debug, Parser)]
#[command(name = "mime-magic", version, about, long_about)]
struct Cli {
    /// Path to the magic database
    #[arg(value_name = "FILE", env = "MIME_MAGIC_FILE", default_value = DEFAULT_MAGIC_PATH)]
    file: PathBuf,

    /// Turn on debug info
    #[arg(short, long)]
    debug: bool,

    /// Print mask
    #[arg(short = 'm', long = "with-mask")]
    with_mask: bool,

    /// Print value as sequence of characters
    #[arg(short = 's', long = "value-as-string")]
    value_as_string: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `--debug` shows everything and the default is warnings only.
fn init_logging(debug: bool) {
    let default_level = if debug { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut reader = MagicReader::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let sections = reader
        .read_sections()
        .with_context(|| format!("failed to decode {}", cli.file.display()))?;
    reader.close();

    let options = DisplayOptions {
        show_mask: cli.with_mask,
        value_as_string: cli.value_as_string,
    };
    let mut out = BufWriter::new(io::stdout().lock());
    display::write_sections(&mut out, &sections, options)?;
    out.flush()?;
    Ok(())
}
