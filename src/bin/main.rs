use std::{io::Read, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use clap_verbosity_flag::Verbosity;
use simplelog::{ColorChoice, TerminalMode, TermLogger};
use ubag::{script::run_script, ArrayBag, UndoableBag};

/// Run a script of bag commands against a bag with undo history
#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Cli {
    /// Script to run; read from stdin when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    script: Option<PathBuf>,

    /// Maximum number of entries the bag may hold
    #[arg(short, long)]
    capacity: Option<usize>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn init_log(verbosity: &Verbosity) -> Result<()> {
    TermLogger::init(
        verbosity.log_level_filter(),
        simplelog::ConfigBuilder::new()
            .add_filter_allow_str("ubag")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_log(&cli.verbosity)?;

    let script = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read script from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Unable to read script from stdin")?;
            buf
        }
    };

    let bag = match cli.capacity {
        Some(capacity) => ArrayBag::bounded(capacity),
        None => ArrayBag::new(),
    };
    let mut bag = UndoableBag::with_bag(bag);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_script(&mut bag, &script, &mut out).with_context(|| "Failed to run script")?;
    Ok(())
}
