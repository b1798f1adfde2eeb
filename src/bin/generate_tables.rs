use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enosc_tables::{Overrides, Tables, load_config, write_tables};

/// Generate the oscillator lookup tables.
#[derive(Parser)]
#[command(name = "generate_tables")]
struct Args {
    /// TOML config, defaults to ./enosc_tables.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let quiet = args.quiet;
    let config = load_config(args.config.as_deref())?.with_overrides(args.overrides);
    // progress goes to stderr when the tables go to stdout
    let log = |msg: String| {
        if quiet {
            return;
        }
        if config.writes_stdout() {
            eprintln!("{msg}");
        } else {
            println!("{msg}");
        }
    };

    log("Generating tables...".to_string());
    let tables = Tables::generate();
    for (spec, count) in tables.element_counts() {
        log(format!("Generated {} ({} elements)", spec.name, count));
    }

    if config.writes_stdout() {
        let stdout = io::stdout();
        let mut w = stdout.lock();
        write_tables(&tables, &config, &mut w).context("failed to write tables to stdout")?;
        w.flush()?;
    } else {
        let file = fs::File::create(&config.out)
            .with_context(|| format!("failed to create {}", config.out.display()))?;
        let mut w = BufWriter::new(file);
        write_tables(&tables, &config, &mut w)
            .with_context(|| format!("failed to write {}", config.out.display()))?;
        w.flush()?;
        log(format!("Wrote {:?} to {}", config.format, config.out.display()));
    }

    Ok(())
}
