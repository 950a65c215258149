use anyhow::{Context, Result};
use clap::Parser;
use formdt_config::Config;
use formdt_engine::{
    CellSelection, FormatOptions, format_markdown, format_notebook, io, notebook_to_string,
    write_notebook,
};
use std::{num::NonZeroUsize, path::PathBuf, process};

/// Format markdown files with configurable line length
#[derive(Parser)]
#[command(name = "formdt", version, about, long_about = None)]
struct Cli {
    /// Markdown or Jupyter notebook file to format
    file: PathBuf,

    /// Override line length (default: from .formdt or 80)
    #[arg(short, long)]
    line_length: Option<NonZeroUsize>,

    /// Write changes back to file (default: print to stdout)
    #[arg(short, long)]
    write: bool,

    /// Cell indices to format (e.g. '0,2,5' or '1-3,7'). Notebook only.
    #[arg(short, long)]
    cells: Option<String>,

    /// Format all markdown cells. Notebook only.
    #[arg(short, long)]
    markdown: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let config = config.with_line_length_override(cli.line_length.map(NonZeroUsize::get));
    log::debug!("formatting at line length {}", config.line_length);

    if !cli.file.exists() {
        eprintln!("Error: File not found: {}", cli.file.display());
        process::exit(1);
    }

    if let Err(e) = run(&cli, &config.format_options()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, options: &FormatOptions) -> Result<()> {
    if io::is_notebook(&cli.file) {
        format_notebook_file(cli, options)
    } else {
        format_markdown_file(cli, options)
    }
}

fn format_notebook_file(cli: &Cli, options: &FormatOptions) -> Result<()> {
    let selection = CellSelection::from_flags(cli.cells.as_deref(), cli.markdown)?;
    if selection.is_none() {
        log::warn!(
            "no cells selected in {}; pass --markdown or --cells to format markdown cells",
            cli.file.display()
        );
    }

    let notebook = format_notebook(&cli.file, options, &selection)?;
    if cli.write {
        write_notebook(&notebook, &cli.file)?;
        log::info!("wrote {}", cli.file.display());
    } else {
        print!("{}", notebook_to_string(&notebook)?);
    }
    Ok(())
}

fn format_markdown_file(cli: &Cli, options: &FormatOptions) -> Result<()> {
    if cli.cells.is_some() || cli.markdown {
        log::warn!("--cells and --markdown only apply to notebooks; ignoring");
    }

    let content = io::read_document(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let formatted = format_markdown(&content, options);

    if cli.write {
        io::write_document(&cli.file, &formatted)
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
        log::info!("wrote {}", cli.file.display());
    } else {
        println!("{formatted}");
    }
    Ok(())
}
