//! Command-line interface for markdown-notebook
//! Converts a Markdown document into a Jupyter notebook.
//!
//! Usage:
//!   markdown-notebook `<input.md>` [`<output.ipynb>`] [--config `<path>`] [--stdout]
use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use markdown_notebook_config::Config;
use markdown_notebook_engine::{convert, convert_file, default_output_path, read_file};
use std::path::{Path, PathBuf};
use std::process;

fn cli() -> Command {
    Command::new("markdown-notebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown document into a Jupyter notebook")
        .arg(
            Arg::new("input")
                .help("Path to the Markdown file to convert")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the notebook (defaults to the input path with .ipynb)")
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a config file (defaults to ~/.config/markdown-notebook/config.toml)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the notebook JSON instead of writing a file")
                .action(ArgAction::SetTrue)
                .conflicts_with("output"),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        log::error!("Conversion failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow!("No input file provided"))?;
    let config = load_config(matches.get_one::<PathBuf>("config"))?;
    let options = config.notebook_options();

    if matches.get_flag("stdout") {
        let markdown =
            read_file(input).with_context(|| format!("Failed to read {}", input.display()))?;
        let notebook = convert(&markdown, &options);
        println!("{}", notebook.to_json()?);
        return Ok(());
    }

    let output = resolve_output_path(input, matches.get_one::<PathBuf>("output"), &config);
    let notebook = convert_file(input, &output, &options).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            input.display(),
            output.display()
        )
    })?;

    log::info!(
        "Wrote {} ({} markdown cells, {} code cells)",
        output.display(),
        notebook.markdown_cell_count(),
        notebook.code_cell_count()
    );
    Ok(())
}

/// An explicit config path must exist; the default one is optional.
fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .ok_or_else(|| anyhow!("Config file not found: {}", path.display())),
        None => {
            log::debug!("Checking config file at {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// Explicit output wins, then `output_dir` from config, then next to the input.
fn resolve_output_path(input: &Path, output: Option<&PathBuf>, config: &Config) -> PathBuf {
    if let Some(output) = output {
        return output.clone();
    }

    let default = default_output_path(input);
    match (&config.output_dir, default.file_name()) {
        (Some(dir), Some(file_name)) => dir.join(file_name),
        _ => default,
    }
}
