use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mindmap_client::{FetchOutcome, MapFetcher};
use mindmap_core::render::{OutputFormat, render, save_output};
use mindmap_core::{EndpointTable, InputCategory, classify, generate_mock};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, warn};

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/mindmap/endpoints.json";

/// Install the stderr log subscriber. Only warnings unless `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Endpoint table from `--config`, or the built-in one if the file is absent
pub fn load_endpoints(args: &ArgMatches) -> anyhow::Result<EndpointTable> {
    let raw = args
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let path = expand_path(raw);

    EndpointTable::load_or_default(&path)
        .with_context(|| format!("Failed to load endpoint table {}", path.display()))
}

/// The INPUT argument, with `-` meaning stdin
pub fn read_input(args: &ArgMatches) -> anyhow::Result<String> {
    let raw = args
        .get_one::<String>("INPUT")
        .context("No input provided")?;

    if raw != "-" {
        return Ok(raw.clone());
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read input from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// One-line summary of where a map came from
pub fn describe_outcome(outcome: &FetchOutcome) -> String {
    let map = outcome.map();
    match outcome.reason() {
        None => format!("Live map with {} nodes", map.nodes.len()),
        Some(reason) => format!(
            "Placeholder map with {} nodes (workflow service unavailable: {})",
            map.nodes.len(),
            reason
        ),
    }
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn print_prompt(msg: &str) -> io::Result<String> {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

pub fn handle_init(args: &ArgMatches) -> anyhow::Result<()> {
    let raw = args
        .get_one::<String>("PATH")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let force = args.get_flag("force");
    let path = expand_path(raw);

    print_divider();
    println!("{}", "  MINDMAP INITIALIZATION".bright_white().bold());
    print_divider();
    println!();

    if path.exists() && !force {
        if !io::stdin().is_terminal() {
            bail!(
                "{} already exists. Re-run with --force to overwrite it",
                path.display()
            );
        }

        println!("{}", "⚠ WARNING".yellow().bold());
        println!(
            "Endpoint table already exists: {}",
            path.display().to_string().bright_white()
        );
        let response = print_prompt("Overwrite it? [y/N]:")?;
        println!();

        if response != "y" && response != "yes" {
            println!("{} Initialization cancelled.", "✗".red().bold());
            return Ok(());
        }
    }

    write_default_endpoints(&path)?;

    println!(
        "{} Endpoint table written to {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    print_endpoint_table(&EndpointTable::default());
    Ok(())
}

pub fn write_default_endpoints(path: &Path) -> anyhow::Result<()> {
    EndpointTable::default()
        .save(path)
        .with_context(|| format!("Failed to write endpoint table {}", path.display()))
}

pub fn handle_endpoints(args: &ArgMatches) -> anyhow::Result<()> {
    let table = load_endpoints(args)?;
    print_endpoint_table(&table);
    Ok(())
}

fn print_endpoint_table(table: &EndpointTable) {
    for (category, url) in table.entries() {
        println!("  {:<12} {}", category.as_str().bright_cyan(), url);
    }
}

pub fn handle_classify(args: &ArgMatches) -> anyhow::Result<()> {
    let input = read_input(args)?;
    let category = classify(&input);

    println!("{}", category.as_str().bright_white().bold());
    println!("{}", category.placeholder().dimmed());
    Ok(())
}

pub async fn handle_generate(args: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    let input = read_input(args)?;
    let offline = args.get_flag("offline");
    let format = args
        .get_one::<String>("format")
        .and_then(|f| OutputFormat::from_str(f))
        .unwrap_or(OutputFormat::Tree);
    let output = args.get_one::<PathBuf>("output");

    let (category, outcome) = if offline {
        (classify(&input), None)
    } else {
        let endpoints = load_endpoints(args)?;
        let fetcher = MapFetcher::new(endpoints).context("Failed to create HTTP client")?;

        let spinner = if quiet {
            None
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message("Asking the workflow service...");
            Some(pb)
        };

        let (category, outcome) = fetcher.classify_and_fetch(&input).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        (category, Some(outcome))
    };

    if !quiet {
        eprintln!("{} {}", "→".blue(), category_line(category));
        match outcome {
            Some(ref outcome) if outcome.is_fallback() => {
                eprintln!("{} {}", "⚠".yellow().bold(), describe_outcome(outcome).yellow())
            }
            Some(ref outcome) => eprintln!("{} {}", "✓".green().bold(), describe_outcome(outcome)),
            None => eprintln!("{} Offline: placeholder map", "→".blue()),
        }
    }

    let map = match outcome {
        Some(outcome) => outcome.into_map(),
        None => generate_mock(&input),
    };

    for (parent, child) in map.dangling_children() {
        warn!("Node {} lists unknown child {}", parent, child);
    }

    let rendered = render(&map, format).context("Failed to render map")?;
    match output {
        Some(path) => {
            save_output(&rendered, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                eprintln!("{} Saved to {}", "✓".green().bold(), path.display());
            }
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn category_line(category: InputCategory) -> String {
    format!("Input classified as {}", category.as_str().bold())
}
