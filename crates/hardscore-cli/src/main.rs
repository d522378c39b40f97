//! CLI entry point for hardscore.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `hardscore-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use hardscore_app::{
    AuditInput, ExplainOutput, format_registry, load_registry, parse_report_json,
    render_markdown, render_summary, resolve, run_audit, run_explain, serialize_report,
};
use hardscore_settings::Overrides;
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "hardscore",
    version,
    about = "Score a host against a weighted hardening baseline"
)]
struct Cli {
    /// Path to hardscore config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "hardscore.toml")]
    config: Utf8PathBuf,

    /// Directory beneath which absolute check paths are resolved.
    #[arg(long, global = true)]
    root: Option<Utf8PathBuf>,

    /// Upper bound on each evidence command, in milliseconds.
    #[arg(long, global = true)]
    command_timeout_ms: Option<u64>,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the baseline once and emit the JSON report (default).
    Check {
        /// Where to write the JSON report (if not specified, prints to stdout).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Also write a Markdown report to this path.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "hardscore.report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// List the checks that would be evaluated, in report order.
    List,

    /// Explain a check_id with remediation guidance.
    Explain {
        /// The check_id (e.g., "ssh.permit_root_login") to explain.
        identifier: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("hardscore error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HARDSCORE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = Overrides {
        root: cli.root.clone(),
        command_timeout_ms: cli.command_timeout_ms,
    };

    match cli.cmd {
        None => cmd_check(&cli.config, overrides, None, None),
        Some(Commands::Check {
            report_out,
            markdown_out,
        }) => cmd_check(&cli.config, overrides, report_out, markdown_out),
        Some(Commands::Md { report, output }) => cmd_md(report, output),
        Some(Commands::List) => cmd_list(&cli.config, overrides),
        Some(Commands::Explain { identifier }) => cmd_explain(&identifier),
    }
}

/// Config file text; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(
    config: &Utf8Path,
    overrides: Overrides,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let config_text = read_config(config)?;
    let output = run_audit(AuditInput {
        config_text: &config_text,
        overrides,
    })?;

    let mut json = serialize_report(&output.report)?;
    json.push('\n');

    match report_out {
        Some(path) => {
            write_text_file(&path, &json).context("write report json")?;
            eprintln!("{}", render_summary(&output.report));
        }
        None => write_stdout(&json).context("write report")?,
    }

    if let Some(path) = markdown_out {
        let md = render_markdown(&output.report);
        write_text_file(&path, &md).context("write markdown")?;
    }

    // The score is data, not a process outcome.
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        write_stdout(&md).context("write markdown")?;
    }

    Ok(())
}

fn cmd_list(config: &Utf8Path, overrides: Overrides) -> anyhow::Result<()> {
    let config_text = read_config(config)?;
    let resolved = resolve(&config_text, overrides)?;
    let registry = load_registry(&resolved.effective)?;
    write_stdout(&format_registry(&registry)).context("write check list")
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            write_stdout(&hardscore_app::format_explanation(&exp)).context("write explanation")
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!(
                "{}",
                hardscore_app::format_not_found(&identifier, available_check_ids)
            );
            std::process::exit(1);
        }
    }
}

/// Write to stdout, surfacing a closed pipe as an error instead of a panic.
fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
