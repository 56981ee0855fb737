use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use patchguard_core::{Config, Report, Severity};
use patchguard_engine::{check_protocol_set, observe, scan_all, Registry};
use patchguard_python::package_version;

/// PatchGuard - upstream patch-compatibility guard for vendored SDK trees
#[derive(Parser)]
#[command(name = "patchguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: patchguard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every registered symbol still hashes to an accepted digest
    Check {
        /// Output file for report.json
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,
    },

    /// Verify the upstream protocol-parser set matches the supported set
    Protocols,

    /// Print the current digest of one registered symbol
    Fingerprint {
        /// Fully-qualified symbol name, e.g. botocore.config.Config.merge
        qualname: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new("patchguard.toml").exists() {
        Config::from_file(Path::new("patchguard.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Check { output } => check_command(&config, &output, cli.verbose),
        Commands::Protocols => protocols_command(&config, cli.verbose),
        Commands::Fingerprint { qualname } => fingerprint_command(&config, &qualname, cli.verbose),
    }
}

/// Check command - full drift scan plus protocol-set check
fn check_command(config: &Config, output: &PathBuf, verbose: bool) -> Result<()> {
    let sdk_root = config.sdk_root();
    let http_root = config.http_root();

    if verbose {
        eprintln!("{} {}", "Vendored SDK tree:".cyan(), sdk_root.display());
        eprintln!("{} {}", "Vendored HTTP client tree:".cyan(), http_root.display());
        for (name, root) in [("botocore", &sdk_root), ("aiohttp", &http_root)] {
            eprintln!(
                "  {} {} python files under {}/",
                "found".cyan(),
                count_python_files(root),
                name
            );
        }
    }

    // One informational line, always printed
    let sdk_version = package_version(&sdk_root, "botocore");
    let http_version = package_version(&http_root, "aiohttp");
    println!(
        "Botocore version: {} aiohttp version: {}",
        sdk_version.as_deref().unwrap_or("unknown"),
        http_version.as_deref().unwrap_or("unknown"),
    );

    if verbose {
        eprintln!("{}", "Scanning registered symbols...".cyan());
    }

    let scan = scan_all(config);
    let protocols = check_protocol_set(&sdk_root);

    // Build report with diagnostics from both checks
    let mut diagnostics = scan.diagnostics.clone();
    diagnostics.extend(protocols.diagnostics.clone());

    let mut report = Report::from_diagnostics(diagnostics);
    report.summary.symbols_checked = scan.symbols_checked();
    report.summary.symbols_passed = scan.symbols_passed();
    report.metadata = Some(serde_json::json!({
        "botocore_version": sdk_version,
        "aiohttp_version": http_version,
    }));

    report.save_to_file(output)?;

    if verbose {
        eprintln!("{} {}", "Report saved to:".green(), output.display());
    }

    print_report_summary(&report);

    // Exit with error code if there are errors
    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Protocols command - set-equality check alone
fn protocols_command(config: &Config, verbose: bool) -> Result<()> {
    let sdk_root = config.sdk_root();

    if verbose {
        eprintln!("{} {}", "Vendored SDK tree:".cyan(), sdk_root.display());
    }

    let scan = check_protocol_set(&sdk_root);

    match &scan.actual {
        Some(actual) => {
            println!(
                "Upstream protocol parsers: {}",
                actual.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
            );
        }
        None => println!("Upstream protocol parsers: unavailable"),
    }

    if scan.passed() {
        println!("{}", "✓ Protocol parser set matches".green().bold());
        Ok(())
    } else {
        for diag in &scan.diagnostics {
            println!("  [{}] {}: {}", "ERROR".red().bold(), diag.code, diag.message);
        }
        std::process::exit(1);
    }
}

/// Fingerprint command - print the current digest of one symbol
///
/// Feeds the registry update loop: run it against a new upstream checkout
/// to get the digest to append (or to replace the set with).
fn fingerprint_command(config: &Config, qualname: &str, verbose: bool) -> Result<()> {
    let registries = [
        (Registry::botocore(), config.sdk_root()),
        (Registry::aiohttp(), config.http_root()),
    ];

    let (entry, vendor_root) = registries
        .iter()
        .find_map(|(registry, root)| registry.find_qualname(qualname).map(|e| (e.clone(), root)))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "symbol '{}' is not registered. Use the fully-qualified name, e.g. 'botocore.config.Config.merge'",
                qualname
            )
        })?;

    if verbose {
        eprintln!("{} {}", "Resolving in:".cyan(), vendor_root.display());
    }

    let observed = observe(&entry.symbol, vendor_root)
        .map_err(|diag| anyhow::anyhow!("{}", diag.message))?;

    println!("{}", observed.qualname.bold());
    println!("  Kind:     {}", entry.symbol.kind);
    println!("  Observed: {}", observed.digest);
    println!("  Accepted: {}", entry.digests);
    println!("  Source:   {}:{}", observed.file.display(), observed.line);

    if entry.digests.accepts(&observed.digest) {
        println!("{}", "✓ Digest is in the accepted set".green());
    } else {
        println!("{}", "✗ Digest is NOT in the accepted set".red().bold());
    }

    Ok(())
}

/// Number of python files under a vendored tree (sanity signal that the
/// tree is a source checkout and not a stripped install)
fn count_python_files(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "py").unwrap_or(false))
        .count()
}

/// Print report summary to stdout
fn print_report_summary(report: &Report) {
    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Patch Compatibility Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("Symbols checked: {}", report.summary.symbols_checked);
    println!("Symbols passed:  {}", report.summary.symbols_passed);
    println!();

    println!("{}", "Summary:".bold());
    println!("  Total diagnostics: {}", report.summary.total);

    if report.summary.errors > 0 {
        println!("  Errors:   {}", format!("{}", report.summary.errors).red().bold());
    } else {
        println!("  Errors:   {}", format!("{}", report.summary.errors).green());
    }

    if report.summary.warnings > 0 {
        println!("  Warnings: {}", format!("{}", report.summary.warnings).yellow());
    } else {
        println!("  Warnings: {}", format!("{}", report.summary.warnings).green());
    }

    println!("  Info:     {}", report.summary.info);
    println!();

    if report.diagnostics.is_empty() {
        println!("{}", "✓ No drift detected!".green().bold());
    } else {
        println!("{}", "Diagnostics:".bold());
        for diag in &report.diagnostics {
            let severity_str = match diag.severity {
                Severity::Error => "ERROR".red().bold(),
                Severity::Warn => "WARN".yellow().bold(),
                Severity::Info => "INFO".cyan(),
            };

            println!("  [{}] {}: {}", severity_str, diag.code, diag.message);

            if let Some(loc) = &diag.location {
                print!("    at {}", loc.file);
                if let Some(line) = loc.line {
                    print!(":{}", line);
                }
                println!();
            }

            if let Some(exp) = &diag.expected {
                println!("    Accepted: {}", exp);
            }
            if let Some(act) = &diag.actual {
                println!("    Observed: {}", act);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}
