//! mathlint CLI - Lint embedded LaTeX math in documentation

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, ValueEnum};
#[cfg(feature = "cli")]
use mathlint::{
    check_files,
    diagnostics::{format_report, report_to_json, Report},
    resolve_roots, KNOWN_MATH_MACROS,
};
#[cfg(feature = "cli")]
use std::process;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathlint")]
#[command(version)]
#[command(about = "mathlint - Check LaTeX math in documentation against a known macro list", long_about = None)]
#[command(after_help = "Example: mathlint docs '*.md' '*.rst'")]
struct Cli {
    /// Directories to search recursively, and file-name patterns to match under them
    #[arg(required_unless_present = "list_macros")]
    roots: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Quiet mode: print nothing when every fragment is valid
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the files that would be checked and exit
    #[arg(long)]
    list_files: bool,

    /// Print the known math macro list and exit
    #[arg(long)]
    list_macros: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON report on stdout
    Json,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_macros {
        let mut names: Vec<_> = KNOWN_MATH_MACROS.iter().copied().collect();
        names.sort_unstable();
        for name in names {
            println!("\\{}", name);
        }
        return;
    }

    let files = match resolve_roots(cli.roots.as_slice()) {
        Ok(files) => files,
        Err(e) => emit(&cli, &Report::from(&e)),
    };

    if cli.list_files {
        for file in &files {
            println!("{}", file.display());
        }
        return;
    }

    let result = check_files(files.as_slice());
    emit(&cli, &Report::from(&result));
}

/// Print the report in the requested format and exit with its code
#[cfg(feature = "cli")]
fn emit(cli: &Cli, report: &Report) -> ! {
    let use_color = !cli.no_color;

    match cli.format {
        OutputFormat::Json => match report_to_json(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                process::exit(2);
            }
        },
        OutputFormat::Text => {
            if !report.is_ok() {
                eprintln!("{}", format_report(report, use_color));
            } else if !cli.quiet {
                println!("{}", format_report(report, use_color));
            }
        }
    }

    process::exit(report.exit_code());
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathlint --features cli");
    eprintln!("  mathlint [OPTIONS] <ROOTS>...");
}
