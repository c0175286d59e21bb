//! CLI entry point for heft

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use heft::{Charset, ErrorPolicy, OutputConfig, ScanConfig, TreeFormatter, logging, print_json, scan};
use tracing::{error, info, warn};

/// Exit status for a scan that stopped early or skipped entries, including a
/// root that could not be read.
const EXIT_INCOMPLETE: i32 = 2;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "Show where the bytes are: directory sizes as a sorted tree")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip unreadable entries instead of stopping at the first one
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Follow symbolic links while walking
    #[arg(short = 'L', long = "follow-links")]
    follow_links: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Characters used to draw the tree
    #[arg(long = "charset", default_value = "ascii")]
    charset: Charset,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("heft: failed to initialise logging: {}", e);
    }

    process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let scan_config = ScanConfig {
        follow_links: args.follow_links,
        error_policy: if args.keep_going {
            ErrorPolicy::BestEffort
        } else {
            ErrorPolicy::FailFast
        },
    };

    info!(path = %args.path.display(), "scanning");
    let report = scan(&args.path, &scan_config);

    // The partial tree is still printed after an aborted walk.
    if let Some(ref e) = report.error {
        error!("{}", e);
    }
    if !report.failures.is_empty() {
        warn!(
            skipped = report.failures.len(),
            "some entries could not be read; totals are incomplete"
        );
    }

    let result = if args.json {
        print_json(&report.tree)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            charset: args.charset,
        };
        TreeFormatter::new(output_config).print(&report.tree)
    };

    if let Err(e) = result {
        eprintln!("heft: error writing output: {}", e);
        return 1;
    }

    if report.is_complete() {
        0
    } else {
        EXIT_INCOMPLETE
    }
}
