//! CLI entry point for orchard

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use orchard::output::build_tree;
use orchard::{DisplayFilter, OutputConfig, TreeFormatter, TreeIter, collect_entries, print_json};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "orchard")]
#[command(about = "Walk a directory tree depth-first and print it")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Ignore entries matching pattern, subtree included (can be used
    /// multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Show file sizes next to filenames
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Report directories that could not be read to stderr
    #[arg(long = "report-errors")]
    report_errors: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "orchard: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let mut walker = TreeIter::new(&root);
    if args.report_errors {
        walker = walker.on_read_error(|path, err| {
            eprintln!("orchard: cannot read '{}': {}", path.display(), err);
        });
    }

    let filter = DisplayFilter {
        dirs_only: args.dirs_only,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
    };

    let mut entries = collect_entries(&root, walker, args.size);
    entries.retain(|e| filter.keep(e));

    let root_label = args.path.display().to_string();

    let result = if args.json {
        let tree = build_tree(&root_label, &root, &entries);
        print_json(&tree)
    } else {
        let config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        TreeFormatter::new(config).print(&root_label, &entries)
    };

    if let Err(e) = result {
        eprintln!("orchard: error writing output: {}", e);
        process::exit(1);
    }
}
