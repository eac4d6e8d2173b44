use clap::Parser;
use organize_root::core::config::{self, LayoutOverrides};
use organize_root::core::{MappingTable, organize};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "organize-root",
    about = "Move stray root-level docs into categorized docs/ subdirectories"
)]
struct Args {
    /// Project root to read files from [env: ORGANIZE_ROOT] (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Documentation root, relative to the project root [env: ORGANIZE_DOCS_DIR] (default: docs)
    #[arg(long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,

    /// Print the built-in mapping table for the resolved docs root and exit
    #[arg(long)]
    list: bool,

    /// More diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries the per-file notices
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);

    let table = MappingTable::builtin().map_err(io::Error::other)?;

    let cli = LayoutOverrides {
        root: args.root,
        docs_dir: args.docs_dir,
    };
    let layout = config::resolve(&cli).map_err(io::Error::other)?;

    if args.list {
        let docs_name = layout.docs_name();
        for entry in &table {
            println!("{} -> {}", entry.filename, entry.destination_label(&docs_name));
        }
        return Ok(());
    }

    let report = organize(&table, &layout, |outcome| println!("{outcome}"));
    if report.failed > 0 {
        log::warn!("{} file(s) could not be moved", report.failed);
    }

    println!("\n{report}");
    Ok(())
}
