use std::io::{BufWriter, Write};

use clap::Parser;
use extscan::config::DEFAULT_WORKERS;
use extscan::listing::to_listing;
use extscan::{DEFAULT_IMAGE_SUFFIXES, ScanOptions, SortOrder, collect_from_roots};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "extscan",
    about = "List files under one or more directories by extension"
)]
struct Cli {
    /// Directories to scan
    #[arg(required = true)]
    roots: Vec<String>,

    /// Accepted extensions, without the dot (defaults to common image types)
    #[arg(short, long = "ext", env = "EXTSCAN_EXT", value_delimiter = ',')]
    exts: Vec<String>,

    /// Do not open directories deeper than this below a root
    #[arg(long, env = "EXTSCAN_MAX_DEPTH")]
    max_depth: Option<usize>,

    /// Resolve symbolic links instead of ignoring them
    #[arg(long, env = "EXTSCAN_FOLLOW_SYMLINKS")]
    follow_symlinks: bool,

    /// Roots scanned at the same time
    #[arg(long, env = "EXTSCAN_WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Result order
    #[arg(long, value_enum, default_value_t = SortOrder::Discovery)]
    sort: SortOrder,

    /// Print a JSON array of {path, name} records
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> ScanOptions {
        let options = ScanOptions::default()
            .with_follow_symlinks(self.follow_symlinks)
            .with_workers(self.workers)
            .with_order(self.sort);
        match self.max_depth {
            Some(depth) => options.with_max_depth(depth),
            None => options,
        }
    }

    fn suffixes(&self) -> Vec<String> {
        if self.exts.is_empty() {
            tracing::info!("No --ext given; using {:?}", DEFAULT_IMAGE_SUFFIXES);
            DEFAULT_IMAGE_SUFFIXES.iter().map(|s| s.to_string()).collect()
        } else {
            self.exts.clone()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    let suffixes = cli.suffixes();

    let found = collect_from_roots(cli.roots.clone(), suffixes.as_slice(), &options).await;
    tracing::info!("Found {} files", found.len());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &to_listing(found))?;
        writeln!(out)?;
    } else {
        for path in found {
            writeln!(out, "{}", path)?;
        }
    }
    out.flush()?;

    Ok(())
}
