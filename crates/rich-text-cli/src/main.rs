//! rich-text CLI - render Plateo rich text JSON documents.
//!
//! Reads a document from a file or stdin and writes an HTML fragment (or the
//! render tree as JSON) to stdout.

mod error;
mod render;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use render::RenderArgs;

/// Render a rich text JSON document.
#[derive(Parser)]
#[command(name = "rich-text", version, about)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    /// Log renderer dispatch decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RICH_TEXT_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RICH_TEXT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = cli.render.execute().and_then(|output| {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    });

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
