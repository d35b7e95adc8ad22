use callflow::prelude::*;
use clap::Parser;
use itertools::Itertools;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Validate, preview, and re-export call-flow JSON documents.
#[derive(Parser)]
#[command(name = "flow-cli", version, about)]
struct Cli {
    /// Path to the flow JSON document
    flow: PathBuf,

    /// Print the preview tree
    #[arg(long)]
    preview: bool,

    /// Print node/edge counts per kind
    #[arg(long)]
    stats: bool,

    /// Re-export the canonical pretty-printed document to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = fs::read_to_string(&cli.flow)?;
    let flow = import_flow(&json)?;
    println!(
        "Flow '{}' is valid: {} nodes, {} edges",
        flow.name,
        flow.nodes.len(),
        flow.edges.len()
    );

    if cli.stats {
        let counts = flow.nodes.iter().map(|n| n.kind()).counts();
        for kind in NodeKind::ALL {
            if let Some(count) = counts.get(&kind) {
                println!("  {:>4} x {}", count, kind);
            }
        }
    }

    if cli.preview {
        let tree = PreviewTree::build(&flow)?;
        print!("{}", PreviewFormatter::format(&tree));
    }

    if let Some(path) = cli.export {
        fs::write(&path, export_flow(&flow)?)?;
        println!(
            "Exported canonical document to {} (download name: {})",
            path.display(),
            export_filename(&flow)
        );
    }

    Ok(())
}
