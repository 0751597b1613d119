use std::{path::PathBuf, process};

use clap::Parser;
use tsvstrings::{Emitter, Table, traits::Parser as _};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The tab-separated localization table to read
    tsv_file: PathBuf,

    /// The folder that receives `Resources/<language>/Localizable.strings`
    output_dir: PathBuf,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let table = match Table::read_from(&args.tsv_file) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("❌ Failed to read TSV: {}", e);
            process::exit(1);
        }
    };

    let report = Emitter::new(&args.output_dir).emit(&table);
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(path) => println!(
                "✅ Generated {} strings at {}",
                outcome.language,
                path.display()
            ),
            Err(e) => eprintln!("❌ {}", e),
        }
    }

    if !report.is_success() {
        process::exit(1);
    }
}
