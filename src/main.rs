//! Batch driver: print the next codes of every field in a coder store.
//!
//! Counters are written back to the store afterwards, so the next run
//! continues each sequence.

use anyhow::Context;
use clap::Parser;
use markkit::{
    default_store_path, init_logging, CoderFieldStore, CoderRegistry, CoderStrategy, BUILD_DATE,
    VERSION,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "markkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the next codes of every marking field and save the counters")]
struct Args {
    /// Coder field store (.json or .toml); defaults to the user config directory
    store: Option<PathBuf>,

    /// Codes to print per field
    #[arg(default_value_t = 1)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    tracing::info!("MarkKit {} ({})", VERSION, BUILD_DATE);

    let store_path = match args.store {
        Some(path) => path,
        None => default_store_path()?,
    };

    let mut store = if store_path.exists() {
        CoderFieldStore::load_from_file(&store_path)
            .with_context(|| format!("Failed to load {}", store_path.display()))?
    } else {
        tracing::info!(
            "No coder store at {}, starting from the demo fields",
            store_path.display()
        );
        CoderFieldStore::demo()
    };

    let registry = CoderRegistry::with_defaults();
    let coders = store.instantiate(&registry)?;

    for (id, mut coder) in coders {
        let name = store
            .get(id)
            .map(|f| f.name.clone())
            .unwrap_or_default();
        for code in coder.generate_batch(args.count) {
            println!("{}\t{}", name, code);
        }
        store.capture(id, &coder)?;
    }

    store
        .save_to_file(&store_path)
        .with_context(|| format!("Failed to save {}", store_path.display()))?;
    tracing::info!(
        "Printed {} code(s) for {} field(s), counters saved to {}",
        args.count,
        store.len(),
        store_path.display()
    );

    Ok(())
}
