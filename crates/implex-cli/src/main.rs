use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use implex::{default_fragment_dir, load_fragments, DeliveryHub, ImplementorRegistry};

#[derive(Parser, Debug)]
#[command(name = "implex", about = "Build an implementor index from fragment files")]
struct Args {
    /// Directory to scan for fragment files
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Dump the full registry as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dir = args.dir.unwrap_or_else(default_fragment_dir);

    let fragments = load_fragments(&dir)?;
    info!("Registering {} fragments", fragments.len());

    let mut hub = DeliveryHub::with_host(ImplementorRegistry::new());
    for fragment in fragments {
        hub.load(fragment.into_map());
    }

    let registry = hub
        .detach()
        .expect("registry host was attached at startup");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
    } else {
        println!(
            "{} libraries, {} entries from {} fragments",
            registry.library_count(),
            registry.entry_count(),
            registry.maps_registered()
        );
        for library in registry.libraries() {
            let count = registry.entries(library).map(|e| e.len()).unwrap_or(0);
            println!("  {library}: {count} implementors");
        }
    }

    Ok(())
}
