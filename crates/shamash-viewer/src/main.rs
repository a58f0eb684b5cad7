use anyhow::Result;

use shamash_runtime::device::GpuInit;
use shamash_runtime::logging::{init_logging, LoggingConfig};
use shamash_runtime::window::{Runtime, RuntimeConfig};
use shamash_tracer::Tracer;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Printed before the window opens; the window itself has no UI.
    println!();
    println!("  shamash: walk around a traced scene");
    println!("  move: a/h left   d/l right   j down   k up   w forward   s back");
    println!();

    let config = RuntimeConfig {
        title: "shamash".to_string(),
        width: 800,
        height: 600,
    };

    log::info!(
        "opening {}x{} viewer window (keys: a/h d/l j k w s)",
        config.width,
        config.height
    );

    Runtime::run(config, GpuInit::default(), Tracer::create)
}
