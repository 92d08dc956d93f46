//! Print the metadata the Ivy factory produces for a coordinate
//!
//! Usage:
//!   describe-module org.example:lib:1.0 [--missing] [--config factory.toml] [--log debug]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ivy_module_metadata::utils::init_logging_from_config;
use ivy_module_metadata::{
    IvyMutableModuleMetadataFactory, LoggingConfig, MetadataConfig, ModuleComponentIdentifier,
    MutableModuleMetadataFactory,
};

#[derive(Parser, Debug)]
#[command(about = "Show synthesized Ivy module metadata as JSON")]
struct Args {
    /// Module coordinate as group:module:version
    coordinate: String,

    /// Produce the placeholder for a module the repository does not have
    #[arg(long)]
    missing: bool,

    /// Configuration file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file (RUST_LOG still wins)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MetadataConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MetadataConfig::default(),
    };
    config.validate()?;

    if let Some(filter) = args.log {
        config.logging.get_or_insert_with(LoggingConfig::default).filter = Some(filter);
    }
    init_logging_from_config(config.logging.as_ref());

    let coordinate: ModuleComponentIdentifier = args.coordinate.parse()?;
    let factory = IvyMutableModuleMetadataFactory::default().with_config(config.factory);

    let metadata = if args.missing {
        factory.missing(&coordinate)?
    } else {
        factory.create(&coordinate)?
    };
    info!("Describing {} ({})", metadata.id(), metadata.state());

    println!("{}", serde_json::to_string_pretty(&metadata.into_immutable())?);
    Ok(())
}
