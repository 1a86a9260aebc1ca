use anyhow::Context;
use clap::Parser;

use devicegen::adapters::generators::{StaticTypeSource, UniformPriceSource, UuidTokenSource};
use devicegen::utils::{logger, validation::Validate};
use devicegen::{
    CliConfig, DeviceProcessor, IdGenerator, JobRunner, LegacyDeviceProcessor,
    StandardDeviceFactory,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting devicegen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = cli.resolve().context("failed to load configuration")?;

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Dependencies are built explicitly here and passed down; there is no
    // shared registry to reach into.
    let result = if settings.legacy {
        JobRunner::new(LegacyDeviceProcessor::new(&settings)).run()
    } else {
        let ids = IdGenerator::new(
            settings.prefix.clone(),
            settings.suffix.clone(),
            UuidTokenSource,
        );
        let factory = StandardDeviceFactory::new(ids);
        let processor = DeviceProcessor::new(
            StaticTypeSource::new(settings.device_type),
            UniformPriceSource::new(),
            factory,
        );
        JobRunner::new(processor).run()
    };

    match result {
        Ok(device) => {
            println!(
                "✅ Device created: kind={}, id={}, price={}$",
                device.kind(),
                device.id(),
                device.price()
            );
        }
        Err(e) => {
            tracing::error!("❌ Job failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
