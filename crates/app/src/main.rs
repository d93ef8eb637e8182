//! tileglow - procedural neon macOS app-icon generator

use anyhow::{bail, Context, Result};
use clap::Parser;
use tileglow_config::ICON_SIZES;
use tileglow_iconset::{verify_iconset, write_iconset};
use tracing::info;

mod config;

use config::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = args.resolve().context("Failed to load configuration")?;

    if args.check {
        let report = verify_iconset(&config.output_dir, &ICON_SIZES)
            .with_context(|| format!("Failed to inspect {}", config.output_dir.display()))?;
        if !report.is_ok() {
            bail!(
                "Iconset at {} is incomplete: {} missing, {} unexpected, {} wrong size, manifest {}",
                config.output_dir.display(),
                report.missing.len(),
                report.unexpected.len(),
                report.wrong_size.len(),
                if report.manifest_matches { "ok" } else { "mismatched" }
            );
        }
        println!("Iconset at {} is complete", config.output_dir.display());
        return Ok(());
    }

    info!("Generating neon icon set ({:?} glow)", config.glow);
    let report = write_iconset(&config).context("Failed to generate icon set")?;

    for icon in &report.icons {
        println!(
            "Created {} ({}x{})",
            icon.spec.file_name, icon.spec.pixel_size, icon.spec.pixel_size
        );
    }
    println!("Created {}", report.manifest_path.display());
    println!("Done! Icons saved to {}", report.output_dir.display());
    Ok(())
}
