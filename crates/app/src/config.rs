//! Command-line arguments and how they combine with a config file

use std::path::PathBuf;

use clap::Parser;
use tileglow_config::{ConfigError, GeneratorConfig, GlowStyle};

fn parse_glow(value: &str) -> Result<GlowStyle, String> {
    GlowStyle::parse(value).ok_or_else(|| format!("unknown glow style '{value}' (expected layered or blur)"))
}

#[derive(Parser, Debug, Default)]
#[command(name = "tileglow", about = "Generate a neon macOS AppIcon.appiconset", version)]
pub struct Args {
    /// Output directory (default: tile_3/Assets.xcassets/AppIcon.appiconset)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// TOML file with generator settings; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Glow style around the content border: layered or blur
    #[arg(long, value_parser = parse_glow)]
    pub glow: Option<GlowStyle>,

    /// Render sizes in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Only verify an existing iconset, do not write anything
    #[arg(long)]
    pub check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the effective generator config: file (or defaults), then flags
    pub fn resolve(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if let Some(glow) = self.glow {
            config.glow = glow;
        }
        if self.parallel {
            config.parallel = true;
        }
        Ok(config)
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileglow_config::DEFAULT_OUTPUT_DIR;

    #[test]
    fn test_no_arguments_is_reference_behaviour() {
        let args = Args::try_parse_from(["tileglow"]).unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(args.log_directive(), "info");
    }

    #[test]
    fn test_flags_override_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tileglow.toml");
        std::fs::write(&path, "output_dir = \"from_file\"\nglow = \"blur\"\n").unwrap();

        let args = Args::try_parse_from([
            "tileglow",
            "--config",
            path.to_str().unwrap(),
            "--out-dir",
            "from_flag",
            "--parallel",
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("from_flag"));
        assert_eq!(config.glow, GlowStyle::Blur);
        assert!(config.parallel);
    }

    #[test]
    fn test_glow_flag() {
        let args = Args::try_parse_from(["tileglow", "--glow", "blur", "-v"]).unwrap();
        assert_eq!(args.glow, Some(GlowStyle::Blur));
        assert_eq!(args.log_directive(), "debug");
        assert!(Args::try_parse_from(["tileglow", "--glow", "fog"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args {
            config: Some(PathBuf::from("/no/such/tileglow.toml")),
            ..Args::default()
        };
        assert!(matches!(args.resolve(), Err(ConfigError::Read { .. })));
    }
}
