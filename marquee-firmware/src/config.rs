//! Embedded display configuration
//!
//! `marquee.toml` is compiled into the image. build.rs already rejected
//! anything out of range, so a parse failure here means the core parser and
//! the build-time check disagree; the display still comes up on defaults.

use defmt::*;

use marquee_core::config::{parse_config, MarqueeConfig};

/// Embedded configuration (compiled into firmware)
/// Edit marquee.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../marquee.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> MarqueeConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded marquee.toml");
            config
        }
        Err(e) => {
            warn!("Failed to parse marquee.toml: {}, using defaults", e);
            MarqueeConfig::default()
        }
    }
}
