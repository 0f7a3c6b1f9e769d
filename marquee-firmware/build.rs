//! Build script for marquee-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates marquee.toml at compile time, first with `toml` for readable
//!   syntax errors, then with the parser the firmware itself runs

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use marquee_core::config::parse_config;
use marquee_core::text::Message;

/// Limits mirrored from marquee-core's config types
const MAX_CHAIN_LENGTH: i64 = 16;
const MAX_INTENSITY: i64 = 0x0F;
const MAX_SCAN_LIMIT: i64 = 7;
const MAX_BUS_FREQUENCY_HZ: i64 = 10_000_000;
const MAX_MESSAGE_LEN: usize = 256;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate marquee.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=marquee.toml");

    let config_path = Path::new("marquee.toml");

    if !config_path.exists() {
        fail(
            "marquee.toml not found!",
            &[
                "The firmware embeds marquee.toml at build time.".into(),
                "Create one in the marquee-firmware directory.".into(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read marquee.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("marquee.toml is not valid TOML", &[e.message().to_string()]),
    };

    let mut errors = Vec::new();
    validate_display(&config, &mut errors);
    validate_bus(&config, &mut errors);
    validate_message(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid marquee.toml", &errors);
    }

    validate_with_firmware_parser(&content);
}

/// Run the on-board parser so anything it would reject fails the build
fn validate_with_firmware_parser(content: &str) {
    let config = match parse_config(content) {
        Ok(config) => config,
        Err(e) => fail(
            "marquee.toml rejected by the firmware parser",
            &[
                format!("{:?}", e),
                "Use double-quoted strings and plain decimal/0x integers".into(),
                "No inline tables, dotted keys or \\u escapes".into(),
            ],
        ),
    };

    if let Err(e) = Message::ascii(config.message.as_str()) {
        fail("[message] text rejected", &[format!("{:?}", e)]);
    }
}

/// Validate the [display] section
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let display = match section(config, "display", errors) {
        Some(t) => t,
        None => return,
    };

    check_keys(
        display,
        "display",
        &["chain_length", "intensity", "scan_limit", "scroll_delay_us"],
        errors,
    );
    check_range(display, "display", "chain_length", 1, MAX_CHAIN_LENGTH, errors);
    check_range(display, "display", "intensity", 0, MAX_INTENSITY, errors);
    check_range(display, "display", "scan_limit", 0, MAX_SCAN_LIMIT, errors);
    check_range(display, "display", "scroll_delay_us", 1, i64::from(u32::MAX), errors);
}

/// Validate the [bus] section
fn validate_bus(config: &toml::Value, errors: &mut Vec<String>) {
    let bus = match section(config, "bus", errors) {
        Some(t) => t,
        None => return,
    };

    check_keys(bus, "bus", &["frequency_hz"], errors);
    check_range(bus, "bus", "frequency_hz", 1, MAX_BUS_FREQUENCY_HZ, errors);
}

/// Validate the [message] section
fn validate_message(config: &toml::Value, errors: &mut Vec<String>) {
    let message = match section(config, "message", errors) {
        Some(t) => t,
        None => return,
    };

    check_keys(message, "message", &["text"], errors);

    match message.get("text") {
        Some(toml::Value::String(text)) => {
            if text.is_empty() {
                errors.push("[message] text cannot be empty".into());
            }
            if text.len() > MAX_MESSAGE_LEN {
                errors.push(format!("[message] text longer than {} chars", MAX_MESSAGE_LEN));
            }
            if let Some((i, c)) = text.char_indices().find(|&(_, c)| !(' '..='~').contains(&c)) {
                errors.push(format!("[message] unsupported character {:?} at {}", c, i));
            }
        }
        Some(_) => errors.push("[message] text must be a string".into()),
        None => {}
    }
}

/// Look up an optional top-level table
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::map::Map<String, toml::Value>> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => None,
    }
}

/// Reject keys the firmware parser does not know
fn check_keys(
    table: &toml::map::Map<String, toml::Value>,
    name: &str,
    known: &[&str],
    errors: &mut Vec<String>,
) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", name, key));
        }
    }
}

/// Check an optional integer key against an inclusive range
fn check_range(
    table: &toml::map::Map<String, toml::Value>,
    name: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        Some(toml::Value::Integer(v)) => {
            if *v < min || *v > max {
                errors.push(format!("[{}] {} must be {}-{}", name, key, min, max));
            }
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", name, key)),
        None => {}
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
