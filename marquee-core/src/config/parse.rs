//! Minimal TOML parser for the embedded display configuration
//!
//! Handles only the subset `marquee.toml` needs. It does NOT support the
//! full TOML grammar and never allocates.
//!
//! Supported features:
//! - [section] headers (`display`, `bus`, `message`)
//! - Key = value pairs (integer, quoted string)
//! - Integers in decimal or `0x` hex, with `_` separators
//! - `\"` and `\\` escapes inside strings
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings
//! - Arrays and inline tables
//! - Dotted keys

use heapless::String;

use super::types::{ChainLength, ConfigError, DeviceSettings, MarqueeConfig};
use crate::text::MAX_MESSAGE_LEN;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value has the wrong type or does not fit
    InvalidValue,
    /// Key not recognised in its section
    UnknownKey,
    /// Message longer than `MAX_MESSAGE_LEN`
    MessageTooLong,
    /// Value parsed but out of range
    Config(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Config(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Bus,
    Message,
}

/// Parse configuration text into a validated `MarqueeConfig`
///
/// Keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<MarqueeConfig, ParseError> {
    let mut config = MarqueeConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(&mut config, section, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "bus" => Ok(Section::Bus),
        "message" => Ok(Section::Message),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment` unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '#' if !in_string => return line[..i].trim_end(),
            _ => {}
        }
    }

    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value (decimal or `0x` hex, `_` separators allowed)
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let (digits, radix) = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };

    let mut result: u32 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::InvalidValue)?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}

fn parse_u8(value: &str) -> Result<u8, ParseError> {
    u8::try_from(parse_int(value)?).map_err(|_| ParseError::InvalidValue)
}

/// Parse a quoted string value, resolving escapes into `out`
fn parse_string<const N: usize>(value: &str, out: &mut String<N>) -> Result<(), ParseError> {
    if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"') {
        return Err(ParseError::InvalidValue);
    }

    out.clear();
    let mut escaped = false;
    for c in value[1..value.len() - 1].chars() {
        let resolved = match (escaped, c) {
            (false, '\\') => {
                escaped = true;
                continue;
            }
            (false, '"') => return Err(ParseError::InvalidValue),
            (true, '\\') | (true, '"') => c,
            (true, _) => return Err(ParseError::InvalidValue),
            (false, _) => c,
        };
        escaped = false;
        out.push(resolved).map_err(|_| ParseError::MessageTooLong)?;
    }

    if escaped {
        return Err(ParseError::InvalidValue);
    }
    Ok(())
}

fn apply_value(
    config: &mut MarqueeConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Display, "chain_length") => {
            config.display.chain_length = ChainLength::new(parse_u8(value)?)?;
        }
        (Section::Display, "intensity") => {
            config.display.settings =
                DeviceSettings::new(parse_u8(value)?, config.display.settings.scan_limit)?;
        }
        (Section::Display, "scan_limit") => {
            config.display.settings =
                DeviceSettings::new(config.display.settings.intensity, parse_u8(value)?)?;
        }
        (Section::Display, "scroll_delay_us") => {
            config.display.scroll_delay_us = parse_int(value)?;
        }
        (Section::Bus, "frequency_hz") => {
            config.bus.frequency_hz = parse_int(value)?;
        }
        (Section::Message, "text") => {
            let mut text: String<MAX_MESSAGE_LEN> = String::new();
            parse_string(value, &mut text)?;
            config.message = text;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MESSAGE;

    const SAMPLE: &str = r#"
# Four modules on the bench board
[display]
chain_length = 4
intensity = 0x0A      # brighter than default
scan_limit = 7
scroll_delay_us = 20_000

[bus]
frequency_hz = 2_000_000

[message]
text = "Hi # there \"you\" "
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.display.chain_length.get(), 4);
        assert_eq!(config.display.settings.intensity, 0x0A);
        assert_eq!(config.display.settings.scan_limit, 7);
        assert_eq!(config.display.scroll_delay_us, 20_000);
        assert_eq!(config.bus.frequency_hz, 2_000_000);
        assert_eq!(config.message.as_str(), "Hi # there \"you\" ");
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, MarqueeConfig::default());
        assert_eq!(config.message.as_str(), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_embedded_firmware_config_parses() {
        let config = parse_config(include_str!("../../../marquee-firmware/marquee.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.message.is_empty());
    }

    #[test]
    fn test_parse_int_forms() {
        assert_eq!(parse_int("14000"), Ok(14_000));
        assert_eq!(parse_int("14_000"), Ok(14_000));
        assert_eq!(parse_int("0x0F"), Ok(15));
        assert_eq!(parse_int("0x"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("-1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("99999999999"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            parse_config("[display]\nchain_length = 0"),
            Err(ParseError::Config(ConfigError::InvalidChainLength))
        );
        assert_eq!(
            parse_config("[display]\nchain_length = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nintensity = 16"),
            Err(ParseError::Config(ConfigError::InvalidIntensity))
        );
        assert_eq!(
            parse_config("[display]\nscan_limit = 8"),
            Err(ParseError::Config(ConfigError::InvalidScanLimit))
        );
        assert_eq!(
            parse_config("[display]\nscroll_delay_us = 0"),
            Err(ParseError::Config(ConfigError::InvalidScrollDelay))
        );
        assert_eq!(
            parse_config("[bus]\nfrequency_hz = 11_000_000"),
            Err(ParseError::Config(ConfigError::InvalidFrequency))
        );
    }

    #[test]
    fn test_unknown_section_and_key() {
        assert_eq!(
            parse_config("[stepper]\nrpm = 1"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[display]\nbrightness = 1"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(parse_config("chain_length = 4"), Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_config("[display\nchain_length = 4"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[display]\nchain_length"),
            Err(ParseError::InvalidLine)
        );
        assert_eq!(
            parse_config("[message]\ntext = unquoted"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_rejects_toml_outside_subset() {
        // Valid TOML the firmware cannot read; build.rs must fail on these
        assert_eq!(
            parse_config("[display]\nchain_length = 4\n\n[message]\ntext = 'HI'\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[message]\ntext = \"\\u0041BC\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nchain_length = +4"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nsettings = { intensity = 3 }"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("display.chain_length = 4"),
            Err(ParseError::UnknownKey)
        );
    }

    #[test]
    fn test_string_escapes() {
        let mut out: String<16> = String::new();
        parse_string(r#""a\\b""#, &mut out).unwrap();
        assert_eq!(out.as_str(), "a\\b");

        assert_eq!(
            parse_string(r#""bad\n""#, &mut out),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_string(r#""dangling\""#, &mut out),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_message_too_long() {
        let mut input: std::string::String = "[message]\ntext = \"".into();
        for _ in 0..MAX_MESSAGE_LEN + 1 {
            input.push('x');
        }
        input.push('"');
        assert_eq!(parse_config(&input), Err(ParseError::MessageTooLong));
    }

    #[test]
    fn test_strip_comment_respects_strings() {
        assert_eq!(strip_comment(r#""a # b" # c"#), r#""a # b""#);
        assert_eq!(strip_comment("7 # seven"), "7");
        assert_eq!(strip_comment(r#""esc \" # in""#), r#""esc \" # in""#);
    }
}
