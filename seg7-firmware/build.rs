//! Build script for seg7-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time and emits it as constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use seg7_core::{ConfigError, DisplayConfig};
use serde::Deserialize;

/// Refresh interval used when display.toml has no [refresh] section
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 2;

/// Longest refresh interval that still keeps the digits from flickering
const MAX_REFRESH_INTERVAL_MS: u64 = 20;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FirmwareConfig {
    display: DisplayConfig,
    #[serde(default)]
    refresh: RefreshConfig,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RefreshConfig {
    interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

fn main() {
    setup_linker();
    let config = validate_config();
    emit_constants(&config);
}

/// Set up linker search paths for memory.x
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

/// Validate display.toml configuration at compile time
fn validate_config() -> FirmwareConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the seg7-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: FirmwareConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    if let Err(e) = config.display.validate() {
        errors.push(describe(e));
    }
    if config.refresh.interval_ms == 0 || config.refresh.interval_ms > MAX_REFRESH_INTERVAL_MS {
        errors.push(format!(
            "[refresh] interval_ms must be 1-{}, got {}",
            MAX_REFRESH_INTERVAL_MS, config.refresh.interval_ms
        ));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in display.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
    config
}

/// Human-readable reason for a rejected [display] section
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::InvalidChipSelect => "[display] chip_select must be 0-10".to_string(),
        ConfigError::TooFewDigits => "[display] digit_count must be at least 1".to_string(),
        ConfigError::TooManyDigits => "[display] digit_count must be at most 8".to_string(),
        ConfigError::InvalidGlyphTable(e) => format!("[display] glyph table: {:?}", e),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated values to $OUT_DIR/display_config.rs
fn emit_constants(config: &FirmwareConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let display = &config.display;
    let source = format!(
        "/// Chip-select GPIO\n\
         pub const CHIP_SELECT: u8 = {};\n\
         /// Digits fitted\n\
         pub const DIGIT_COUNT: u8 = {};\n\
         /// Glyph table\n\
         pub const GLYPHS: seg7_core::GlyphSet = seg7_core::GlyphSet::{:?};\n\
         /// Interval between refresh passes (ms)\n\
         pub const REFRESH_INTERVAL_MS: u64 = {};\n",
        display.chip_select, display.digit_count, display.glyphs, config.refresh.interval_ms
    );
    fs::write(out_dir.join("display_config.rs"), source).unwrap();
}
