//! Build script for wiper-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates wiper.toml and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use wiper_core::config::{
    WiperConfig, DEBOUNCE_WINDOW_MS, INTERMITTENT_DELAYS_MS, PULSE_WIDTH_MS, TICK_PERIOD_MS,
    TOGGLE_WINDOW_MS,
};
use wiper_core::interval::IntervalTable;

/// Values read from wiper.toml
struct BuildConfig {
    debounce_ms: u32,
    toggle_window_ms: u32,
    pulse_width_ms: u32,
    tick_ms: u32,
    intervals_ms: Vec<u32>,
    switch_active_high: bool,
    relay_active_high: bool,
}

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
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

/// Read and validate wiper.toml
fn load_config() -> BuildConfig {
    println!("cargo:rerun-if-changed=wiper.toml");

    let config_path = Path::new("wiper.toml");

    // Missing file means all defaults
    let content = if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => fail("Failed to read wiper.toml", &[e.to_string()]),
        }
    } else {
        println!("cargo:warning=wiper.toml not found, using built-in defaults");
        String::new()
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in wiper.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    let config = BuildConfig {
        debounce_ms: get_u32(&value, "timing", "debounce_ms", DEBOUNCE_WINDOW_MS, &mut errors),
        toggle_window_ms: get_u32(&value, "timing", "toggle_window_ms", TOGGLE_WINDOW_MS, &mut errors),
        pulse_width_ms: get_u32(&value, "timing", "pulse_width_ms", PULSE_WIDTH_MS, &mut errors),
        tick_ms: get_u32(&value, "timing", "tick_ms", TICK_PERIOD_MS, &mut errors),
        intervals_ms: get_intervals(&value, &mut errors),
        switch_active_high: get_bool(&value, "switch", "active_high", true, &mut errors),
        relay_active_high: get_bool(&value, "relay", "active_high", true, &mut errors),
    };

    if !errors.is_empty() {
        fail("Invalid values in wiper.toml", &errors);
    }

    // Same validation the controller applies at runtime
    let intervals = match IntervalTable::from_slice(&config.intervals_ms) {
        Ok(table) => table,
        Err(e) => fail("Invalid [timing] intervals_ms", &[format!("{:?}", e)]),
    };
    let core_config = WiperConfig {
        debounce_ms: config.debounce_ms,
        toggle_window_ms: config.toggle_window_ms,
        pulse_width_ms: config.pulse_width_ms,
        tick_ms: config.tick_ms,
        intervals,
    };
    if let Err(e) = core_config.validate() {
        fail("Inconsistent [timing] in wiper.toml", &[format!("{:?}", e)]);
    }

    println!("cargo:warning=wiper.toml validated successfully");
    config
}

/// Emit the validated values as Rust constants
fn write_config(config: &BuildConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let intervals = config
        .intervals_ms
        .iter()
        .map(|ms| ms.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let generated = format!(
        "pub const DEBOUNCE_MS: u32 = {};\n\
         pub const TOGGLE_WINDOW_MS: u32 = {};\n\
         pub const PULSE_WIDTH_MS: u32 = {};\n\
         pub const TICK_MS: u32 = {};\n\
         pub const INTERVALS_MS: &[u32] = &[{}];\n\
         pub const SWITCH_ACTIVE_HIGH: bool = {};\n\
         pub const RELAY_ACTIVE_HIGH: bool = {};\n",
        config.debounce_ms,
        config.toggle_window_ms,
        config.pulse_width_ms,
        config.tick_ms,
        intervals,
        config.switch_active_high,
        config.relay_active_high,
    );

    fs::write(out_dir.join("wiper_config.rs"), generated).unwrap();
}

fn get_u32(
    value: &toml::Value,
    section: &str,
    key: &str,
    default: u32,
    errors: &mut Vec<String>,
) -> u32 {
    match value.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Integer(n)) => match u32::try_from(*n) {
            Ok(n) => n,
            Err(_) => {
                errors.push(format!("[{}] {} must be 0-{}", section, key, u32::MAX));
                default
            }
        },
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

fn get_bool(
    value: &toml::Value,
    section: &str,
    key: &str,
    default: bool,
    errors: &mut Vec<String>,
) -> bool {
    match value.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            default
        }
    }
}

fn get_intervals(value: &toml::Value, errors: &mut Vec<String>) -> Vec<u32> {
    let array = match value.get("timing").and_then(|s| s.get("intervals_ms")) {
        None => return INTERMITTENT_DELAYS_MS.to_vec(),
        Some(toml::Value::Array(array)) => array,
        Some(_) => {
            errors.push("[timing] intervals_ms must be an array of integers".to_string());
            return INTERMITTENT_DELAYS_MS.to_vec();
        }
    };

    let mut intervals = Vec::new();
    for (i, item) in array.iter().enumerate() {
        match item.as_integer().map(u32::try_from) {
            Some(Ok(ms)) => intervals.push(ms),
            _ => errors.push(format!(
                "[timing] intervals_ms[{}] must be an integer 0-{}",
                i,
                u32::MAX
            )),
        }
    }
    intervals
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("║  • {:<62} ║", truncate_line(line, 62)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shorten a line to at most `max` characters, cutting on a char boundary
fn truncate_line(line: &str, max: usize) -> String {
    if line.chars().count() > max {
        let head: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        line.to_string()
    }
}
