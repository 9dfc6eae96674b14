//! Build script for mint-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates ui.toml and compiles it into `ui_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Compiled-in window stack limit of mint-core
const MAX_WINDOWS: i64 = 8;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt, embassy-rp boot2 and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated contents of ui.toml
struct UiSettings {
    max_windows: i64,
    debounce_ms: i64,
    slide_duration_ms: i64,
    slide_from_right: bool,
    address: i64,
    contrast: i64,
}

/// Validate ui.toml and write it out as Rust constants
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=ui.toml");

    let config_path = Path::new("ui.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read ui.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in ui.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let settings = validate(&config);

    let generated = format!(
        "/// Engine configuration from ui.toml\n\
         pub const ENGINE_CONFIG: mint_core::EngineConfig = mint_core::EngineConfig {{\n    \
             max_windows: {},\n    \
             debounce_ms: {},\n    \
             slide_duration_ms: {},\n    \
             slide_from_right: {},\n\
         }};\n\n\
         /// SSD1306 I2C address from ui.toml\n\
         pub const DISPLAY_ADDRESS: u8 = {:#04x};\n\n\
         /// SSD1306 contrast from ui.toml\n\
         pub const DISPLAY_CONTRAST: u8 = {:#04x};\n",
        settings.max_windows,
        settings.debounce_ms,
        settings.slide_duration_ms,
        settings.slide_from_right,
        settings.address,
        settings.contrast,
    );

    fs::write(out_dir.join("ui_config.rs"), generated).unwrap();
}

/// Check every section and return the settings, panicking with a list of
/// all problems found
fn validate(config: &toml::Value) -> UiSettings {
    let mut errors = Vec::new();

    let engine = config.get("engine").and_then(|v| v.as_table());
    let display = config.get("display").and_then(|v| v.as_table());
    if engine.is_none() {
        errors.push("Missing [engine] section".to_string());
    }
    if display.is_none() {
        errors.push("Missing [display] section".to_string());
    }

    let int = |table: Option<&toml::Table>, section: &str, key: &str, errors: &mut Vec<String>| {
        match table.and_then(|t| t.get(key)) {
            Some(toml::Value::Integer(v)) => *v,
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", section, key));
                0
            }
            None => {
                errors.push(format!("[{}] missing '{}'", section, key));
                0
            }
        }
    };

    let max_windows = int(engine, "engine", "max_windows", &mut errors);
    let debounce_ms = int(engine, "engine", "debounce_ms", &mut errors);
    let slide_duration_ms = int(engine, "engine", "slide_duration_ms", &mut errors);
    let address = int(display, "display", "address", &mut errors);
    let contrast = int(display, "display", "contrast", &mut errors);

    let slide_from_right = match engine.and_then(|t| t.get("slide_from_right")) {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[engine] slide_from_right must be true or false".to_string());
            true
        }
        None => true,
    };

    if !(1..=MAX_WINDOWS).contains(&max_windows) {
        errors.push(format!("[engine] max_windows must be 1-{}", MAX_WINDOWS));
    }
    if !(1..=1000).contains(&debounce_ms) {
        errors.push("[engine] debounce_ms must be 1-1000".to_string());
    }
    if !(0..=10_000).contains(&slide_duration_ms) {
        errors.push("[engine] slide_duration_ms must be 0-10000".to_string());
    }
    if address != 0x3C && address != 0x3D {
        errors.push("[display] address must be 0x3C or 0x3D".to_string());
    }
    if !(0..=255).contains(&contrast) {
        errors.push("[display] contrast must be 0-255".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid ui.toml configuration", &errors);
    }

    UiSettings {
        max_windows,
        debounce_ms,
        slide_duration_ms,
        slide_from_right,
        address,
        contrast,
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
