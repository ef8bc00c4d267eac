//! Build script for softlcd-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates the board constants the firmware includes

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bytes spanned by the LCD controller's three registers
const LCD_BLOCK_BYTES: i64 = 3 * 4;

/// Bytes spanned by the key register
const KEYS_BLOCK_BYTES: i64 = 4;

/// Validated board.toml contents
struct Board {
    lcd_base: i64,
    keys_base: i64,
    button_mask: i64,
    active_low: bool,
    spin_max_reads: i64,
}

fn main() {
    setup_linker();
    let board = validate_config();
    generate_constants(&board);
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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml at compile time
fn validate_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml describing where the LCD     ║\n\
            ║  controller and the key register live on the bus.                ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
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

    let lcd_base = required_integer(&config, "lcd", "base", &mut errors);
    let keys_base = required_integer(&config, "keys", "base", &mut errors);
    let button_mask = required_integer(&config, "keys", "button_mask", &mut errors);

    let active_low = match config.get("keys").and_then(|k| k.get("active_low")) {
        None => true,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[keys] active_low must be true or false".to_string());
            true
        }
    };

    let spin_max_reads = match config
        .get("lcd")
        .and_then(|l| l.get("spin"))
        .and_then(|s| s.get("max_reads"))
    {
        None => 0,
        Some(toml::Value::Integer(n)) if (0..=i64::from(u32::MAX)).contains(n) => *n,
        Some(_) => {
            errors.push("[lcd.spin] max_reads must be an integer 0-4294967295".to_string());
            0
        }
    };

    validate_base("lcd", lcd_base, LCD_BLOCK_BYTES, &mut errors);
    validate_base("keys", keys_base, KEYS_BLOCK_BYTES, &mut errors);

    if let (Some(lcd), Some(keys)) = (lcd_base, keys_base) {
        let lcd_end = lcd + LCD_BLOCK_BYTES;
        let keys_end = keys + KEYS_BLOCK_BYTES;
        if lcd < keys_end && keys < lcd_end {
            errors.push(format!(
                "[lcd] block 0x{:08X}..0x{:08X} overlaps [keys] block 0x{:08X}..0x{:08X}",
                lcd, lcd_end, keys, keys_end
            ));
        }
    }

    if let Some(mask) = button_mask {
        if !(1..=i64::from(u32::MAX)).contains(&mask) || mask.count_ones() != 1 {
            errors.push("[keys] button_mask must select exactly one bit".to_string());
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
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

    println!("cargo:warning=board.toml validated successfully");

    Board {
        lcd_base: lcd_base.unwrap_or_default(),
        keys_base: keys_base.unwrap_or_default(),
        button_mask: button_mask.unwrap_or_default(),
        active_low,
        spin_max_reads,
    }
}

/// Look up `[section] key`, recording an error if it is missing or not an
/// integer
fn required_integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return None;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return None;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(n)) => Some(*n),
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Check that a register block fits the 32-bit bus and is word-aligned
fn validate_base(section: &str, base: Option<i64>, span: i64, errors: &mut Vec<String>) {
    let Some(base) = base else {
        return;
    };

    if base < 0 || base + span > i64::from(u32::MAX) + 1 {
        errors.push(format!("[{}] base must lie in the 32-bit address space", section));
    } else if base % 4 != 0 {
        errors.push(format!("[{}] base 0x{:08X} is not word-aligned", section, base));
    }
}

/// Write board constants to OUT_DIR/board_config.rs
fn generate_constants(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();

    writeln!(f, "// Generated from board.toml by build.rs").unwrap();
    writeln!(f, "pub const LCD_BASE: usize = 0x{:08X};", board.lcd_base).unwrap();
    writeln!(f, "pub const KEYS_BASE: usize = 0x{:08X};", board.keys_base).unwrap();
    writeln!(f, "pub const BUTTON_MASK: u32 = 0x{:X};", board.button_mask).unwrap();
    writeln!(f, "pub const ACTIVE_LOW: bool = {};", board.active_low).unwrap();
    writeln!(f, "pub const SPIN_MAX_READS: u32 = {};", board.spin_max_reads).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
