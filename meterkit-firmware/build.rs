//! Build script for meterkit-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates board.toml and turns its `[link]` table into a constant

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use meterkit_core::LinkConfig;
use serde::Deserialize;

/// Top level of board.toml
#[derive(Deserialize)]
struct BoardFile {
    link: Option<LinkConfig>,
}

fn main() {
    setup_linker();
    let link = load_link_config();
    write_link_config(&link);
}

/// Linker arguments for the firmware binary
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate board.toml
fn load_link_config() -> LinkConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the meterkit-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
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

    let board: BoardFile = match toml::from_str(&content) {
        Ok(board) => board,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    // A missing [link] table means board defaults
    let link = board.link.unwrap_or_default();

    if let Err(e) = link.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [link] configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("• {}", e))
        );
    }

    println!("cargo:warning=board.toml validated successfully");
    link
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

/// Emit `LINK` into `$OUT_DIR/link_config.rs`
fn write_link_config(link: &LinkConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let uart = &link.host_uart;

    let source = format!(
        "// Generated from board.toml by build.rs\n\
         pub const LINK: LinkConfig = LinkConfig {{\n\
         \x20   host_uart: UartConfig {{\n\
         \x20       baudrate: {},\n\
         \x20       data_bits: DataBits::{:?},\n\
         \x20       parity: Parity::{:?},\n\
         \x20       stop_bits: StopBits::{:?},\n\
         \x20   }},\n\
         \x20   flush_interval_ms: {},\n\
         \x20   drain_polls: {},\n\
         }};\n",
        uart.baudrate,
        uart.data_bits,
        uart.parity,
        uart.stop_bits,
        link.flush_interval_ms,
        link.drain_polls,
    );

    let path = out_dir.join("link_config.rs");
    if let Err(e) = fs::write(&path, source) {
        panic!("failed to write {}: {}", path.display(), e);
    }
}
