//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qrom_ir::Program;

/// Load a program from an OpenQASM 2.0 or JSON file.
pub fn load_program(path: &str) -> Result<Program> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => Program::from_json(&source).with_context(|| format!("Invalid program: {path}")),
        _ => qrom_qasm::parse(&source).with_context(|| format!("Parse error in {path}")),
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
