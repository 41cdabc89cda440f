//! Design-file loading for habitat layouts.
//!
//! A design is accepted as a YAML file, a single TOML file, a directory of
//! per-module TOML files (read in sorted path order), or a JSON export being
//! re-imported. Derived calculations are never stored in any of these forms;
//! they are recomputed on display.

use std::fs::File;
use std::path::{Path, PathBuf};

use habitat_model::{Habitat, Module};
use thiserror::Error;

/// Errors that can occur while loading design files.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("failed to read design: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a habitat design, dispatching on the path's shape and extension.
pub fn load_design<P: AsRef<Path>>(path: P) -> Result<Habitat, DesignError> {
    let path = path.as_ref();
    if path.is_dir() {
        return load_module_dir(path);
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        // Exports carry the bare ordered module list; the design name is
        // recovered from the file stem.
        Some("json") => {
            let modules: Vec<Module> = serde_json::from_reader(File::open(path)?)?;
            Ok(Habitat {
                name: name_from_path(path),
                modules,
            })
        }
        _ => Ok(serde_yaml::from_reader(File::open(path)?)?),
    }
}

fn load_module_dir(dir: &Path) -> Result<Habitat, DesignError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();

    let mut modules = Vec::new();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let module: Module = toml::from_str(&contents)?;
        modules.push(module);
    }

    Ok(Habitat {
        name: name_from_path(dir),
        modules,
    })
}

fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("habitat")
        .to_string()
}
