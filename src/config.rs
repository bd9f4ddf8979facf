use crate::error::{CreditError, Result};
use crate::types::config::CreditConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "credit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".credit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/credit-eval/config.toml";

/// Merged configuration of a workshop directory.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CreditConfig,
    /// Whether the workshop directory carries its own `credit.toml`.
    pub repo_file_found: bool,
}

pub fn load_config(root: &Path) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges the global file, the workshop `credit.toml` and the local override,
/// later layers winning. Every layer is optional.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LoadedConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let repo_file_found = merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let config: CreditConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CreditError::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(LoadedConfig {
        config,
        repo_file_found,
    })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CreditError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Resolves a configured path against the workshop directory.
pub fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}
