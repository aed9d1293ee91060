use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries, in the order `Config` writes them.
fn expected_keys() -> AppResult<Vec<String>> {
    let defaults = serde_yaml::to_value(Config::default())?;
    let map = defaults
        .as_mapping()
        .ok_or_else(|| AppError::Config("default config is not a mapping".into()))?;

    Ok(map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Keys missing from the file at `path` (they load with their defaults).
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let yaml = read_mapping(path)?;
    let map = yaml.as_mapping();

    Ok(expected_keys()?
        .into_iter()
        .filter(|k| !map.is_some_and(|m| m.contains_key(k.as_str())))
        .collect())
}

/// Write every missing key with its default value; existing values are kept.
/// Returns the keys that were added.
pub fn add_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut yaml = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default())?;
    let mut added = Vec::new();

    if let (Some(map), Some(def)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for (key, value) in def {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                if let Some(k) = key.as_str() {
                    added.push(k.to_string());
                }
            }
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml)?;

    // Keep the weekday options documented next to the key
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("show_weekday:") {
            new_content.push_str(
                "# show_weekday options:\n\
                 #   None   → do not show weekday\n\
                 #   Short  → Mo, Tu, We, Th, Fr, Sa, Su\n\
                 #   Medium → Mon, Tue, Wed, Thu, Fri, Sat, Sun\n\
                 #   Long   → Monday, Tuesday, ...\n",
            );
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));

    Ok(added)
}
