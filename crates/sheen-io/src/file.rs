// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading and writing map collections on disk.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use sheen_core::material::{MapCollection, MapGraphConfig};

use crate::bincode_format::BincodeMapsFormat;
use crate::definition::ImportReport;
use crate::format::MapsFormat;
use crate::ron_format::RonMapsFormat;

/// Default name of the graph configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "sheen.toml";

/// Picks a format from the file extension: `.ron` or `.bin`.
pub fn format_for_path(path: &Path) -> Result<Box<dyn MapsFormat>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("ron") => Ok(Box::new(RonMapsFormat::new())),
        Some("bin") => Ok(Box::new(BincodeMapsFormat::new())),
        _ => bail!(
            "Cannot infer a maps format for '{}' (expected .ron or .bin)",
            path.display()
        ),
    }
}

/// Reads a collection from `path`, using `config` for the new collection.
///
/// Returns the collection together with the import report, so callers can
/// surface links that had to be dropped.
pub fn read_collection(path: &Path, config: MapGraphConfig) -> Result<(MapCollection, ImportReport)> {
    let format = format_for_path(path)?;
    let data = fs::read(path)
        .with_context(|| format!("Failed to read maps file at '{}'", path.display()))?;

    let mut collection = MapCollection::with_config(config);
    let report = format
        .decode(&data, &mut collection)
        .with_context(|| format!("Failed to decode '{}' as {}", path.display(), format.format_id()))?;

    log::info!(
        "Loaded {} map(s) from '{}'.",
        collection.len(),
        path.display()
    );
    Ok((collection, report))
}

/// Writes every map of `collection` to `path`.
pub fn write_collection(path: &Path, collection: &MapCollection) -> Result<()> {
    let format = format_for_path(path)?;
    let data = format
        .encode(collection)
        .with_context(|| format!("Failed to encode maps as {}", format.format_id()))?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write maps file at '{}'", path.display()))?;

    log::info!(
        "Wrote {} map(s) to '{}'.",
        collection.len(),
        path.display()
    );
    Ok(())
}

/// Loads a [`MapGraphConfig`] from a TOML file.
///
/// A missing file yields the default configuration. Keys absent from the file
/// keep their default values.
pub fn load_graph_config(path: &Path) -> Result<MapGraphConfig> {
    if !path.exists() {
        log::info!(
            "No '{}' found. Using default configuration.",
            path.display()
        );
        return Ok(MapGraphConfig::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
    let config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))?;
    log::info!("Found '{}'. Loaded configuration.", path.display());
    Ok(config)
}
