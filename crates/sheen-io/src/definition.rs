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

//! A stable, intermediate representation of a map collection.
//!
//! The definition mirrors every stored field of every map, read without
//! following links. Decoding goes through [`apply`], which creates all maps
//! before establishing any link so that files may reference maps that appear
//! later.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sheen_core::material::{
    LayerStack, LayerType, MapCollection, MapLinkError, MapType, MaterialMap,
};
use sheen_core::math::Vec3;

use crate::DecodeError;

/// The definition version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// The version of definitions converted from legacy material palettes.
///
/// Legacy data wrote unset scale axes as zero and did not mark geometry
/// layers as cells; [`upgrade_definition`] repairs both.
pub const LEGACY_VERSION: u32 = 0;

/// The root container for a collection's intermediate representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapsDefinition {
    /// Layout version of this definition.
    pub version: u32,
    /// Every map of the collection.
    pub maps: Vec<MapDefinition>,
}

/// The stored fields of a single map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    /// The channel.
    pub map_type: MapType,
    /// The linked channel, if any.
    pub link: Option<MapType>,
    /// Whether the map is enabled.
    pub enabled: bool,
    /// Local scalar value.
    pub value: f32,
    /// Local projection offset.
    pub projection_offset: Vec3,
    /// Local projection rotation.
    pub projection_rotation: Vec3,
    /// Local projection scale.
    pub projection_scale: Vec3,
    /// Local layer stack.
    pub layers: LayerStack,
}

impl MapDefinition {
    /// Captures a map's local storage.
    pub fn from_map(map: &MaterialMap) -> Self {
        Self {
            map_type: map.map_type(),
            link: map.link_type(),
            enabled: map.is_enabled(),
            value: map.local_value(),
            projection_offset: map.local_projection_offset(),
            projection_rotation: map.local_projection_rotation(),
            projection_scale: map.local_projection_scale(),
            layers: map.local_layers().clone(),
        }
    }

    /// Repairs values written by legacy palettes.
    fn repair_legacy(&mut self) {
        self.projection_scale = self.projection_scale.replace_zeros(1.0);
        let top = self.layers.top_layer_mut();
        if top.scale.z == 0.0 {
            top.scale.z = 1.0;
        }
        if self.map_type == MapType::Geometry {
            top.layer_type = LayerType::Cell;
        }
    }
}

/// A link from the definition that could not be established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedLink {
    /// The map that declared the link.
    pub source: MapType,
    /// The declared target.
    pub target: MapType,
    /// Why the link was refused.
    pub error: MapLinkError,
}

/// What happened while applying a definition to a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Number of map entries applied, including repeated ones.
    pub maps_applied: usize,
    /// Types that appeared more than once; the last entry won.
    pub repeated: Vec<MapType>,
    /// Links that were dropped because they would close a cycle or exceed
    /// the hop limit.
    pub rejected_links: Vec<RejectedLink>,
    /// Links restored as `(source, missing_target)` whose target is not in
    /// the collection. They are kept and dangle.
    pub dangling_links: Vec<(MapType, MapType)>,
}

impl ImportReport {
    /// Returns `true` if nothing was repeated, dropped or left dangling.
    pub fn is_clean(&self) -> bool {
        self.repeated.is_empty() && self.rejected_links.is_empty() && self.dangling_links.is_empty()
    }
}

/// Captures every map of `collection`.
pub fn capture(collection: &MapCollection) -> MapsDefinition {
    MapsDefinition {
        version: CURRENT_VERSION,
        maps: collection
            .iter()
            .map(|map| MapDefinition::from_map(map.local()))
            .collect(),
    }
}

/// Brings a decoded definition up to [`CURRENT_VERSION`].
///
/// [`LEGACY_VERSION`] definitions get their zero scales and geometry layers
/// repaired. Current definitions pass through unchanged. Any other version
/// is refused.
pub fn upgrade_definition(mut definition: MapsDefinition) -> Result<MapsDefinition, DecodeError> {
    match definition.version {
        CURRENT_VERSION => Ok(definition),
        LEGACY_VERSION => {
            log::info!(
                "Upgrading {} legacy map(s) to version {CURRENT_VERSION}.",
                definition.maps.len()
            );
            definition.maps.iter_mut().for_each(MapDefinition::repair_legacy);
            definition.version = CURRENT_VERSION;
            Ok(definition)
        }
        found => Err(DecodeError::UnsupportedVersion {
            found,
            supported: CURRENT_VERSION,
        }),
    }
}

/// Applies a definition to `collection`.
///
/// Each entry replaces any existing map of its type. Maps of other types
/// already in the collection are kept. Links are restored in a second pass
/// once every map exists. A link to an absent map is kept and dangles, as it
/// did when it was saved. A link that would close a cycle or exceed the hop
/// limit is dropped and reported instead of failing the whole import.
pub fn apply(definition: &MapsDefinition, collection: &mut MapCollection) -> ImportReport {
    let mut report = ImportReport::default();

    let mut last_entry = BTreeMap::new();
    for (index, map_def) in definition.maps.iter().enumerate() {
        if last_entry.insert(map_def.map_type, index).is_some() {
            log::warn!(
                "Maps definition repeats {}; the later entry wins.",
                map_def.map_type
            );
            report.repeated.push(map_def.map_type);
        }
    }

    // First pass: create every map with its local settings.
    for map_def in &definition.maps {
        let mut map = collection.add_map(map_def.map_type);
        map.set_enabled(map_def.enabled);
        map.set_value(map_def.value);
        map.set_projection_offset(map_def.projection_offset);
        map.set_projection_rotation(map_def.projection_rotation);
        map.set_projection_scale(map_def.projection_scale);
        map.set_layers(map_def.layers.clone());
        report.maps_applied += 1;
    }

    // Second pass: links, now that every target exists.
    for (index, map_def) in definition.maps.iter().enumerate() {
        let Some(target) = map_def.link else {
            continue;
        };
        if last_entry.get(&map_def.map_type) != Some(&index) {
            continue;
        }
        let dangling = !collection.contains(target);
        let Some(mut map) = collection.get_mut(map_def.map_type) else {
            continue;
        };
        match map.restore_link_type(Some(target)) {
            Ok(()) if dangling => report.dangling_links.push((map_def.map_type, target)),
            Ok(()) => {}
            Err(error) => {
                log::warn!("Dropping link while importing maps: {error}");
                report.rejected_links.push(RejectedLink {
                    source: map_def.map_type,
                    target,
                    error,
                });
            }
        }
    }

    report
}
