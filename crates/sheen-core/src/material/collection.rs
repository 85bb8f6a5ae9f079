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

//! The registry that owns every map of a material.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use super::{MapGraphConfig, MapMut, MapRef, MapType, MaterialMap};

/// Owns the maps of one material, at most one per [`MapType`].
///
/// Maps never hold a reference back to the collection. Link-following reads
/// and writes are done through the borrowed views returned by
/// [`get`](Self::get) and [`get_mut`](Self::get_mut), which carry the
/// collection with them.
///
/// # Examples
///
/// ```
/// use sheen_core::material::{MapCollection, MapType};
///
/// let mut maps = MapCollection::new();
/// maps.add_map(MapType::SpecularColor).set_value(0.4);
/// maps.add_map(MapType::GlowColor)
///     .set_link_type(Some(MapType::SpecularColor))
///     .unwrap();
///
/// // Glow reads through its link.
/// assert_eq!(maps.get(MapType::GlowColor).unwrap().value(), 0.4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapCollection {
    maps: BTreeMap<MapType, MaterialMap>,
    config: MapGraphConfig,
}

impl MapCollection {
    /// Creates an empty collection with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with the given configuration.
    pub fn with_config(config: MapGraphConfig) -> Self {
        Self {
            maps: BTreeMap::new(),
            config,
        }
    }

    /// The configuration used for link traversal.
    pub fn config(&self) -> &MapGraphConfig {
        &self.config
    }

    /// Adds a map with default settings, replacing any existing map of that type.
    ///
    /// Replacement is total: the previous node's data is discarded, not merged.
    /// Links are stored by type, so maps that linked to the replaced node now
    /// resolve to the fresh default node and read its default settings.
    pub fn add_map(&mut self, map_type: MapType) -> MapMut<'_> {
        if self.maps.insert(map_type, MaterialMap::new(map_type)).is_some() {
            log::debug!("Replaced {map_type} map with a default one.");
        } else {
            log::debug!("Added {map_type} map.");
        }
        MapMut::new(self, map_type)
    }

    /// Adds a map identified by its raw id.
    ///
    /// Returns `None` without touching the collection for the "none" id `0`
    /// and for unknown ids.
    pub fn add_raw_map(&mut self, raw: u32) -> Option<MapMut<'_>> {
        let map_type = MapType::from_raw(raw)?;
        Some(self.add_map(map_type))
    }

    /// Removes a map and returns it. Does nothing if the map is absent.
    ///
    /// Links from other maps to the removed one are left dangling.
    pub fn delete_map(&mut self, map_type: MapType) -> Option<MaterialMap> {
        let removed = self.maps.remove(&map_type);
        if removed.is_some() {
            log::debug!("Deleted {map_type} map.");
        }
        removed
    }

    /// Removes every map, keeping the configuration.
    pub fn clear(&mut self) {
        self.maps.clear();
    }

    /// Returns a link-following view of the map, if present.
    pub fn get(&self, map_type: MapType) -> Option<MapRef<'_>> {
        self.maps.get(&map_type).map(|map| MapRef::new(self, map))
    }

    /// Returns a mutable link-following view of the map, if present.
    pub fn get_mut(&mut self, map_type: MapType) -> Option<MapMut<'_>> {
        if self.maps.contains_key(&map_type) {
            Some(MapMut::new(self, map_type))
        } else {
            None
        }
    }

    /// Returns the map's local node without following links.
    pub fn node(&self, map_type: MapType) -> Option<&MaterialMap> {
        self.maps.get(&map_type)
    }

    /// Returns `true` if a map of this type exists.
    pub fn contains(&self, map_type: MapType) -> bool {
        self.maps.contains_key(&map_type)
    }

    /// Number of maps in the collection.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns `true` if the collection holds no maps.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Iterates the maps in [`MapType`] order.
    pub fn iter(&self) -> impl Iterator<Item = MapRef<'_>> + '_ {
        self.maps.values().map(move |map| MapRef::new(self, map))
    }

    /// Iterates the types present in the collection, in order.
    pub fn map_types(&self) -> impl Iterator<Item = MapType> + '_ {
        self.maps.keys().copied()
    }

    /// Lists every `(source, missing_target)` pair whose link points at an absent map.
    pub fn dangling_links(&self) -> Vec<(MapType, MapType)> {
        self.maps
            .values()
            .filter_map(|map| {
                map.link_type
                    .filter(|target| !self.maps.contains_key(target))
                    .map(|target| (map.map_type, target))
            })
            .collect()
    }
}

impl Index<MapType> for MapCollection {
    type Output = MaterialMap;

    /// Direct access to a map's local node.
    ///
    /// # Panics
    /// Panics if the collection has no map of that type.
    fn index(&self, map_type: MapType) -> &Self::Output {
        match self.maps.get(&map_type) {
            Some(map) => map,
            None => panic!("No {map_type} map in collection"),
        }
    }
}

impl IndexMut<MapType> for MapCollection {
    fn index_mut(&mut self, map_type: MapType) -> &mut Self::Output {
        match self.maps.get_mut(&map_type) {
            Some(map) => map,
            None => panic!("No {map_type} map in collection"),
        }
    }
}
