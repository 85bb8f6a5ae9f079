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

//! The per-channel node stored in a map collection.

use super::{LayerStack, MapType};
use crate::math::{approx_eq_eps, Vec3};

/// One texture channel's local settings.
///
/// A `MaterialMap` only ever describes its own storage. Reads and writes that
/// follow links go through [`MapRef`](super::MapRef) and
/// [`MapMut`](super::MapMut), which pair the node with its owning collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialMap {
    pub(crate) map_type: MapType,
    pub(crate) link_type: Option<MapType>,
    pub(crate) enabled: bool,
    pub(crate) value: f32,
    pub(crate) projection_offset: Vec3,
    pub(crate) projection_rotation: Vec3,
    pub(crate) projection_scale: Vec3,
    pub(crate) layers: LayerStack,
}

impl MaterialMap {
    /// Creates a node with default settings for `map_type`.
    pub fn new(map_type: MapType) -> Self {
        Self {
            map_type,
            link_type: None,
            enabled: true,
            value: 1.0,
            projection_offset: Vec3::ZERO,
            projection_rotation: Vec3::ZERO,
            projection_scale: Vec3::ONE,
            layers: LayerStack::new(),
        }
    }

    /// The channel this node represents. Fixed at construction.
    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    /// The channel this node mirrors, if linked.
    pub fn link_type(&self) -> Option<MapType> {
        self.link_type
    }

    /// Whether the channel is enabled. Never aliased.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The locally stored scalar value.
    pub fn local_value(&self) -> f32 {
        self.value
    }

    /// The locally stored projection offset.
    pub fn local_projection_offset(&self) -> Vec3 {
        self.projection_offset
    }

    /// The locally stored projection rotation.
    pub fn local_projection_rotation(&self) -> Vec3 {
        self.projection_rotation
    }

    /// The locally stored projection scale.
    pub fn local_projection_scale(&self) -> Vec3 {
        self.projection_scale
    }

    /// The locally stored layer stack.
    pub fn local_layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Copies every setting from `source` except the channel identity.
    ///
    /// The link is copied verbatim and not validated; a copy can therefore
    /// point at a channel that does not exist in the destination collection.
    pub fn copy_from(&mut self, source: &MaterialMap) {
        self.link_type = source.link_type;
        self.enabled = source.enabled;
        self.value = source.value;
        self.projection_offset = source.projection_offset;
        self.projection_rotation = source.projection_rotation;
        self.projection_scale = source.projection_scale;
        self.layers.clone_from(&source.layers);
    }

    /// Compares the aliasable settings of two nodes with a float tolerance.
    ///
    /// `compare_value` is taken from the channel being compared rather than
    /// from either node, since the nodes may be link terminals of another type.
    pub(crate) fn settings_approx_eq(&self, other: &Self, compare_value: bool, tolerance: f32) -> bool {
        self.projection_offset.approx_eq_eps(other.projection_offset, tolerance)
            && self.projection_rotation.approx_eq_eps(other.projection_rotation, tolerance)
            && self.projection_scale.approx_eq_eps(other.projection_scale, tolerance)
            && (!compare_value || approx_eq_eps(self.value, other.value, tolerance))
            && self.layers.approx_eq(&other.layers, tolerance)
    }
}
