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

//! Layer stacks attached to material maps.
//!
//! A [`LayerStack`] is the ordered list of image/procedure/compositing layers
//! that make up one channel. The link resolver treats the stack as a single
//! value: it is copied and compared as a whole, never traversed for links.

use serde::{Deserialize, Serialize};

use super::LayerStackError;
use crate::math::{approx_eq_eps, Vec3};

/// The kind of a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayerType {
    /// A bitmap texture read from `file_name`.
    #[default]
    Image,
    /// A built-in procedural texture.
    Procedure,
    /// A color gradient.
    Gradient,
    /// An external procedural texture.
    LxoProcedure,
    /// Cell geometry (only meaningful on geometry maps).
    Cell,
    /// Opens a layer group.
    GroupStart,
    /// Closes a layer group.
    GroupEnd,
    /// Normal blend of the layers below.
    Normal,
    /// Additive blend.
    Add,
    /// Subtractive blend.
    Subtract,
    /// Multiplicative blend.
    Multiply,
    /// Screen blend.
    Screen,
    /// Alpha mask.
    Alpha,
}

/// How a layer is projected onto geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapMode {
    /// Uses the geometry's own texture coordinates.
    #[default]
    Parametric,
    /// Projects along the surface normal.
    Planar,
    /// Drapes from above along the world Z axis.
    ElevationDrape,
    /// Drapes along a given direction.
    DirectionalDrape,
    /// Six-sided box projection.
    Cubic,
    /// Spherical projection.
    Spherical,
    /// Cylindrical projection.
    Cylindrical,
    /// Solid (3D) texture space.
    Solid,
    /// Projects from the view.
    FrontProjection,
}

/// The unit in which a layer's scale is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapUnits {
    /// Scale is relative to the geometry.
    #[default]
    Relative,
    /// Meters.
    Meters,
    /// Millimeters.
    Millimeters,
    /// Feet.
    Feet,
    /// Inches.
    Inches,
}

/// One entry in a [`LayerStack`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    /// The kind of layer.
    pub layer_type: LayerType,
    /// The texture file for image layers, empty otherwise.
    pub file_name: String,
    /// Whether the layer contributes to the channel.
    pub enabled: bool,
    /// Projection mode.
    pub mode: MapMode,
    /// Units for `scale` and `offset`.
    pub units: MapUnits,
    /// In-plane rotation, in degrees.
    pub rotation: f32,
    /// Texture repeat scale.
    pub scale: Vec3,
    /// Texture offset.
    pub offset: Vec3,
    /// Gamma applied to image data.
    pub gamma: f32,
    /// Inverts the layer's contribution.
    pub inverted: bool,
    /// Treats the image background as transparent.
    pub background_transparent: bool,
}

impl Default for MapLayer {
    fn default() -> Self {
        Self {
            layer_type: LayerType::Image,
            file_name: String::new(),
            enabled: true,
            mode: MapMode::Parametric,
            units: MapUnits::Relative,
            rotation: 0.0,
            scale: Vec3::ONE,
            offset: Vec3::ZERO,
            gamma: 1.0,
            inverted: false,
            background_transparent: false,
        }
    }
}

impl MapLayer {
    /// Creates a default layer of the given type.
    pub fn with_type(layer_type: LayerType) -> Self {
        Self {
            layer_type,
            ..Default::default()
        }
    }

    /// Compares two layers, allowing each float to differ by less than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.layer_type == other.layer_type
            && self.file_name == other.file_name
            && self.enabled == other.enabled
            && self.mode == other.mode
            && self.units == other.units
            && self.inverted == other.inverted
            && self.background_transparent == other.background_transparent
            && approx_eq_eps(self.rotation, other.rotation, tolerance)
            && approx_eq_eps(self.gamma, other.gamma, tolerance)
            && self.scale.approx_eq_eps(other.scale, tolerance)
            && self.offset.approx_eq_eps(other.offset, tolerance)
    }
}

/// An ordered, never-empty sequence of [`MapLayer`]s.
///
/// Index `0` is the top layer. A stack always holds at least that one layer:
/// [`LayerStack::delete_layer`] refuses to remove it and deserialisation
/// rejects an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MapLayer>", into = "Vec<MapLayer>")]
pub struct LayerStack {
    layers: Vec<MapLayer>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStack {
    /// Creates a stack holding a single default image layer.
    pub fn new() -> Self {
        Self::with_top_layer(MapLayer::default())
    }

    /// Creates a stack whose only layer is `top`.
    pub fn with_top_layer(top: MapLayer) -> Self {
        Self { layers: vec![top] }
    }

    /// The first layer of the stack.
    pub fn top_layer(&self) -> &MapLayer {
        &self.layers[0]
    }

    /// Mutable access to the first layer of the stack.
    pub fn top_layer_mut(&mut self) -> &mut MapLayer {
        &mut self.layers[0]
    }

    /// Appends a default layer and returns it for editing.
    pub fn add_layer(&mut self) -> &mut MapLayer {
        let index = self.layers.len();
        self.layers.push(MapLayer::default());
        &mut self.layers[index]
    }

    /// Removes and returns the layer at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or if the stack has only one layer left.
    pub fn delete_layer(&mut self, index: usize) -> Result<MapLayer, LayerStackError> {
        let len = self.layers.len();
        if index >= len {
            return Err(LayerStackError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(LayerStackError::LastLayer);
        }
        Ok(self.layers.remove(index))
    }

    /// Returns the layer at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&MapLayer> {
        self.layers.get(index)
    }

    /// Returns the layer at `index` mutably, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MapLayer> {
        self.layers.get_mut(index)
    }

    /// Number of layers; always at least one.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Iterates the layers from top to bottom.
    pub fn iter(&self) -> std::slice::Iter<'_, MapLayer> {
        self.layers.iter()
    }

    /// Compares two stacks layer by layer with a float tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.layers.len() == other.layers.len()
            && self
                .layers
                .iter()
                .zip(&other.layers)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl TryFrom<Vec<MapLayer>> for LayerStack {
    type Error = String;

    fn try_from(layers: Vec<MapLayer>) -> Result<Self, Self::Error> {
        if layers.is_empty() {
            return Err("a layer stack needs at least one layer".to_string());
        }
        Ok(Self { layers })
    }
}

impl From<LayerStack> for Vec<MapLayer> {
    fn from(stack: LayerStack) -> Self {
        stack.layers
    }
}

impl<'a> IntoIterator for &'a LayerStack {
    type Item = &'a MapLayer;
    type IntoIter = std::slice::Iter<'a, MapLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
