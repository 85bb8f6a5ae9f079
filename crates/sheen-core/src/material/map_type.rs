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

//! Channel identifiers for material maps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one texture channel on a material.
///
/// A [`MapCollection`](super::MapCollection) holds at most one map per
/// `MapType`, and links between maps name their target by `MapType`. The
/// "no channel" / "not linked" case is expressed as `Option<MapType>` rather
/// than as a member of this enum.
///
/// Every variant has a stable raw id (see [`MapType::raw`]) used by packed
/// formats and legacy callers. Raw id `0` is reserved for "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MapType {
    /// Base color / diffuse pattern.
    Pattern,
    /// Bump (height) perturbation.
    Bump,
    /// Specular intensity.
    Specular,
    /// Reflection intensity.
    Reflect,
    /// Transparency amount.
    Transparency,
    /// Translucency amount.
    Translucency,
    /// Surface finish.
    Finish,
    /// Diffuse intensity.
    Diffuse,
    /// Glow intensity.
    GlowAmount,
    /// Clearcoat intensity.
    ClearcoatAmount,
    /// Anisotropic highlight direction.
    AnisotropicDirection,
    /// Specular tint.
    SpecularColor,
    /// Transparency tint.
    TransparentColor,
    /// Translucency tint.
    TranslucencyColor,
    /// Geometric displacement.
    Displacement,
    /// Tangent-space normal map.
    Normal,
    /// Fur strand length.
    FurLength,
    /// Fur strand density.
    FurDensity,
    /// Fur jitter.
    FurJitter,
    /// Fur flexibility.
    FurFlex,
    /// Fur clumping.
    FurClumps,
    /// Fur growth direction.
    FurDirection,
    /// Fur growth vector.
    FurVector,
    /// Fur bump.
    FurBump,
    /// Fur curls.
    FurCurls,
    /// Glow tint.
    GlowColor,
    /// Reflection tint.
    ReflectColor,
    /// Refraction roughness.
    RefractionRoughness,
    /// Specular Fresnel falloff.
    SpecularFresnel,
    /// Cell geometry placed on the surface.
    Geometry,
}

impl MapType {
    /// Number of channel types.
    pub const COUNT: usize = 30;

    /// Every channel type, in raw id order.
    pub const ALL: [MapType; Self::COUNT] = [
        MapType::Pattern,
        MapType::Bump,
        MapType::Specular,
        MapType::Reflect,
        MapType::Transparency,
        MapType::Translucency,
        MapType::Finish,
        MapType::Diffuse,
        MapType::GlowAmount,
        MapType::ClearcoatAmount,
        MapType::AnisotropicDirection,
        MapType::SpecularColor,
        MapType::TransparentColor,
        MapType::TranslucencyColor,
        MapType::Displacement,
        MapType::Normal,
        MapType::FurLength,
        MapType::FurDensity,
        MapType::FurJitter,
        MapType::FurFlex,
        MapType::FurClumps,
        MapType::FurDirection,
        MapType::FurVector,
        MapType::FurBump,
        MapType::FurCurls,
        MapType::GlowColor,
        MapType::ReflectColor,
        MapType::RefractionRoughness,
        MapType::SpecularFresnel,
        MapType::Geometry,
    ];

    /// Returns the stable raw id of this channel (`1..=COUNT`).
    #[inline]
    pub fn raw(self) -> u32 {
        // `ALL` is in declaration order, so the discriminant is the position.
        self as u32 + 1
    }

    /// Converts a raw id back into a channel.
    ///
    /// Returns `None` for `0` (the "none" id) and for ids outside the known range.
    pub fn from_raw(raw: u32) -> Option<MapType> {
        let index = (raw as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Returns a human-readable name for the channel.
    pub fn name(self) -> &'static str {
        match self {
            MapType::Pattern => "Pattern",
            MapType::Bump => "Bump",
            MapType::Specular => "Specular",
            MapType::Reflect => "Reflect",
            MapType::Transparency => "Transparency",
            MapType::Translucency => "Translucency",
            MapType::Finish => "Finish",
            MapType::Diffuse => "Diffuse",
            MapType::GlowAmount => "GlowAmount",
            MapType::ClearcoatAmount => "ClearcoatAmount",
            MapType::AnisotropicDirection => "AnisotropicDirection",
            MapType::SpecularColor => "SpecularColor",
            MapType::TransparentColor => "TransparentColor",
            MapType::TranslucencyColor => "TranslucencyColor",
            MapType::Displacement => "Displacement",
            MapType::Normal => "Normal",
            MapType::FurLength => "FurLength",
            MapType::FurDensity => "FurDensity",
            MapType::FurJitter => "FurJitter",
            MapType::FurFlex => "FurFlex",
            MapType::FurClumps => "FurClumps",
            MapType::FurDirection => "FurDirection",
            MapType::FurVector => "FurVector",
            MapType::FurBump => "FurBump",
            MapType::FurCurls => "FurCurls",
            MapType::GlowColor => "GlowColor",
            MapType::ReflectColor => "ReflectColor",
            MapType::RefractionRoughness => "RefractionRoughness",
            MapType::SpecularFresnel => "SpecularFresnel",
            MapType::Geometry => "Geometry",
        }
    }

    /// Returns `true` for channels that carry a meaningful scalar value.
    ///
    /// Pattern, Geometry and the tint (`*Color`) channels do not; their
    /// `value` field is stored and round-tripped but ignored when maps are
    /// compared.
    pub fn is_value_map(self) -> bool {
        matches!(
            self,
            MapType::Bump
                | MapType::Specular
                | MapType::Reflect
                | MapType::Transparency
                | MapType::Translucency
                | MapType::Finish
                | MapType::Diffuse
                | MapType::GlowAmount
                | MapType::ClearcoatAmount
                | MapType::AnisotropicDirection
                | MapType::Displacement
                | MapType::Normal
                | MapType::FurLength
                | MapType::FurDensity
                | MapType::FurJitter
                | MapType::FurFlex
                | MapType::FurClumps
                | MapType::FurDirection
                | MapType::FurVector
                | MapType::FurBump
                | MapType::FurCurls
                | MapType::RefractionRoughness
                | MapType::SpecularFresnel
        )
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies an optional channel; `None` never carries a value.
#[inline]
pub fn is_value_map(map_type: Option<MapType>) -> bool {
    map_type.is_some_and(MapType::is_value_map)
}
