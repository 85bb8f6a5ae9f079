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

//! Borrowed views that pair a map with its owning collection.

use super::{
    LayerStack, LinkResolution, MapCollection, MapLinkError, MapType, MaterialMap,
    MAP_COMPARISON_TOLERANCE,
};
use crate::math::Vec3;

/// A shared, link-following view of one map.
///
/// Aliasable properties (value, projection offset/rotation/scale, layers)
/// are read from the terminal of the map's link chain. When the chain is
/// broken they are read from the map's own storage. The map type, link and
/// enabled flag are always local.
#[derive(Debug, Clone, Copy)]
pub struct MapRef<'a> {
    collection: &'a MapCollection,
    map: &'a MaterialMap,
}

impl<'a> MapRef<'a> {
    pub(crate) fn new(collection: &'a MapCollection, map: &'a MaterialMap) -> Self {
        Self { collection, map }
    }

    /// The channel of this map.
    pub fn map_type(&self) -> MapType {
        self.map.map_type
    }

    /// The channel this map links to, if any.
    pub fn link_type(&self) -> Option<MapType> {
        self.map.link_type
    }

    /// Whether this map is enabled.
    pub fn is_enabled(&self) -> bool {
        self.map.enabled
    }

    /// Whether this map's channel carries a scalar value.
    pub fn is_value_map(&self) -> bool {
        self.map.map_type.is_value_map()
    }

    /// The map's own storage, ignoring links.
    pub fn local(&self) -> &'a MaterialMap {
        self.map
    }

    /// The collection this map belongs to.
    pub fn collection(&self) -> &'a MapCollection {
        self.collection
    }

    /// Follows the link chain from this map.
    pub fn resolution(&self) -> LinkResolution {
        self.collection.resolve_map(self.map)
    }

    /// Returns a view of the terminal map, or `None` if the chain is broken.
    pub fn terminal(&self) -> Option<MapRef<'a>> {
        let terminal = self.resolution().terminal()?;
        self.collection.get(terminal)
    }

    fn effective(&self) -> &'a MaterialMap {
        self.collection.effective_map(self.map)
    }

    /// The effective scalar value.
    pub fn value(&self) -> f32 {
        self.effective().value
    }

    /// The effective projection offset.
    pub fn projection_offset(&self) -> Vec3 {
        self.effective().projection_offset
    }

    /// The effective projection rotation.
    pub fn projection_rotation(&self) -> Vec3 {
        self.effective().projection_rotation
    }

    /// The effective projection scale.
    pub fn projection_scale(&self) -> Vec3 {
        self.effective().projection_scale
    }

    /// The effective layer stack.
    pub fn layers(&self) -> &'a LayerStack {
        &self.effective().layers
    }

    /// The terminal node, but only when this map is linked and the link resolves.
    fn linked_terminal(&self) -> Option<&'a MaterialMap> {
        self.map.link_type?;
        let terminal = self.resolution().terminal()?;
        self.collection.node(terminal)
    }
}

/// Two maps are equal when their types and links match and their settings
/// agree within [`MAP_COMPARISON_TOLERANCE`].
///
/// Links are compared as stored, not resolved. The settings compared are the
/// terminals' when *both* maps are linked and resolve. In every other case
/// each map's local storage is compared, including a map whose link does
/// resolve while the other's does not. The value only takes part for value
/// channels; the enabled flag never does.
impl PartialEq for MapRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.map_type() != other.map_type() || self.link_type() != other.link_type() {
            return false;
        }

        let (lhs, rhs) = match (self.linked_terminal(), other.linked_terminal()) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => (self.map, other.map),
        };
        lhs.settings_approx_eq(rhs, self.is_value_map(), MAP_COMPARISON_TOLERANCE)
    }
}

/// An exclusive, link-following view of one map.
///
/// Setters for aliasable properties write to the terminal of the link chain,
/// so every map sharing that terminal observes the change. When the chain is
/// broken they write to this map's own storage, which then acts as an inert
/// buffer until the link is repaired or cleared.
#[derive(Debug)]
pub struct MapMut<'a> {
    collection: &'a mut MapCollection,
    map_type: MapType,
}

impl<'a> MapMut<'a> {
    /// `map_type` must be present in `collection`.
    pub(crate) fn new(collection: &'a mut MapCollection, map_type: MapType) -> Self {
        Self {
            collection,
            map_type,
        }
    }

    /// A shared view of the same map.
    pub fn view(&self) -> MapRef<'_> {
        let collection: &MapCollection = &*self.collection;
        MapRef::new(collection, &collection[self.map_type])
    }

    /// Converts into a shared view for the rest of the borrow.
    pub fn into_ref(self) -> MapRef<'a> {
        let collection: &'a MapCollection = self.collection;
        MapRef::new(collection, &collection[self.map_type])
    }

    /// The channel of this map.
    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    /// The channel this map links to, if any.
    pub fn link_type(&self) -> Option<MapType> {
        self.local().link_type
    }

    /// The map's own storage, ignoring links.
    pub fn local(&self) -> &MaterialMap {
        &self.collection[self.map_type]
    }

    /// Whether this map is enabled.
    pub fn is_enabled(&self) -> bool {
        self.local().enabled
    }

    /// Follows the link chain from this map.
    pub fn resolution(&self) -> LinkResolution {
        self.view().resolution()
    }

    /// The effective scalar value.
    pub fn value(&self) -> f32 {
        self.view().value()
    }

    /// The effective projection offset.
    pub fn projection_offset(&self) -> Vec3 {
        self.view().projection_offset()
    }

    /// The effective projection rotation.
    pub fn projection_rotation(&self) -> Vec3 {
        self.view().projection_rotation()
    }

    /// The effective projection scale.
    pub fn projection_scale(&self) -> Vec3 {
        self.view().projection_scale()
    }

    /// The effective layer stack.
    pub fn layers(&self) -> &LayerStack {
        self.view().layers()
    }

    fn effective_mut(&mut self) -> &mut MaterialMap {
        let target = self.resolution().terminal().unwrap_or(self.map_type);
        &mut self.collection[target]
    }

    /// Enables or disables this map. Never aliased.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.collection[self.map_type].enabled = enabled;
    }

    /// Sets the effective scalar value.
    pub fn set_value(&mut self, value: f32) {
        self.effective_mut().value = value;
    }

    /// Mutable access to the effective scalar value.
    pub fn value_mut(&mut self) -> &mut f32 {
        &mut self.effective_mut().value
    }

    /// Sets the effective projection offset.
    pub fn set_projection_offset(&mut self, offset: Vec3) {
        self.effective_mut().projection_offset = offset;
    }

    /// Mutable access to the effective projection offset.
    pub fn projection_offset_mut(&mut self) -> &mut Vec3 {
        &mut self.effective_mut().projection_offset
    }

    /// Sets the effective projection rotation.
    pub fn set_projection_rotation(&mut self, rotation: Vec3) {
        self.effective_mut().projection_rotation = rotation;
    }

    /// Mutable access to the effective projection rotation.
    pub fn projection_rotation_mut(&mut self) -> &mut Vec3 {
        &mut self.effective_mut().projection_rotation
    }

    /// Sets the effective projection scale.
    pub fn set_projection_scale(&mut self, scale: Vec3) {
        self.effective_mut().projection_scale = scale;
    }

    /// Mutable access to the effective projection scale.
    pub fn projection_scale_mut(&mut self) -> &mut Vec3 {
        &mut self.effective_mut().projection_scale
    }

    /// Replaces the effective layer stack.
    pub fn set_layers(&mut self, layers: LayerStack) {
        self.effective_mut().layers = layers;
    }

    /// Mutable access to the effective layer stack.
    pub fn layers_mut(&mut self) -> &mut LayerStack {
        &mut self.effective_mut().layers
    }

    /// Links this map to `target`, or unlinks it when `target` is `None`.
    ///
    /// # Errors
    ///
    /// Refuses links to itself, to absent maps and links that would close a
    /// cycle; the map is unchanged on error. See
    /// [`MapCollection::validate_link`].
    pub fn set_link_type(&mut self, target: Option<MapType>) -> Result<(), MapLinkError> {
        let source = self.map_type;
        if let Some(target) = target {
            self.collection.validate_link(source, target)?;
            log::debug!("Linked {source} map to {target}.");
        } else if self.link_type().is_some() {
            log::debug!("Unlinked {source} map.");
        }
        self.collection[source].link_type = target;
        Ok(())
    }

    /// Links this map to `target` like [`set_link_type`](Self::set_link_type),
    /// but accepts a target that is not in the collection.
    ///
    /// Such a link is stored as-is and stays dangling until a map of that
    /// type is added. Self-links, cycles and over-long chains are still
    /// refused. Loaders use this to restore saved links, since a dangling
    /// link is valid saved state.
    pub fn restore_link_type(&mut self, target: Option<MapType>) -> Result<(), MapLinkError> {
        let source = self.map_type;
        if let Some(target) = target {
            match self.collection.validate_link(source, target) {
                Ok(()) => log::debug!("Linked {source} map to {target}."),
                Err(MapLinkError::MissingTarget { .. }) => {
                    log::debug!("Linked {source} map to absent {target}; the link dangles.")
                }
                Err(error) => return Err(error),
            }
        }
        self.collection[source].link_type = target;
        Ok(())
    }

    /// Copies every local setting from `source` except the channel identity.
    ///
    /// See [`MaterialMap::copy_from`].
    pub fn copy_from(&mut self, source: &MaterialMap) {
        self.collection[self.map_type].copy_from(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::LayerType;

    #[test]
    fn test_linked_reads_follow_terminal() {
        let mut maps = MapCollection::new();
        {
            let mut spec = maps.add_map(MapType::SpecularColor);
            spec.set_projection_offset(Vec3::new(1.0, 2.0, 3.0));
            spec.layers_mut().top_layer_mut().file_name = "spec.png".to_string();
        }
        maps.add_map(MapType::GlowColor)
            .set_link_type(Some(MapType::SpecularColor))
            .unwrap();

        let glow = maps.get(MapType::GlowColor).unwrap();
        assert_eq!(glow.projection_offset(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(glow.layers().top_layer().file_name, "spec.png");
        assert_eq!(glow.local().local_projection_offset(), Vec3::ZERO);
        assert_eq!(glow.terminal().unwrap().map_type(), MapType::SpecularColor);
    }

    #[test]
    fn test_linked_writes_land_on_terminal() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        let mut bump = maps.add_map(MapType::Bump);
        bump.set_link_type(Some(MapType::Reflect)).unwrap();
        bump.set_projection_rotation(Vec3::new(0.0, 0.0, 45.0));
        *bump.value_mut() = 0.75;
        bump.layers_mut().add_layer().layer_type = LayerType::Add;

        let reflect = maps.node(MapType::Reflect).unwrap();
        assert_eq!(reflect.local_projection_rotation(), Vec3::new(0.0, 0.0, 45.0));
        assert_eq!(reflect.local_value(), 0.75);
        assert_eq!(reflect.local_layers().layer_count(), 2);

        let bump = maps.node(MapType::Bump).unwrap();
        assert_eq!(bump.local_value(), 1.0);
        assert_eq!(bump.local_layers().layer_count(), 1);
    }

    #[test]
    fn test_enabled_is_never_aliased() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        let mut bump = maps.add_map(MapType::Bump);
        bump.set_link_type(Some(MapType::Reflect)).unwrap();
        bump.set_enabled(false);

        assert!(!maps.get(MapType::Bump).unwrap().is_enabled());
        assert!(maps.get(MapType::Reflect).unwrap().is_enabled());
    }

    #[test]
    fn test_dangling_writes_fall_back_to_local() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        maps.add_map(MapType::Bump)
            .set_link_type(Some(MapType::Reflect))
            .unwrap();
        maps.delete_map(MapType::Reflect);

        let mut bump = maps.get_mut(MapType::Bump).unwrap();
        bump.set_projection_scale(Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(
            bump.resolution(),
            LinkResolution::Dangling {
                missing: MapType::Reflect
            }
        );
        assert_eq!(bump.projection_scale(), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(bump.local().local_projection_scale(), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(bump.link_type(), Some(MapType::Reflect));
    }

    #[test]
    fn test_failed_link_leaves_map_unchanged() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        maps.add_map(MapType::Bump)
            .set_link_type(Some(MapType::Reflect))
            .unwrap();

        let mut reflect = maps.get_mut(MapType::Reflect).unwrap();
        assert!(reflect.set_link_type(Some(MapType::Bump)).is_err());
        assert!(reflect.set_link_type(Some(MapType::Reflect)).is_err());
        assert!(reflect.set_link_type(Some(MapType::Normal)).is_err());
        assert_eq!(reflect.link_type(), None);
    }

    #[test]
    fn test_unlink_restores_local_reads() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect).set_value(0.2);
        let mut bump = maps.add_map(MapType::Bump);
        bump.set_link_type(Some(MapType::Reflect)).unwrap();
        assert_eq!(bump.value(), 0.2);

        bump.set_link_type(None).unwrap();
        assert_eq!(bump.value(), 1.0);
        assert_eq!(bump.resolution(), LinkResolution::Terminal(MapType::Bump));
    }

    #[test]
    fn test_relink_overwrites_previous_link() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect).set_value(0.2);
        maps.add_map(MapType::Finish).set_value(0.9);
        let mut bump = maps.add_map(MapType::Bump);
        bump.set_link_type(Some(MapType::Reflect)).unwrap();
        bump.set_link_type(Some(MapType::Finish)).unwrap();
        assert_eq!(bump.link_type(), Some(MapType::Finish));
        assert_eq!(bump.into_ref().value(), 0.9);
    }

    #[test]
    fn test_equality_of_unlinked_maps_uses_tolerance() {
        let mut left = MapCollection::new();
        left.add_map(MapType::Bump).set_value(0.5);
        let mut right = MapCollection::new();
        right.add_map(MapType::Bump).set_value(0.50005);

        assert_eq!(left.get(MapType::Bump), right.get(MapType::Bump));

        right.get_mut(MapType::Bump).unwrap().set_value(0.6);
        assert_ne!(left.get(MapType::Bump), right.get(MapType::Bump));
    }

    #[test]
    fn test_equality_ignores_value_of_non_value_maps() {
        let mut left = MapCollection::new();
        left.add_map(MapType::Pattern).set_value(0.1);
        let mut right = MapCollection::new();
        right.add_map(MapType::Pattern).set_value(0.9);

        assert_eq!(left.get(MapType::Pattern), right.get(MapType::Pattern));
    }

    #[test]
    fn test_equality_requires_same_type_and_link() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        maps.add_map(MapType::Finish);
        maps.add_map(MapType::Bump);
        assert_ne!(maps.get(MapType::Reflect), maps.get(MapType::Finish));

        let mut other = maps.clone();
        other
            .get_mut(MapType::Bump)
            .unwrap()
            .set_link_type(Some(MapType::Reflect))
            .unwrap();
        assert_ne!(maps.get(MapType::Bump), other.get(MapType::Bump));
    }

    #[test]
    fn test_restore_link_accepts_absent_target() {
        let mut maps = MapCollection::new();
        let mut bump = maps.add_map(MapType::Bump);
        assert_eq!(
            bump.set_link_type(Some(MapType::Reflect)),
            Err(MapLinkError::MissingTarget {
                source: MapType::Bump,
                target: MapType::Reflect
            })
        );
        assert_eq!(bump.restore_link_type(Some(MapType::Reflect)), Ok(()));
        assert_eq!(bump.link_type(), Some(MapType::Reflect));
        assert_eq!(
            bump.resolution(),
            LinkResolution::Dangling {
                missing: MapType::Reflect
            }
        );

        // Adding the target later repairs the link.
        maps.add_map(MapType::Reflect).set_value(0.6);
        assert_eq!(maps.get(MapType::Bump).unwrap().value(), 0.6);
    }

    #[test]
    fn test_restore_link_still_refuses_cycles() {
        let mut maps = MapCollection::new();
        maps.add_map(MapType::Reflect);
        maps.add_map(MapType::Bump)
            .set_link_type(Some(MapType::Reflect))
            .unwrap();

        let mut reflect = maps.get_mut(MapType::Reflect).unwrap();
        assert_eq!(
            reflect.restore_link_type(Some(MapType::Bump)),
            Err(MapLinkError::Cycle {
                source: MapType::Reflect,
                target: MapType::Bump
            })
        );
        assert_eq!(
            reflect.restore_link_type(Some(MapType::Reflect)),
            Err(MapLinkError::SelfLink(MapType::Reflect))
        );
        assert_eq!(reflect.link_type(), None);
    }
}
