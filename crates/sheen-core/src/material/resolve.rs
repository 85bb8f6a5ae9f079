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

//! Link resolution: finding the map whose settings a linked map mirrors.
//!
//! Links are transitive. If `GlowColor` links to `SpecularColor` and
//! `SpecularColor` links to `Pattern`, every aliasable property of
//! `GlowColor` is read from and written to `Pattern`, the *terminal* of the
//! chain.
//!
//! Cycles are refused when a link is created ([`MapCollection::validate_link`]).
//! Traversal is still bounded by [`MapGraphConfig::max_link_hops`], so a
//! cycle introduced by a raw [`MaterialMap::copy_from`] degrades to a
//! local-storage fallback instead of a hang.
//!
//! [`MapGraphConfig::max_link_hops`]: super::MapGraphConfig::max_link_hops

use super::{MapCollection, MapLinkError, MapType, MaterialMap};

/// Tolerance used for every float when two maps are compared.
pub const MAP_COMPARISON_TOLERANCE: f32 = 1e-4;

/// The outcome of following a map's link chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkResolution {
    /// The chain ends at this map. An unlinked map is its own terminal.
    Terminal(MapType),
    /// A map along the chain links to a channel that is not in the collection.
    Dangling {
        /// The first absent channel encountered.
        missing: MapType,
    },
    /// The chain did not end within the configured number of hops.
    HopLimitExceeded {
        /// The limit that was reached.
        limit: usize,
    },
}

impl LinkResolution {
    /// Returns the terminal channel when resolution succeeded.
    pub fn terminal(self) -> Option<MapType> {
        match self {
            LinkResolution::Terminal(map_type) => Some(map_type),
            _ => None,
        }
    }

    /// Returns `true` when resolution reached a terminal map.
    pub fn is_resolved(self) -> bool {
        matches!(self, LinkResolution::Terminal(_))
    }
}

impl MapCollection {
    /// Resolves the link chain starting at `map_type`.
    ///
    /// Returns `None` if the collection has no such map.
    pub fn resolve(&self, map_type: MapType) -> Option<LinkResolution> {
        self.node(map_type).map(|map| self.resolve_map(map))
    }

    /// Follows `map`'s links through this collection.
    pub(crate) fn resolve_map(&self, map: &MaterialMap) -> LinkResolution {
        let Some(mut next) = map.link_type else {
            return LinkResolution::Terminal(map.map_type);
        };

        let limit = self.config().max_link_hops;
        let mut hops = 0;
        loop {
            hops += 1;
            if hops > limit {
                log::warn!(
                    "Link chain from {} exceeds {limit} hops; falling back to local settings.",
                    map.map_type
                );
                return LinkResolution::HopLimitExceeded { limit };
            }

            let Some(current) = self.node(next) else {
                return LinkResolution::Dangling { missing: next };
            };
            match current.link_type {
                Some(link) => next = link,
                None => return LinkResolution::Terminal(current.map_type),
            }
        }
    }

    /// Returns the node whose aliasable settings `map` uses.
    ///
    /// This is the terminal when resolution succeeds and `map` itself otherwise.
    pub(crate) fn effective_map<'a>(&'a self, map: &'a MaterialMap) -> &'a MaterialMap {
        match self.resolve_map(map) {
            LinkResolution::Terminal(terminal) => self.node(terminal).unwrap_or(map),
            _ => map,
        }
    }

    /// Lists the maps visited from `map_type` along its links, starting with itself.
    ///
    /// Stops at the terminal, before an absent map, or after the hop limit.
    /// Returns an empty list if `map_type` is not in the collection.
    pub fn link_chain(&self, map_type: MapType) -> Vec<MapType> {
        let mut chain = Vec::new();
        let mut current = self.node(map_type);
        while let Some(map) = current {
            chain.push(map.map_type);
            if chain.len() > self.config().max_link_hops {
                break;
            }
            current = map.link_type.and_then(|next| self.node(next));
        }
        chain
    }

    /// Checks whether `source` may link to `target` without forming a cycle.
    ///
    /// Walks the chain that starts at `target`. The link is refused if the
    /// walk reaches `source`, if `target` is absent, or if the resulting chain
    /// from `source` would be longer than the hop limit. A chain that ends at
    /// an absent map is acceptable.
    ///
    /// Hops are counted from `source`, as [`resolve`](Self::resolve) counts
    /// them, so an accepted link never resolves to
    /// [`LinkResolution::HopLimitExceeded`] at the time it is made.
    pub fn validate_link(&self, source: MapType, target: MapType) -> Result<(), MapLinkError> {
        if source == target {
            return Err(MapLinkError::SelfLink(source));
        }

        let mut current = self
            .node(target)
            .ok_or(MapLinkError::MissingTarget { source, target })?;
        let limit = self.config().max_link_hops;
        // source -> target
        let mut hops = 1;
        if hops > limit {
            return Err(MapLinkError::ChainTooLong { source, limit });
        }
        loop {
            if current.map_type == source {
                return Err(MapLinkError::Cycle { source, target });
            }
            let Some(next) = current.link_type else {
                return Ok(());
            };
            hops += 1;
            if hops > limit {
                return Err(MapLinkError::ChainTooLong { source, limit });
            }
            match self.node(next) {
                Some(map) => current = map,
                None => return Ok(()),
            }
        }
    }
}
