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

//! Error types for link management and layer stacks.

use super::MapType;
use std::fmt;

/// A rejected attempt to link one map to another.
///
/// Every variant leaves the collection exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLinkError {
    /// The link target has no map in the collection.
    MissingTarget {
        /// The map that was being linked.
        source: MapType,
        /// The absent target.
        target: MapType,
    },
    /// A map cannot link to itself.
    SelfLink(MapType),
    /// Following the target's chain leads back to the source.
    Cycle {
        /// The map that was being linked.
        source: MapType,
        /// The requested target whose chain reaches `source`.
        target: MapType,
    },
    /// The target's chain is longer than the configured hop limit.
    ChainTooLong {
        /// The map that was being linked.
        source: MapType,
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for MapLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapLinkError::MissingTarget { source, target } => {
                write!(f, "Cannot link {source} to {target}: no {target} map exists")
            }
            MapLinkError::SelfLink(map_type) => {
                write!(f, "Cannot link {map_type} to itself")
            }
            MapLinkError::Cycle { source, target } => {
                write!(
                    f,
                    "Cannot link {source} to {target}: the chain from {target} leads back to {source}"
                )
            }
            MapLinkError::ChainTooLong { source, limit } => {
                write!(
                    f,
                    "Cannot link {source}: target chain exceeds the limit of {limit} hops"
                )
            }
        }
    }
}

impl std::error::Error for MapLinkError {}

/// An invalid edit of a [`LayerStack`](super::LayerStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerStackError {
    /// The stack must keep at least one layer.
    LastLayer,
    /// The index does not address a layer.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of layers in the stack.
        len: usize,
    },
}

impl fmt::Display for LayerStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerStackError::LastLayer => write!(f, "Cannot delete the last layer of a stack"),
            LayerStackError::IndexOutOfRange { index, len } => {
                write!(f, "Layer index {index} out of range for a stack of {len}")
            }
        }
    }
}

impl std::error::Error for LayerStackError {}
