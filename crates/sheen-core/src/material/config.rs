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

//! Tunables for link traversal.

use serde::Deserialize;

use super::MapType;

/// Configuration for a [`MapCollection`](super::MapCollection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapGraphConfig {
    /// Maximum number of links followed while resolving or validating a chain.
    ///
    /// An acyclic chain visits each channel at most once, so the default of
    /// [`MapType::COUNT`] is never reached by a well-formed collection.
    /// Reaching it means the graph contains a cycle, and resolution falls back
    /// to local storage instead of looping.
    pub max_link_hops: usize,
}

impl Default for MapGraphConfig {
    fn default() -> Self {
        Self {
            max_link_hops: MapType::COUNT,
        }
    }
}
