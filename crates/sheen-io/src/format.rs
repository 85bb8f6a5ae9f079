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

//! Defines the contract shared by every on-disk encoding of a map collection.
//!
//! The core of this module is the [`MapsFormat`] trait. Each implementation
//! turns a [`MapsDefinition`] into bytes and back; capturing and applying the
//! definition is shared, so every format gets the same two-pass import.

use sheen_core::material::MapCollection;

use crate::definition::{self, ImportReport, MapsDefinition};
use crate::{DecodeError, EncodeError};

/// An encoding of a [`MapsDefinition`].
pub trait MapsFormat: Send + Sync {
    /// Returns the unique, versioned identifier of this format.
    ///
    /// Example: `"SHEEN_MAPS_RON_V1"`.
    fn format_id(&self) -> &'static str;

    /// Encodes a definition into a byte payload.
    fn encode_definition(&self, definition: &MapsDefinition) -> Result<Vec<u8>, EncodeError>;

    /// Decodes a byte payload into a definition, without version checks.
    fn decode_definition(&self, data: &[u8]) -> Result<MapsDefinition, DecodeError>;

    /// Encodes every map of `collection`.
    fn encode(&self, collection: &MapCollection) -> Result<Vec<u8>, EncodeError> {
        self.encode_definition(&definition::capture(collection))
    }

    /// Decodes `data` and applies it to `collection`.
    ///
    /// The collection is left untouched if decoding or the version check fails.
    fn decode(&self, data: &[u8], collection: &mut MapCollection) -> Result<ImportReport, DecodeError> {
        let definition = definition::upgrade_definition(self.decode_definition(data)?)?;
        log::debug!(
            "Decoded {} map(s) with {}.",
            definition.maps.len(),
            self.format_id()
        );
        Ok(definition::apply(&definition, collection))
    }
}
