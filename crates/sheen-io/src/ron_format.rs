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

//! A human-readable encoding based on RON.

use crate::definition::MapsDefinition;
use crate::format::MapsFormat;
use crate::{DecodeError, EncodeError};

/// Encodes map collections as pretty-printed RON.
///
/// This is the format meant for hand editing and version control.
#[derive(Debug, Default, Clone, Copy)]
pub struct RonMapsFormat;

impl RonMapsFormat {
    /// Creates a new RON format.
    pub fn new() -> Self {
        Self
    }
}

impl MapsFormat for RonMapsFormat {
    fn format_id(&self) -> &'static str {
        "SHEEN_MAPS_RON_V1"
    }

    fn encode_definition(&self, definition: &MapsDefinition) -> Result<Vec<u8>, EncodeError> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(definition, pretty)
            .map(String::into_bytes)
            .map_err(|e| EncodeError::ProcessingFailed(e.to_string()))
    }

    fn decode_definition(&self, data: &[u8]) -> Result<MapsDefinition, DecodeError> {
        ron::de::from_bytes(data).map_err(|e| DecodeError::InvalidFormat(e.to_string()))
    }
}
