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

//! A compact binary encoding based on bincode.

use crate::definition::MapsDefinition;
use crate::format::MapsFormat;
use crate::{DecodeError, EncodeError};

/// Encodes map collections with `bincode`'s standard configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeMapsFormat;

impl BincodeMapsFormat {
    /// Creates a new bincode format.
    pub fn new() -> Self {
        Self
    }
}

impl MapsFormat for BincodeMapsFormat {
    fn format_id(&self) -> &'static str {
        "SHEEN_MAPS_BIN_V1"
    }

    fn encode_definition(&self, definition: &MapsDefinition) -> Result<Vec<u8>, EncodeError> {
        bincode::serde::encode_to_vec(definition, bincode::config::standard())
            .map_err(|e| EncodeError::ProcessingFailed(e.to_string()))
    }

    fn decode_definition(&self, data: &[u8]) -> Result<MapsDefinition, DecodeError> {
        bincode::serde::decode_from_slice(data, bincode::config::standard())
            .map(|(definition, _len)| definition)
            .map_err(|e| DecodeError::InvalidFormat(e.to_string()))
    }
}
