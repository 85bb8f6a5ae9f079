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

//! Error types for encoding and decoding map collections.

use thiserror::Error;

/// An error that can occur while encoding a map collection.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The serializer rejected the data.
    #[error("Serialization failed: {0}")]
    ProcessingFailed(String),
}

/// An error that can occur while decoding a map collection.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The data is corrupted or does not match the expected format.
    #[error("Deserialization failed: Invalid format - {0}")]
    InvalidFormat(String),
    /// The data was written by a version this build cannot read.
    #[error("Unsupported maps definition version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// The version found in the data.
        found: u32,
        /// The version this build reads.
        supported: u32,
    },
}
