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

//! Persistence for material map collections.
//!
//! A collection is captured into a [`MapsDefinition`], a stable intermediate
//! representation, which a [`MapsFormat`] turns into bytes. Two formats are
//! provided: [`RonMapsFormat`] for hand-editable files and
//! [`BincodeMapsFormat`] for compact ones. The [`file`] helpers pick a format
//! from the file extension.

#![warn(missing_docs)]

mod bincode_format;
mod definition;
mod error;
pub mod file;
mod format;
mod ron_format;

pub use bincode_format::BincodeMapsFormat;
pub use definition::*;
pub use error::*;
pub use format::MapsFormat;
pub use ron_format::RonMapsFormat;
