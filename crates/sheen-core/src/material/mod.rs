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

//! Material maps and the link graph between them.
//!
//! A material owns one [`MapCollection`] holding at most one [`MaterialMap`]
//! per [`MapType`]. Any map may *link* to another map of the same collection;
//! a linked map then reads and writes its value, projection transform and
//! layer stack through the end of its link chain. See [`LinkResolution`] for
//! how chains are followed and [`MapRef`]'s `PartialEq` for how linked maps
//! compare.

mod collection;
mod config;
mod error;
mod layer;
mod map;
mod map_type;
mod resolve;
mod view;

pub use collection::*;
pub use config::*;
pub use error::*;
pub use layer::*;
pub use map::*;
pub use map_type::*;
pub use resolve::*;
pub use view::*;
