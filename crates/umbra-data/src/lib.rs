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

//! # Umbra Data
//!
//! Stateful scene assembly on top of the contracts of `umbra-core`.
//!
//! - [`scene`] builds light groups and the finished, immutable [`Scene`].
//! - [`shadow`] assembles the ordered shadow casters of each light.
//!
//! Builders are single-pass accumulators used through `&mut` from one thread.

#![warn(missing_docs)]

mod lights;
pub mod scene;
pub mod shadow;

#[cfg(test)]
mod test_support;

pub use scene::{LightGroup, Scene, SceneBuilder};
pub use shadow::{ShadowSceneBuilder, ShadowSceneSnapshot};
