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

//! Defines the material types of the classification layer.
//!
//! Materials come in two closed families: [`OpaqueMaterial`] for surfaces
//! that are drawn in capability-driven order and may be lit by light groups,
//! and [`TranslucentMaterial`] for surfaces drawn in an order chosen by the
//! caller.
//!
//! Every material carries a [`MaterialId`](crate::MaterialId). Copies of a
//! material that keep the identity but change a property are *versions* of the
//! same logical material; a scene may contain only one version of each.

mod opaque;
mod properties;
mod translucent;

pub use opaque::*;
pub use properties::*;
pub use translucent::*;
