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

//! # Umbra Core
//!
//! Foundational crate containing the types, pure functions and interface
//! contracts of the scene classification layer.
//!
//! - [`identity`] issues unique, monotonically increasing identities.
//! - [`renderer`] describes lights, shadows, transforms, projections and the
//!   hardware [`Capabilities`](renderer::Capabilities) of the current session.
//! - [`asset`] holds read-only handles to meshes and textures, and material
//!   definitions.
//! - [`label`] derives the shader-variant labels of materials and lights.
//! - [`scene`] defines the renderable instances and the camera.
//! - [`visit`] is the dispatch protocol used to branch over every closed
//!   variant family without runtime type inspection.

#![warn(missing_docs)]

pub mod asset;
pub mod error;
pub mod identity;
pub mod label;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod visit;

pub use error::{ConstraintError, DispatchError, RenderError};
pub use identity::{IdAllocator, Identity, InstanceId, LightId, MaterialId, MeshId, TextureId};
pub use label::Label;
pub use visit::{VisitResult, Visitor};
