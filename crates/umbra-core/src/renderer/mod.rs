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

//! Backend-agnostic rendering contracts consumed by the classification layer.
//!
//! This module describes what the hardware can do ([`Capabilities`]), the
//! settings forwarded to the capability probe ([`RenderSettings`]), and the
//! closed variant families the scene is made of: lights, shadows, shadow map
//! descriptions, transforms and projections.

pub mod capabilities;
pub mod light;
pub mod projection;
pub mod settings;
pub mod shadow;
pub mod transform;

pub use self::capabilities::{Capabilities, CapabilityProbe, DepthPrecision, StaticCapabilityProbe};
pub use self::light::{
    DirectionalLight, Light, LightKind, LightVisitor, ProjectiveLight, SphericalLight,
};
pub use self::projection::{Frustum, Projection};
pub use self::settings::{RenderSettings, SettingsError};
pub use self::shadow::{
    BasicShadow, BasicShadowMapDescription, Shadow, ShadowFilter, ShadowMapDescription,
    ShadowMapDescriptionVisitor, ShadowVisitor, VarianceShadow, VarianceShadowMapDescription,
};
pub use self::transform::{Transform, TransformMatrix, TransformTos, TransformVisitor};
