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

//! Defines light types for the classification layer.
//!
//! A [`Light`] pairs a [`LightId`] with the properties of one of the supported
//! light kinds. Lights are used as set members and map keys by the scene
//! builders, so equality and hashing only look at the identity: two values with
//! the same [`LightId`] are the same light.

use std::hash::{Hash, Hasher};

use super::projection::Projection;
use super::shadow::Shadow;
use crate::asset::Texture2D;
use crate::identity::LightId;
use crate::math::{Quaternion, Rgb, Vector3};
use crate::visit::{VisitResult, Visitor};

/// A light source infinitely far away, lighting the scene from one direction.
///
/// # Examples
///
/// ```
/// use umbra_core::renderer::DirectionalLight;
///
/// let sun = DirectionalLight {
///     direction: [-0.5, -1.0, -0.3],
///     color: [1.0, 0.95, 0.8],
///     intensity: 1.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The direction the light travels in.
    pub direction: Vector3,
    /// The colour of the light in linear RGB space.
    pub color: Rgb,
    /// The intensity multiplier of the light.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: [0.0, -1.0, 0.0],
            color: [1.0; 3],
            intensity: 1.0,
        }
    }
}

/// A light emitting in all directions from a point, with distance falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalLight {
    /// The world-space position of the light.
    pub position: Vector3,
    /// The colour of the light in linear RGB space.
    pub color: Rgb,
    /// The intensity multiplier of the light.
    pub intensity: f32,
    /// The distance beyond which the light has no effect.
    pub radius: f32,
    /// The exponent of the distance attenuation curve.
    pub falloff: f32,
}

impl Default for SphericalLight {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            color: [1.0; 3],
            intensity: 1.0,
            radius: 10.0,
            falloff: 1.0,
        }
    }
}

/// A light projecting a texture through a frustum, optionally casting shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectiveLight {
    /// The world-space position of the light.
    pub position: Vector3,
    /// The orientation of the light's frustum.
    pub orientation: Quaternion,
    /// The colour of the light in linear RGB space.
    pub color: Rgb,
    /// The intensity multiplier of the light.
    pub intensity: f32,
    /// The distance beyond which the light has no effect.
    pub range: f32,
    /// The exponent of the distance attenuation curve.
    pub falloff: f32,
    /// The frustum the light projects through.
    pub projection: Projection,
    /// The image projected by the light.
    pub texture: Texture2D,
    /// The shadow technique used by the light, if it casts shadows.
    pub shadow: Option<Shadow>,
}

/// The properties of every supported kind of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// A directional light.
    Directional(DirectionalLight),
    /// A spherical (point) light.
    Spherical(SphericalLight),
    /// A projective light.
    Projective(ProjectiveLight),
}

/// A light of the scene: an identity and the properties of its kind.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    id: LightId,
    kind: LightKind,
}

impl Light {
    /// Creates a light.
    pub fn new(id: LightId, kind: LightKind) -> Self {
        Self { id, kind }
    }

    /// Creates a directional light.
    pub fn directional(id: LightId, light: DirectionalLight) -> Self {
        Self::new(id, LightKind::Directional(light))
    }

    /// Creates a spherical light.
    pub fn spherical(id: LightId, light: SphericalLight) -> Self {
        Self::new(id, LightKind::Spherical(light))
    }

    /// Creates a projective light.
    pub fn projective(id: LightId, light: ProjectiveLight) -> Self {
        Self::new(id, LightKind::Projective(light))
    }

    /// Returns the identity of the light.
    pub fn id(&self) -> LightId {
        self.id
    }

    /// Returns the properties of the light.
    pub fn kind(&self) -> &LightKind {
        &self.kind
    }

    /// Returns the shadow technique of the light, if it casts shadows.
    pub fn shadow(&self) -> Option<&Shadow> {
        match &self.kind {
            LightKind::Projective(p) => p.shadow.as_ref(),
            LightKind::Directional(_) | LightKind::Spherical(_) => None,
        }
    }

    /// Dispatches to the visitor method matching this light's kind.
    pub fn accept<V: LightVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match &self.kind {
            LightKind::Directional(l) => visitor.directional(l),
            LightKind::Spherical(l) => visitor.spherical(l),
            LightKind::Projective(l) => visitor.projective(l),
        }
    }
}

impl PartialEq for Light {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Light {}

impl Hash for Light {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A visitor over the [`LightKind`] variants.
pub trait LightVisitor: Visitor {
    /// Visits a directional light.
    fn directional(&mut self, light: &DirectionalLight) -> VisitResult<Self>;

    /// Visits a spherical light.
    fn spherical(&mut self, light: &SphericalLight) -> VisitResult<Self>;

    /// Visits a projective light.
    fn projective(&mut self, light: &ProjectiveLight) -> VisitResult<Self>;
}
