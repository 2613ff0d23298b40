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

//! Translucent materials.

use super::properties::{Alpha, Normal, Refractive, Specular, Surface};
use crate::identity::MaterialId;
use crate::math::Rgba;
use crate::visit::{VisitResult, Visitor};

/// A translucent surface blended over what is behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentRegular {
    /// The identity of the logical material.
    pub id: MaterialId,
    /// The surface properties.
    pub surface: Surface,
    /// The opacity of the surface.
    pub alpha: Alpha,
}

impl TranslucentRegular {
    /// Creates a material with a fresh identity from the global allocator.
    pub fn new(surface: Surface, alpha: Alpha) -> Self {
        Self::with_id(MaterialId::fresh(), surface, alpha)
    }

    /// Creates a material with an explicit identity.
    pub fn with_id(id: MaterialId, surface: Surface, alpha: Alpha) -> Self {
        Self { id, surface, alpha }
    }
}

/// A surface that tints and distorts the scene behind it (glass, water).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentRefractive {
    /// The identity of the logical material.
    pub id: MaterialId,
    /// The tint applied to the refracted scene.
    pub color: Rgba,
    /// The normals used to compute the distortion.
    pub normal: Normal,
    /// The refraction parameters.
    pub refractive: Refractive,
}

impl TranslucentRefractive {
    /// Creates a material with a fresh identity from the global allocator.
    pub fn new(color: Rgba, normal: Normal, refractive: Refractive) -> Self {
        Self::with_id(MaterialId::fresh(), color, normal, refractive)
    }

    /// Creates a material with an explicit identity.
    pub fn with_id(id: MaterialId, color: Rgba, normal: Normal, refractive: Refractive) -> Self {
        Self {
            id,
            color,
            normal,
            refractive,
        }
    }
}

/// A surface that only adds specular highlights over what is behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentSpecularOnly {
    /// The identity of the logical material.
    pub id: MaterialId,
    /// The normals used for the highlights.
    pub normal: Normal,
    /// The highlights.
    pub specular: Specular,
}

impl TranslucentSpecularOnly {
    /// Creates a material with a fresh identity from the global allocator.
    pub fn new(normal: Normal, specular: Specular) -> Self {
        Self::with_id(MaterialId::fresh(), normal, specular)
    }

    /// Creates a material with an explicit identity.
    pub fn with_id(id: MaterialId, normal: Normal, specular: Specular) -> Self {
        Self {
            id,
            normal,
            specular,
        }
    }
}

/// A material for translucent instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranslucentMaterial {
    /// A blended surface.
    Regular(TranslucentRegular),
    /// A refracting surface.
    Refractive(TranslucentRefractive),
    /// A highlights-only surface.
    SpecularOnly(TranslucentSpecularOnly),
}

impl TranslucentMaterial {
    /// Returns the identity of the logical material.
    pub fn id(&self) -> MaterialId {
        match self {
            TranslucentMaterial::Regular(m) => m.id,
            TranslucentMaterial::Refractive(m) => m.id,
            TranslucentMaterial::SpecularOnly(m) => m.id,
        }
    }

    /// Returns `true` if no property of the material is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            TranslucentMaterial::Regular(m) => m.surface.is_finite() && m.alpha.is_finite(),
            TranslucentMaterial::Refractive(m) => {
                m.color.iter().all(|c| c.is_finite()) && m.refractive.is_finite()
            }
            TranslucentMaterial::SpecularOnly(m) => m.specular.is_finite(),
        }
    }

    /// Dispatches to the visitor method matching this material's variant.
    pub fn accept<V: TranslucentMaterialVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            TranslucentMaterial::Regular(m) => visitor.regular(m),
            TranslucentMaterial::Refractive(m) => visitor.refractive(m),
            TranslucentMaterial::SpecularOnly(m) => visitor.specular_only(m),
        }
    }
}

impl From<TranslucentRegular> for TranslucentMaterial {
    fn from(material: TranslucentRegular) -> Self {
        TranslucentMaterial::Regular(material)
    }
}

impl From<TranslucentRefractive> for TranslucentMaterial {
    fn from(material: TranslucentRefractive) -> Self {
        TranslucentMaterial::Refractive(material)
    }
}

impl From<TranslucentSpecularOnly> for TranslucentMaterial {
    fn from(material: TranslucentSpecularOnly) -> Self {
        TranslucentMaterial::SpecularOnly(material)
    }
}

/// A visitor over the [`TranslucentMaterial`] variants.
pub trait TranslucentMaterialVisitor: Visitor {
    /// Visits a blended material.
    fn regular(&mut self, material: &TranslucentRegular) -> VisitResult<Self>;

    /// Visits a refracting material.
    fn refractive(&mut self, material: &TranslucentRefractive) -> VisitResult<Self>;

    /// Visits a highlights-only material.
    fn specular_only(&mut self, material: &TranslucentSpecularOnly) -> VisitResult<Self>;
}
