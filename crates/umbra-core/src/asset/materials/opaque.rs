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

//! Opaque materials.

use super::properties::Surface;
use crate::identity::MaterialId;
use crate::visit::{VisitResult, Visitor};

/// A fully opaque surface.
///
/// # Examples
///
/// ```
/// use umbra_core::asset::{Albedo, OpaqueRegular, Specular, Surface};
///
/// let stone = OpaqueRegular::new(Surface {
///     albedo: Albedo::untextured([0.5, 0.5, 0.5, 1.0]),
///     specular: Specular::Constant { color: [0.2; 3], exponent: 16.0 },
///     ..Default::default()
/// });
///
/// // A new version of the same logical material.
/// let wet_stone = OpaqueRegular {
///     surface: Surface {
///         specular: Specular::Constant { color: [0.8; 3], exponent: 64.0 },
///         ..stone.surface
///     },
///     ..stone
/// };
/// assert_eq!(stone.id, wet_stone.id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpaqueRegular {
    /// The identity of the logical material.
    pub id: MaterialId,
    /// The surface properties.
    pub surface: Surface,
}

impl OpaqueRegular {
    /// Creates a material with a fresh identity from the global allocator.
    pub fn new(surface: Surface) -> Self {
        Self::with_id(MaterialId::fresh(), surface)
    }

    /// Creates a material with an explicit identity.
    pub fn with_id(id: MaterialId, surface: Surface) -> Self {
        Self { id, surface }
    }
}

/// An opaque surface whose fragments are discarded where the albedo alpha is
/// below a threshold (foliage, fences).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpaqueAlphaDepth {
    /// The identity of the logical material.
    pub id: MaterialId,
    /// The surface properties.
    pub surface: Surface,
    /// Fragments with an alpha below this value are discarded.
    pub alpha_threshold: f32,
}

impl OpaqueAlphaDepth {
    /// Creates a material with a fresh identity from the global allocator.
    pub fn new(surface: Surface, alpha_threshold: f32) -> Self {
        Self::with_id(MaterialId::fresh(), surface, alpha_threshold)
    }

    /// Creates a material with an explicit identity.
    pub fn with_id(id: MaterialId, surface: Surface, alpha_threshold: f32) -> Self {
        Self {
            id,
            surface,
            alpha_threshold,
        }
    }
}

/// A material for opaque instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpaqueMaterial {
    /// A fully opaque surface.
    Regular(OpaqueRegular),
    /// An alpha-tested surface.
    AlphaDepth(OpaqueAlphaDepth),
}

impl OpaqueMaterial {
    /// Returns the identity of the logical material.
    pub fn id(&self) -> MaterialId {
        match self {
            OpaqueMaterial::Regular(m) => m.id,
            OpaqueMaterial::AlphaDepth(m) => m.id,
        }
    }

    /// Returns the surface properties.
    pub fn surface(&self) -> &Surface {
        match self {
            OpaqueMaterial::Regular(m) => &m.surface,
            OpaqueMaterial::AlphaDepth(m) => &m.surface,
        }
    }

    /// Returns `true` if no property of the material is NaN or infinite.
    ///
    /// Such a material has no well-defined version and is rejected by scene
    /// assembly.
    pub fn is_finite(&self) -> bool {
        match self {
            OpaqueMaterial::Regular(m) => m.surface.is_finite(),
            OpaqueMaterial::AlphaDepth(m) => m.surface.is_finite() && m.alpha_threshold.is_finite(),
        }
    }

    /// Dispatches to the visitor method matching this material's variant.
    pub fn accept<V: OpaqueMaterialVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            OpaqueMaterial::Regular(m) => visitor.regular(m),
            OpaqueMaterial::AlphaDepth(m) => visitor.alpha_depth(m),
        }
    }
}

impl From<OpaqueRegular> for OpaqueMaterial {
    fn from(material: OpaqueRegular) -> Self {
        OpaqueMaterial::Regular(material)
    }
}

impl From<OpaqueAlphaDepth> for OpaqueMaterial {
    fn from(material: OpaqueAlphaDepth) -> Self {
        OpaqueMaterial::AlphaDepth(material)
    }
}

/// A visitor over the [`OpaqueMaterial`] variants.
pub trait OpaqueMaterialVisitor: Visitor {
    /// Visits a fully opaque material.
    fn regular(&mut self, material: &OpaqueRegular) -> VisitResult<Self>;

    /// Visits an alpha-tested material.
    fn alpha_depth(&mut self, material: &OpaqueAlphaDepth) -> VisitResult<Self>;
}
