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

//! Shadow techniques and the shadow maps they render into.
//!
//! A [`Shadow`] is attached to a light that casts shadows. It carries the
//! [`ShadowMapDescription`] of the map it needs, which the renderer uses to
//! allocate (and share) shadow map textures.

use super::capabilities::DepthPrecision;
use crate::visit::{VisitResult, Visitor};

/// The filter used when sampling a shadow map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowFilter {
    /// Nearest-neighbour sampling.
    Nearest,
    /// Bilinear sampling.
    #[default]
    Linear,
}

/// Describes a depth-only shadow map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicShadowMapDescription {
    /// The map is `2^size_exponent` texels wide and high.
    pub size_exponent: u32,
    /// The precision of the depth texture.
    pub precision: DepthPrecision,
    /// The sampling filter.
    pub filter: ShadowFilter,
}

/// Describes a variance shadow map (depth moments in a colour texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarianceShadowMapDescription {
    /// The map is `2^size_exponent` texels wide and high.
    pub size_exponent: u32,
    /// The precision of the depth attachment used while rendering the moments.
    pub precision: DepthPrecision,
    /// The sampling filter.
    pub filter: ShadowFilter,
}

/// The shadow map a shadow technique renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowMapDescription {
    /// A depth-only map.
    Basic(BasicShadowMapDescription),
    /// A variance map.
    Variance(VarianceShadowMapDescription),
}

impl ShadowMapDescription {
    /// Returns the width (and height) of the map in texels, or `None` if
    /// `2^size_exponent` does not fit in a `u32`.
    pub fn size(&self) -> Option<u32> {
        let exponent = match self {
            ShadowMapDescription::Basic(d) => d.size_exponent,
            ShadowMapDescription::Variance(d) => d.size_exponent,
        };
        1u32.checked_shl(exponent)
    }

    /// Dispatches to the visitor method matching this description's variant.
    pub fn accept<V: ShadowMapDescriptionVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            ShadowMapDescription::Basic(d) => visitor.basic(d),
            ShadowMapDescription::Variance(d) => visitor.variance(d),
        }
    }
}

/// A visitor over the [`ShadowMapDescription`] variants.
pub trait ShadowMapDescriptionVisitor: Visitor {
    /// Visits a depth-only map description.
    fn basic(&mut self, description: &BasicShadowMapDescription) -> VisitResult<Self>;

    /// Visits a variance map description.
    fn variance(&mut self, description: &VarianceShadowMapDescription) -> VisitResult<Self>;
}

/// Depth-comparison shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicShadow {
    /// The map the shadow renders into.
    pub description: BasicShadowMapDescription,
    /// The bias added to depths before comparison.
    pub depth_bias: f32,
    /// The light attenuation applied to fully shadowed fragments.
    pub factor_minimum: f32,
}

/// Variance shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceShadow {
    /// The map the shadow renders into.
    pub description: VarianceShadowMapDescription,
    /// The lower bound applied to the computed variance.
    pub minimum_variance: f32,
    /// The amount of light bleeding removed from penumbrae.
    pub light_bleed_reduction: f32,
    /// The light attenuation applied to fully shadowed fragments.
    pub factor_minimum: f32,
}

/// A shadow technique attached to a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shadow {
    /// Depth-comparison shadows.
    Basic(BasicShadow),
    /// Variance shadows.
    Variance(VarianceShadow),
}

impl Shadow {
    /// Returns the description of the map this shadow renders into.
    pub fn description(&self) -> ShadowMapDescription {
        match self {
            Shadow::Basic(s) => ShadowMapDescription::Basic(s.description),
            Shadow::Variance(s) => ShadowMapDescription::Variance(s.description),
        }
    }

    /// Dispatches to the visitor method matching this shadow's variant.
    pub fn accept<V: ShadowVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            Shadow::Basic(s) => visitor.basic(s),
            Shadow::Variance(s) => visitor.variance(s),
        }
    }
}

/// A visitor over the [`Shadow`] variants.
pub trait ShadowVisitor: Visitor {
    /// Visits a depth-comparison shadow.
    fn basic(&mut self, shadow: &BasicShadow) -> VisitResult<Self>;

    /// Visits a variance shadow.
    fn variance(&mut self, shadow: &VarianceShadow) -> VisitResult<Self>;
}
