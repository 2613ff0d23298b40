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

//! Labels of lights and shadows.

use std::convert::Infallible;
use std::fmt;

use super::Label;
use crate::renderer::{
    BasicShadow, DirectionalLight, Light, LightVisitor, ProjectiveLight, Shadow, ShadowVisitor,
    SphericalLight, VarianceShadow,
};
use crate::visit::{infallible, VisitResult, Visitor};

leaf_label! {
    /// The shadow technique of a light.
    ShadowLabel {
        /// Depth comparison against a depth texture.
        Basic => ("SB", 1, true),
        /// Variance shadows stored in a colour texture.
        Variance => ("SV", 1, false),
    }
}

struct ShadowLabeller;

impl Visitor for ShadowLabeller {
    type Output = ShadowLabel;
    type Error = Infallible;
}

impl ShadowVisitor for ShadowLabeller {
    fn basic(&mut self, _: &BasicShadow) -> VisitResult<Self> {
        Ok(ShadowLabel::Basic)
    }

    fn variance(&mut self, _: &VarianceShadow) -> VisitResult<Self> {
        Ok(ShadowLabel::Variance)
    }
}

impl ShadowLabel {
    /// Derives the label of a shadow technique.
    pub fn from_shadow(shadow: &Shadow) -> Self {
        infallible(shadow.accept(&mut ShadowLabeller))
    }
}

/// The kind of a light, and its shadow technique if it casts shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightLabel {
    /// A directional light.
    Directional,
    /// A spherical light.
    Spherical,
    /// A projective light without shadows.
    Projective,
    /// A projective light with shadows.
    ProjectiveShadowed(ShadowLabel),
}

struct LightLabeller;

impl Visitor for LightLabeller {
    type Output = LightLabel;
    type Error = Infallible;
}

impl LightVisitor for LightLabeller {
    fn directional(&mut self, _: &DirectionalLight) -> VisitResult<Self> {
        Ok(LightLabel::Directional)
    }

    fn spherical(&mut self, _: &SphericalLight) -> VisitResult<Self> {
        Ok(LightLabel::Spherical)
    }

    fn projective(&mut self, light: &ProjectiveLight) -> VisitResult<Self> {
        Ok(match &light.shadow {
            Some(shadow) => LightLabel::ProjectiveShadowed(ShadowLabel::from_shadow(shadow)),
            None => LightLabel::Projective,
        })
    }
}

impl LightLabel {
    /// Derives the label of a light.
    pub fn from_light(light: &Light) -> Self {
        infallible(light.accept(&mut LightLabeller))
    }

    /// Returns the shadow label of the light, if it casts shadows.
    pub fn shadow(&self) -> Option<ShadowLabel> {
        match self {
            LightLabel::ProjectiveShadowed(shadow) => Some(*shadow),
            _ => None,
        }
    }
}

impl fmt::Display for LightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightLabel::Directional => f.write_str("LD"),
            LightLabel::Spherical => f.write_str("LS"),
            LightLabel::Projective => f.write_str("LP"),
            LightLabel::ProjectiveShadowed(shadow) => write!(f, "LP{shadow}"),
        }
    }
}

impl Label for LightLabel {
    fn textures_required(&self) -> u32 {
        match self {
            LightLabel::Directional | LightLabel::Spherical => 0,
            // The projected texture.
            LightLabel::Projective => 1,
            LightLabel::ProjectiveShadowed(shadow) => 1 + shadow.textures_required(),
        }
    }

    fn requires_depth_textures(&self) -> bool {
        self.shadow()
            .is_some_and(|shadow| shadow.requires_depth_textures())
    }
}
