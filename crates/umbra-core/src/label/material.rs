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

//! Labels of single material properties.

use std::convert::Infallible;

use crate::asset::{
    Albedo, Alpha, Emissive, Environment, EnvironmentMix, Normal, OpaqueAlphaDepth,
    OpaqueMaterial, OpaqueMaterialVisitor, OpaqueRegular, Refractive, Specular,
};
use crate::visit::{infallible, VisitResult, Visitor};

leaf_label! {
    /// How the base colour is sampled.
    AlbedoLabel {
        /// A plain colour.
        Untextured => ("BU", 0, false),
        /// A colour mixed with a texture.
        Textured => ("BT", 1, false),
    }
}

impl AlbedoLabel {
    /// Derives the label of an albedo.
    ///
    /// A texture mixed in with a factor of zero contributes nothing and is not
    /// bound.
    pub fn from_albedo(albedo: &Albedo) -> Self {
        match albedo.texture {
            Some(_) if albedo.mix > 0.0 => AlbedoLabel::Textured,
            _ => AlbedoLabel::Untextured,
        }
    }
}

leaf_label! {
    /// How emitted light is computed.
    EmissiveLabel {
        /// No emission.
        None => ("", 0, false),
        /// Uniform emission.
        Constant => ("EC", 0, false),
        /// Emission read from a texture.
        Mapped => ("EM", 1, false),
    }
}

impl EmissiveLabel {
    /// Derives the label of an emissive property.
    pub fn from_emissive(emissive: &Emissive) -> Self {
        match emissive {
            Emissive::None => EmissiveLabel::None,
            Emissive::Constant { emission } if *emission == 0.0 => EmissiveLabel::None,
            Emissive::Constant { .. } => EmissiveLabel::Constant,
            Emissive::Mapped { .. } => EmissiveLabel::Mapped,
        }
    }
}

leaf_label! {
    /// How environment reflections are mixed in.
    EnvironmentLabel {
        /// No reflections.
        None => ("", 0, false),
        /// A fixed mix factor.
        MixConstant => ("EMC", 1, false),
        /// A view-angle dependent mix factor.
        MixDotProduct => ("EMD", 1, false),
        /// A mix factor read from a texture.
        MixMapped => ("EMM", 2, false),
    }
}

impl EnvironmentLabel {
    /// Derives the label of an optional environment property.
    pub fn from_environment(environment: Option<&Environment>) -> Self {
        match environment.map(|e| &e.mix) {
            None => EnvironmentLabel::None,
            Some(EnvironmentMix::Constant { .. }) => EnvironmentLabel::MixConstant,
            Some(EnvironmentMix::DotProduct { .. }) => EnvironmentLabel::MixDotProduct,
            Some(EnvironmentMix::Mapped { .. }) => EnvironmentLabel::MixMapped,
        }
    }
}

leaf_label! {
    /// Where normals come from.
    NormalLabel {
        /// Vertex normals.
        Vertex => ("NV", 0, false),
        /// A normal map.
        Mapped => ("NM", 1, false),
    }
}

impl NormalLabel {
    /// Derives the label of a normal property.
    pub fn from_normal(normal: &Normal) -> Self {
        match normal {
            Normal::Vertex => NormalLabel::Vertex,
            Normal::Mapped { .. } => NormalLabel::Mapped,
        }
    }
}

leaf_label! {
    /// How specular highlights are computed.
    SpecularLabel {
        /// No highlights.
        None => ("", 0, false),
        /// A uniform highlight colour.
        Constant => ("SC", 0, false),
        /// A highlight colour read from a texture.
        Mapped => ("SM", 1, false),
    }
}

impl SpecularLabel {
    /// Derives the label of a specular property.
    ///
    /// A black, unmapped highlight is dropped entirely.
    pub fn from_specular(specular: &Specular) -> Self {
        match specular {
            Specular::None => SpecularLabel::None,
            Specular::Constant { color, .. } if *color == [0.0; 3] => SpecularLabel::None,
            Specular::Constant { .. } => SpecularLabel::Constant,
            Specular::Mapped { .. } => SpecularLabel::Mapped,
        }
    }
}

leaf_label! {
    /// How an opaque material writes depth, both in the depth pre-pass and
    /// into shadow maps.
    DepthLabel {
        /// Every fragment is written.
        Constant => ("DC", 0, false),
        /// Fragments are tested against the uniform albedo alpha.
        Uniform => ("DU", 0, false),
        /// Fragments are tested against the albedo texture alpha.
        Mapped => ("DM", 1, false),
    }
}

struct DepthLabeller;

impl Visitor for DepthLabeller {
    type Output = DepthLabel;
    type Error = Infallible;
}

impl OpaqueMaterialVisitor for DepthLabeller {
    fn regular(&mut self, _: &OpaqueRegular) -> VisitResult<Self> {
        Ok(DepthLabel::Constant)
    }

    fn alpha_depth(&mut self, material: &OpaqueAlphaDepth) -> VisitResult<Self> {
        Ok(match AlbedoLabel::from_albedo(&material.surface.albedo) {
            AlbedoLabel::Textured => DepthLabel::Mapped,
            AlbedoLabel::Untextured => DepthLabel::Uniform,
        })
    }
}

impl DepthLabel {
    /// Derives the depth label of an opaque material.
    pub fn from_material(material: &OpaqueMaterial) -> Self {
        infallible(material.accept(&mut DepthLabeller))
    }
}

leaf_label! {
    /// How refraction is computed.
    RefractiveLabel {
        /// Only geometry behind the surface is refracted. Reads the scene
        /// colour and the scene depth.
        Masked => ("TRM", 2, true),
        /// Everything is refracted. Reads the scene colour.
        Unmasked => ("TR", 1, false),
    }
}

impl RefractiveLabel {
    /// Derives the label of a refractive property.
    pub fn from_refractive(refractive: &Refractive) -> Self {
        if refractive.masked {
            RefractiveLabel::Masked
        } else {
            RefractiveLabel::Unmasked
        }
    }
}

leaf_label! {
    /// How translucent opacity is computed.
    AlphaLabel {
        /// A fixed opacity.
        Constant => ("AC", 0, false),
        /// An opacity faded against the scene depth.
        DepthFaded => ("AD", 1, true),
    }
}

impl AlphaLabel {
    /// Derives the label of an alpha property.
    pub fn from_alpha(alpha: &Alpha) -> Self {
        match alpha {
            Alpha::Constant { .. } => AlphaLabel::Constant,
            Alpha::DepthFaded { .. } => AlphaLabel::DepthFaded,
        }
    }
}
