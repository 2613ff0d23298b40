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

//! Labels combining several properties, and lights with materials.

use std::convert::Infallible;
use std::fmt;

use super::{any_depth, sum_textures, write_joined, Label};
use super::{
    AlbedoLabel, AlphaLabel, DepthLabel, EmissiveLabel, EnvironmentLabel, LightLabel, NormalLabel,
    RefractiveLabel, SpecularLabel,
};
use crate::asset::{
    OpaqueMaterial, Surface, TranslucentMaterial, TranslucentMaterialVisitor, TranslucentRefractive,
    TranslucentRegular, TranslucentSpecularOnly,
};
use crate::renderer::Light;
use crate::scene::{Instance, InstanceVisitor, OpaqueInstance, TranslucentInstance};
use crate::visit::{infallible, VisitResult, Visitor};

/// The label of the properties shared by every lit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceLabel {
    /// The albedo label.
    pub albedo: AlbedoLabel,
    /// The emissive label.
    pub emissive: EmissiveLabel,
    /// The environment label.
    pub environment: EnvironmentLabel,
    /// The normal label.
    pub normal: NormalLabel,
    /// The specular label.
    pub specular: SpecularLabel,
}

impl SurfaceLabel {
    /// Derives the label of a surface.
    pub fn from_surface(surface: &Surface) -> Self {
        Self {
            albedo: AlbedoLabel::from_albedo(&surface.albedo),
            emissive: EmissiveLabel::from_emissive(&surface.emissive),
            environment: EnvironmentLabel::from_environment(surface.environment.as_ref()),
            normal: NormalLabel::from_normal(&surface.normal),
            specular: SpecularLabel::from_specular(&surface.specular),
        }
    }

    fn parts(&self) -> [&dyn Label; 5] {
        [
            &self.albedo,
            &self.emissive,
            &self.environment,
            &self.normal,
            &self.specular,
        ]
    }
}

impl fmt::Display for SurfaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.parts())
    }
}

impl Label for SurfaceLabel {
    fn textures_required(&self) -> u32 {
        sum_textures(&self.parts())
    }

    fn requires_depth_textures(&self) -> bool {
        any_depth(&self.parts())
    }
}

/// The label of an opaque material.
///
/// The depth code only appears for alpha-tested materials. A mapped depth
/// label samples the albedo texture, which the surface already binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueLabel {
    /// How the material writes depth.
    pub depth: DepthLabel,
    /// The surface label.
    pub surface: SurfaceLabel,
}

impl OpaqueLabel {
    /// Derives the label of an opaque material.
    pub fn derive(material: &OpaqueMaterial) -> Self {
        Self {
            depth: DepthLabel::from_material(material),
            surface: SurfaceLabel::from_surface(material.surface()),
        }
    }
}

impl fmt::Display for OpaqueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.depth {
            DepthLabel::Constant => write!(f, "{}", self.surface),
            depth => write_joined(f, &[&depth as &dyn Label, &self.surface]),
        }
    }
}

impl Label for OpaqueLabel {
    fn textures_required(&self) -> u32 {
        self.surface.textures_required()
    }

    fn requires_depth_textures(&self) -> bool {
        self.surface.requires_depth_textures() || self.depth.requires_depth_textures()
    }
}

/// The label of a translucent material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslucentLabel {
    /// A blended surface.
    Regular {
        /// The opacity label.
        alpha: AlphaLabel,
        /// The surface label.
        surface: SurfaceLabel,
    },
    /// A refracting surface.
    Refractive {
        /// The refraction label.
        refractive: RefractiveLabel,
        /// The normal label.
        normal: NormalLabel,
    },
    /// A highlights-only surface.
    SpecularOnly {
        /// The normal label.
        normal: NormalLabel,
        /// The specular label.
        specular: SpecularLabel,
    },
}

struct TranslucentLabeller;

impl Visitor for TranslucentLabeller {
    type Output = TranslucentLabel;
    type Error = Infallible;
}

impl TranslucentMaterialVisitor for TranslucentLabeller {
    fn regular(&mut self, material: &TranslucentRegular) -> VisitResult<Self> {
        Ok(TranslucentLabel::Regular {
            alpha: AlphaLabel::from_alpha(&material.alpha),
            surface: SurfaceLabel::from_surface(&material.surface),
        })
    }

    fn refractive(&mut self, material: &TranslucentRefractive) -> VisitResult<Self> {
        Ok(TranslucentLabel::Refractive {
            refractive: RefractiveLabel::from_refractive(&material.refractive),
            normal: NormalLabel::from_normal(&material.normal),
        })
    }

    fn specular_only(&mut self, material: &TranslucentSpecularOnly) -> VisitResult<Self> {
        Ok(TranslucentLabel::SpecularOnly {
            normal: NormalLabel::from_normal(&material.normal),
            specular: SpecularLabel::from_specular(&material.specular),
        })
    }
}

impl TranslucentLabel {
    /// Derives the label of a translucent material.
    pub fn derive(material: &TranslucentMaterial) -> Self {
        infallible(material.accept(&mut TranslucentLabeller))
    }

    fn with_parts<R>(&self, f: impl FnOnce(&[&dyn Label]) -> R) -> R {
        let parts: [&dyn Label; 2] = match self {
            TranslucentLabel::Regular { alpha, surface } => [alpha as &dyn Label, surface],
            TranslucentLabel::Refractive { refractive, normal } => [refractive as &dyn Label, normal],
            TranslucentLabel::SpecularOnly { normal, specular } => [normal as &dyn Label, specular],
        };
        f(&parts)
    }
}

impl fmt::Display for TranslucentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_parts(|parts| write_joined(f, parts))
    }
}

impl Label for TranslucentLabel {
    fn textures_required(&self) -> u32 {
        self.with_parts(sum_textures)
    }

    fn requires_depth_textures(&self) -> bool {
        self.with_parts(any_depth)
    }
}

/// The label of any material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialLabel {
    /// An opaque material label.
    Opaque(OpaqueLabel),
    /// A translucent material label.
    Translucent(TranslucentLabel),
}

impl From<OpaqueLabel> for MaterialLabel {
    fn from(label: OpaqueLabel) -> Self {
        MaterialLabel::Opaque(label)
    }
}

impl From<TranslucentLabel> for MaterialLabel {
    fn from(label: TranslucentLabel) -> Self {
        MaterialLabel::Translucent(label)
    }
}

impl fmt::Display for MaterialLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialLabel::Opaque(label) => fmt::Display::fmt(label, f),
            MaterialLabel::Translucent(label) => fmt::Display::fmt(label, f),
        }
    }
}

impl Label for MaterialLabel {
    fn textures_required(&self) -> u32 {
        match self {
            MaterialLabel::Opaque(label) => label.textures_required(),
            MaterialLabel::Translucent(label) => label.textures_required(),
        }
    }

    fn requires_depth_textures(&self) -> bool {
        match self {
            MaterialLabel::Opaque(label) => label.requires_depth_textures(),
            MaterialLabel::Translucent(label) => label.requires_depth_textures(),
        }
    }
}

/// The label of a material lit by a light: the shader variant of one
/// (light, instance) pair.
///
/// # Examples
///
/// ```
/// use umbra_core::asset::{OpaqueRegular, Surface};
/// use umbra_core::label::{Label, LitLabel};
/// use umbra_core::renderer::{DirectionalLight, Light};
/// use umbra_core::{Identity, LightId};
///
/// let sun = Light::directional(LightId::from_raw(0), DirectionalLight::default());
/// let plaster = OpaqueRegular::new(Surface::default()).into();
///
/// let label = LitLabel::opaque(&sun, &plaster);
/// assert_eq!(label.code(), "LD_BU_NV");
/// assert_eq!(label.textures_required(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LitLabel {
    /// The light label.
    pub light: LightLabel,
    /// The material label.
    pub material: MaterialLabel,
}

struct LitLabeller<'a> {
    light: &'a Light,
}

impl Visitor for LitLabeller<'_> {
    type Output = LitLabel;
    type Error = Infallible;
}

impl InstanceVisitor for LitLabeller<'_> {
    fn opaque(&mut self, instance: &OpaqueInstance) -> VisitResult<Self> {
        Ok(LitLabel::opaque(self.light, &instance.material))
    }

    fn translucent(&mut self, instance: &TranslucentInstance) -> VisitResult<Self> {
        Ok(LitLabel::translucent(self.light, &instance.material))
    }
}

impl LitLabel {
    /// Pairs a light label with a material label.
    pub fn new(light: LightLabel, material: impl Into<MaterialLabel>) -> Self {
        Self {
            light,
            material: material.into(),
        }
    }

    /// Derives the label of an opaque material lit by `light`.
    pub fn opaque(light: &Light, material: &OpaqueMaterial) -> Self {
        Self::new(LightLabel::from_light(light), OpaqueLabel::derive(material))
    }

    /// Derives the label of a translucent material lit by `light`.
    pub fn translucent(light: &Light, material: &TranslucentMaterial) -> Self {
        Self::new(
            LightLabel::from_light(light),
            TranslucentLabel::derive(material),
        )
    }

    /// Derives the label of any instance lit by `light`.
    pub fn derive(light: &Light, instance: &Instance) -> Self {
        infallible(instance.accept(&mut LitLabeller { light }))
    }
}

impl fmt::Display for LitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &[&self.light as &dyn Label, &self.material])
    }
}

impl Label for LitLabel {
    fn textures_required(&self) -> u32 {
        self.light.textures_required() + self.material.textures_required()
    }

    fn requires_depth_textures(&self) -> bool {
        self.light.requires_depth_textures() || self.material.requires_depth_textures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{
        Albedo, Alpha, Emissive, Environment, EnvironmentMix, Normal, OpaqueAlphaDepth,
        OpaqueRegular, Refractive, Specular, Texture2D, TextureCube,
    };
    use crate::asset::{Mesh, MeshHandle};
    use crate::identity::{Identity, InstanceId, LightId, MeshId, TextureId};
    use crate::label::ShadowLabel;
    use crate::math::{Aabb, MATRIX4_IDENTITY, QUATERNION_IDENTITY};
    use crate::renderer::{
        BasicShadow, BasicShadowMapDescription, DepthPrecision, Frustum, ProjectiveLight,
        Projection, Shadow, ShadowFilter, SphericalLight, Transform,
    };
    use crate::scene::FaceSelection;

    fn texture(id: u64) -> Texture2D {
        Texture2D::new(TextureId::from_raw(id))
    }

    fn rich_surface() -> Surface {
        Surface {
            albedo: Albedo::textured([1.0; 4], 1.0, texture(1)),
            emissive: Emissive::Mapped {
                emission: 1.0,
                texture: texture(2),
            },
            environment: Some(Environment {
                texture: TextureCube::new(TextureId::from_raw(3)),
                mix: EnvironmentMix::Mapped { texture: texture(4) },
            }),
            normal: Normal::Mapped { texture: texture(5) },
            specular: Specular::Mapped {
                color: [1.0; 3],
                exponent: 32.0,
                texture: texture(6),
            },
        }
    }

    #[test]
    fn test_surface_label_joins_codes_in_order() {
        let label = SurfaceLabel::from_surface(&rich_surface());
        assert_eq!(label.code(), "BT_EM_EMM_NM_SM");
        assert_eq!(label.textures_required(), 6);
        assert!(!label.requires_depth_textures());

        let plain = SurfaceLabel::from_surface(&Surface::default());
        assert_eq!(plain.code(), "BU_NV");
        assert_eq!(plain.textures_required(), 0);
    }

    #[test]
    fn test_opaque_label_depth_prefix() {
        let regular = OpaqueLabel::derive(&OpaqueRegular::new(Surface::default()).into());
        assert_eq!(regular.code(), "BU_NV");

        let uniform = OpaqueLabel::derive(&OpaqueAlphaDepth::new(Surface::default(), 0.5).into());
        assert_eq!(uniform.code(), "DU_BU_NV");

        let foliage = OpaqueLabel::derive(
            &OpaqueAlphaDepth::new(
                Surface {
                    albedo: Albedo::textured([1.0; 4], 1.0, texture(1)),
                    ..Default::default()
                },
                0.5,
            )
            .into(),
        );
        assert_eq!(foliage.code(), "DM_BT_NV");
        // The alpha test reuses the albedo texture.
        assert_eq!(foliage.textures_required(), 1);
    }

    #[test]
    fn test_translucent_labels() {
        let faded: TranslucentMaterial = TranslucentRegular::new(
            Surface::default(),
            Alpha::DepthFaded {
                opacity: 0.5,
                distance: 1.0,
            },
        )
        .into();
        let label = TranslucentLabel::derive(&faded);
        assert_eq!(label.code(), "AD_BU_NV");
        assert_eq!(label.textures_required(), 1);
        assert!(label.requires_depth_textures());

        let glass: TranslucentMaterial = TranslucentRefractive::new(
            [0.9, 0.9, 1.0, 1.0],
            Normal::Mapped { texture: texture(7) },
            Refractive {
                scale: 0.05,
                masked: true,
            },
        )
        .into();
        let label = TranslucentLabel::derive(&glass);
        assert_eq!(label.code(), "TRM_NM");
        assert_eq!(label.textures_required(), 3);
        assert!(label.requires_depth_textures());

        let sheen: TranslucentMaterial = TranslucentSpecularOnly::new(
            Normal::Vertex,
            Specular::Constant {
                color: [1.0; 3],
                exponent: 64.0,
            },
        )
        .into();
        assert_eq!(TranslucentLabel::derive(&sheen).code(), "NV_SC");
    }

    #[test]
    fn test_lit_label_adds_light_and_material() {
        let bulb = Light::spherical(LightId::from_raw(5), SphericalLight::default());
        let material: OpaqueMaterial = OpaqueRegular::new(rich_surface()).into();
        let label = LitLabel::opaque(&bulb, &material);
        assert_eq!(label.code(), "LS_BT_EM_EMM_NM_SM");
        assert_eq!(label.textures_required(), 6);

        let shadowed = LitLabel::new(
            LightLabel::ProjectiveShadowed(ShadowLabel::Basic),
            OpaqueLabel::derive(&material),
        );
        assert_eq!(shadowed.code(), "LPSB_BT_EM_EMM_NM_SM");
        assert_eq!(shadowed.textures_required(), 8);
        assert!(shadowed.requires_depth_textures());
    }

    fn shadowed_spot() -> Light {
        Light::projective(
            LightId::from_raw(9),
            ProjectiveLight {
                position: [0.0, 5.0, 0.0],
                orientation: QUATERNION_IDENTITY,
                color: [1.0; 3],
                intensity: 2.0,
                range: 10.0,
                falloff: 1.0,
                projection: Projection::new(
                    Frustum {
                        left: -1.0,
                        right: 1.0,
                        bottom: -1.0,
                        top: 1.0,
                        near: 0.5,
                        far: 10.0,
                    },
                    MATRIX4_IDENTITY,
                ),
                texture: texture(8),
                shadow: Some(Shadow::Basic(BasicShadow {
                    description: BasicShadowMapDescription {
                        size_exponent: 9,
                        precision: DepthPrecision::Depth24,
                        filter: ShadowFilter::Linear,
                    },
                    depth_bias: 0.001,
                    factor_minimum: 0.1,
                })),
            },
        )
    }

    fn mesh() -> MeshHandle {
        MeshHandle::new(Mesh {
            id: MeshId::from_raw(0),
            vertex_count: 24,
            index_count: 36,
            bounds: Aabb::new([-1.0; 3], [1.0; 3]),
        })
    }

    #[test]
    fn test_lit_label_derives_from_any_instance() {
        let spot = shadowed_spot();
        let material: OpaqueMaterial = OpaqueRegular::new(rich_surface()).into();
        let statue: Instance = OpaqueInstance::new(
            InstanceId::from_raw(1),
            mesh(),
            Transform::default(),
            material,
            FaceSelection::Front,
        )
        .into();
        let glass: TranslucentMaterial = TranslucentRefractive::new(
            [0.9, 0.9, 1.0, 1.0],
            Normal::Mapped { texture: texture(7) },
            Refractive {
                scale: 0.05,
                masked: true,
            },
        )
        .into();
        let window: Instance = TranslucentInstance::new(
            InstanceId::from_raw(2),
            mesh(),
            Transform::default(),
            glass,
            FaceSelection::FrontAndBack,
        )
        .into();

        let opaque = LitLabel::derive(&spot, &statue);
        assert_eq!(opaque, LitLabel::opaque(&spot, &material));
        assert_eq!(opaque.code(), "LPSB_BT_EM_EMM_NM_SM");
        assert_eq!(opaque.textures_required(), 8);
        assert!(opaque.requires_depth_textures());

        let translucent = LitLabel::derive(&spot, &window);
        assert_eq!(translucent, LitLabel::translucent(&spot, &glass));
        assert_eq!(translucent.code(), "LPSB_TRM_NM");
        assert_eq!(translucent.textures_required(), 5);
        assert!(translucent.requires_depth_textures());
    }
}
