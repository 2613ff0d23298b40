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

//! Scene fixtures shared by the unit tests of this crate.

use umbra_core::asset::{
    Albedo, Alpha, Mesh, MeshHandle, OpaqueAlphaDepth, OpaqueMaterial, OpaqueRegular, Surface,
    Texture2D, TranslucentMaterial, TranslucentRegular,
};
use umbra_core::math::{Aabb, MATRIX4_IDENTITY, QUATERNION_IDENTITY};
use umbra_core::renderer::{
    BasicShadow, BasicShadowMapDescription, Capabilities, DepthPrecision, DirectionalLight,
    Frustum, Light, ProjectiveLight, Projection, Shadow, ShadowFilter, Transform, VarianceShadow,
    VarianceShadowMapDescription,
};
use umbra_core::scene::{Camera, FaceSelection, OpaqueInstance, TranslucentInstance};
use umbra_core::{Identity, InstanceId, LightId, MeshId, TextureId};

pub fn capabilities(depth: bool, units: u32) -> Capabilities {
    Capabilities::new(depth, units, DepthPrecision::Depth24).unwrap()
}

pub fn camera() -> Camera {
    Camera::new(Transform::default(), projection())
}

pub fn projection() -> Projection {
    Projection::new(
        Frustum {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 0.1,
            far: 100.0,
        },
        MATRIX4_IDENTITY,
    )
}

fn mesh() -> MeshHandle {
    MeshHandle::new(Mesh {
        id: MeshId::from_raw(0),
        vertex_count: 24,
        index_count: 36,
        bounds: Aabb::new([-0.5; 3], [0.5; 3]),
    })
}

pub fn opaque_with(id: u64, material: OpaqueMaterial) -> OpaqueInstance {
    OpaqueInstance::new(
        InstanceId::from_raw(id),
        mesh(),
        Transform::default(),
        material,
        FaceSelection::Front,
    )
}

pub fn opaque(id: u64) -> OpaqueInstance {
    opaque_with(id, OpaqueRegular::new(Surface::default()).into())
}

/// An alpha-tested instance whose alpha comes from a texture.
pub fn foliage(id: u64) -> OpaqueInstance {
    let surface = Surface {
        albedo: Albedo::textured([1.0; 4], 1.0, Texture2D::new(TextureId::from_raw(1))),
        ..Default::default()
    };
    opaque_with(id, OpaqueAlphaDepth::new(surface, 0.5).into())
}

pub fn translucent_with(id: u64, material: TranslucentMaterial) -> TranslucentInstance {
    TranslucentInstance::new(
        InstanceId::from_raw(id),
        mesh(),
        Transform::default(),
        material,
        FaceSelection::FrontAndBack,
    )
}

pub fn translucent(id: u64) -> TranslucentInstance {
    translucent_with(
        id,
        TranslucentRegular::new(Surface::default(), Alpha::Constant { opacity: 0.5 }).into(),
    )
}

pub fn sun(id: u64) -> Light {
    Light::directional(LightId::from_raw(id), DirectionalLight::default())
}

pub fn spot(id: u64, shadow: Option<Shadow>) -> Light {
    Light::projective(
        LightId::from_raw(id),
        ProjectiveLight {
            position: [0.0, 4.0, 0.0],
            orientation: QUATERNION_IDENTITY,
            color: [1.0; 3],
            intensity: 1.0,
            range: 12.0,
            falloff: 1.0,
            projection: projection(),
            texture: Texture2D::new(TextureId::from_raw(2)),
            shadow,
        },
    )
}

pub fn basic_shadow() -> Shadow {
    Shadow::Basic(BasicShadow {
        description: BasicShadowMapDescription {
            size_exponent: 10,
            precision: DepthPrecision::Depth24,
            filter: ShadowFilter::Linear,
        },
        depth_bias: 0.001,
        factor_minimum: 0.1,
    })
}

pub fn variance_shadow() -> Shadow {
    Shadow::Variance(VarianceShadow {
        description: VarianceShadowMapDescription {
            size_exponent: 9,
            precision: DepthPrecision::Depth16,
            filter: ShadowFilter::Linear,
        },
        minimum_variance: 0.00002,
        light_bleed_reduction: 0.2,
        factor_minimum: 0.0,
    })
}
