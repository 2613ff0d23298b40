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

// Umbra Sandbox
// Assembles a small scene and logs how it was classified.

use std::{env, fs};

use anyhow::{Context, Result};
use umbra_core::asset::{
    Albedo, Alpha, Emissive, Mesh, MeshHandle, Normal, OpaqueAlphaDepth, OpaqueMaterial,
    OpaqueRegular, Refractive, Specular, Surface, Texture2D, TranslucentRefractive,
    TranslucentRegular,
};
use umbra_core::label::Label;
use umbra_core::math::{Aabb, MATRIX4_IDENTITY, QUATERNION_IDENTITY};
use umbra_core::renderer::{
    BasicShadow, BasicShadowMapDescription, DirectionalLight, Frustum, Light, ProjectiveLight,
    Projection, RenderSettings, Shadow, ShadowFilter, SphericalLight, Transform,
};
use umbra_core::scene::{Camera, FaceSelection, OpaqueInstance, TranslucentInstance};
use umbra_core::{IdAllocator, InstanceId, LightId, MeshId, TextureId};
use umbra_data::{Scene, SceneBuilder};

const DEFAULT_SETTINGS: &str = "sandbox/settings.json";

/// Identity allocators for everything the demo creates.
#[derive(Default)]
struct Ids {
    instances: IdAllocator<InstanceId>,
    lights: IdAllocator<LightId>,
    meshes: IdAllocator<MeshId>,
    textures: IdAllocator<TextureId>,
}

impl Ids {
    fn texture(&self) -> Texture2D {
        Texture2D::new(self.textures.fresh())
    }

    fn mesh(&self, half_extent: f32) -> MeshHandle {
        MeshHandle::new(Mesh {
            id: self.meshes.fresh(),
            vertex_count: 24,
            index_count: 36,
            bounds: Aabb::new([-half_extent; 3], [half_extent; 3]),
        })
    }

    fn opaque(&self, position: [f32; 3], material: OpaqueMaterial) -> OpaqueInstance {
        OpaqueInstance::new(
            self.instances.fresh(),
            self.mesh(1.0),
            Transform::translation(position),
            material,
            FaceSelection::Front,
        )
    }

    fn translucent(
        &self,
        position: [f32; 3],
        material: impl Into<umbra_core::asset::TranslucentMaterial>,
    ) -> TranslucentInstance {
        TranslucentInstance::new(
            self.instances.fresh(),
            self.mesh(0.5),
            Transform::translation(position),
            material.into(),
            FaceSelection::FrontAndBack,
        )
    }
}

fn projection(near: f32, far: f32) -> Projection {
    Projection::new(
        Frustum {
            left: -near,
            right: near,
            bottom: -near,
            top: near,
            near,
            far,
        },
        MATRIX4_IDENTITY,
    )
}

fn load_settings() -> Result<RenderSettings> {
    let path = env::args().nth(1);
    let path = path.as_deref().unwrap_or(DEFAULT_SETTINGS);
    match fs::read_to_string(path) {
        Ok(json) => RenderSettings::from_json_str(&json)
            .with_context(|| format!("Invalid render settings in '{path}'")),
        Err(err) => {
            log::warn!("Could not read '{path}' ({err}), using default render settings");
            Ok(RenderSettings::default())
        }
    }
}

fn build_scene(settings: &RenderSettings) -> Result<Scene> {
    let ids = Ids::default();
    let capabilities = settings.capabilities()?;
    log::info!(
        "Capabilities: depth textures = {}, texture units = {}, precision = {:?}",
        capabilities.supports_depth_textures(),
        capabilities.texture_units(),
        capabilities.depth_precision()
    );

    let camera = Camera::new(
        Transform::translation([0.0, 2.0, 8.0]),
        projection(0.1, 200.0),
    );

    // Materials
    let stone = OpaqueRegular::new(Surface {
        albedo: Albedo::textured([0.6, 0.6, 0.6, 1.0], 1.0, ids.texture()),
        normal: Normal::Mapped {
            texture: ids.texture(),
        },
        specular: Specular::Constant {
            color: [0.1; 3],
            exponent: 8.0,
        },
        ..Default::default()
    });
    let ivy = OpaqueAlphaDepth::new(
        Surface {
            albedo: Albedo::textured([0.2, 0.5, 0.1, 1.0], 1.0, ids.texture()),
            ..Default::default()
        },
        0.5,
    );
    let neon = OpaqueRegular::new(Surface {
        albedo: Albedo::untextured([1.0, 0.2, 0.6, 1.0]),
        emissive: Emissive::Constant { emission: 4.0 },
        ..Default::default()
    });
    let glass = TranslucentRefractive::new(
        [0.9, 0.95, 1.0, 1.0],
        Normal::Vertex,
        Refractive {
            scale: 0.04,
            masked: capabilities.supports_depth_textures(),
        },
    );
    let smoke = TranslucentRegular::new(Surface::default(), Alpha::Constant { opacity: 0.2 });

    // Instances
    let walls = ids.opaque([0.0, 0.0, 0.0], stone.into());
    let floor = ids.opaque([0.0, -1.0, 0.0], stone.into());
    let hedge = ids.opaque([3.0, 0.0, 0.0], ivy.into());
    let sign = ids.opaque([0.0, 3.0, -1.0], neon.into());
    let window = ids.translucent([0.0, 1.0, 1.0], glass);
    let haze = ids.translucent([0.0, 0.5, 0.0], smoke);

    // Lights
    let sun = Light::directional(ids.lights.fresh(), DirectionalLight::default());
    let lamp = Light::spherical(ids.lights.fresh(), SphericalLight::default());
    let shadow = Shadow::Basic(BasicShadow {
        description: BasicShadowMapDescription {
            size_exponent: 10,
            precision: settings.depth_precision,
            filter: ShadowFilter::Linear,
        },
        depth_bias: 0.0015,
        factor_minimum: 0.1,
    });
    let spot = Light::projective(
        ids.lights.fresh(),
        ProjectiveLight {
            position: [0.0, 6.0, 0.0],
            orientation: QUATERNION_IDENTITY,
            color: [1.0, 0.95, 0.8],
            intensity: 4.0,
            range: 20.0,
            falloff: 2.0,
            projection: projection(0.5, 20.0),
            texture: ids.texture(),
            shadow: capabilities.supports_depth_textures().then_some(shadow),
        },
    );

    let mut builder = SceneBuilder::new(camera, capabilities);

    let mut outdoor = builder.light_group("outdoor")?;
    outdoor
        .add_instance(walls.clone())?
        .add_instance(floor.clone())?
        .add_instance(hedge.clone())?
        .add_light(sun)
        .add_light(spot);
    outdoor.build()?;

    let mut interior = builder.light_group("interior")?;
    interior.add_instance(floor.clone())?.add_light(lamp);
    interior.build()?;

    builder
        .add_unlit(sign)?
        .add_translucent_unlit(window)?
        .add_translucent_lit(haze, [lamp, sun])?;

    if spot.shadow().is_some() {
        for caster in [hedge, walls, floor] {
            builder.add_shadow_caster(&spot, caster)?;
        }
    }

    Ok(builder.build())
}

fn report(scene: &Scene) {
    for group in scene.light_groups() {
        log::info!(
            "Light group '{}': {} instances, {} lights",
            group.name(),
            group.instances().len(),
            group.lights().len()
        );
        for (label, pairs) in group.batches() {
            log::info!(
                "  {label}: {} draws, {} texture units",
                pairs.len(),
                label.textures_required()
            );
        }
    }
    for instance in scene.unlit() {
        log::info!("Unlit instance {}", instance.id());
    }
    for entry in scene.translucents() {
        log::info!(
            "Translucent {} ({}), {} lights",
            entry.instance().id(),
            entry.material_label(),
            entry.lights().len()
        );
    }
    for (light, batches) in scene.shadows().batched().iter() {
        for batch in batches {
            log::info!(
                "Shadow casters for {} with {}: {}",
                light.id(),
                batch.depth,
                batch.casters.len()
            );
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings()?;
    let scene = build_scene(&settings).context("Scene assembly failed")?;
    report(&scene);
    Ok(())
}
