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

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use umbra_core::asset::{OpaqueMaterial, TranslucentMaterial};
use umbra_core::label::{DepthLabel, LitLabel, OpaqueLabel, ShadowLabel, TranslucentLabel};
use umbra_core::renderer::{Capabilities, Light};
use umbra_core::scene::{Camera, OpaqueInstance, TranslucentInstance};
use umbra_core::{ConstraintError, InstanceId, MaterialId};

use super::light_group::{LightGroup, LightGroupBuilder};
use super::translucent::TranslucentEntry;
use super::Scene;
use crate::lights::LightRegistry;
use crate::shadow::ShadowSceneBuilder;

/// How an opaque instance is lit, fixed the first time it is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Classification {
    /// Lit by at least one light group; the first one is remembered.
    Lit { group: String },
    /// Explicitly unlit.
    Unlit,
}

/// One version of a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum MaterialVersion {
    Opaque(OpaqueMaterial),
    Translucent(TranslucentMaterial),
}

impl MaterialVersion {
    fn id(&self) -> MaterialId {
        match self {
            MaterialVersion::Opaque(m) => m.id(),
            MaterialVersion::Translucent(m) => m.id(),
        }
    }

    // NaN compares unequal to itself, so only finite versions are comparable.
    fn is_finite(&self) -> bool {
        match self {
            MaterialVersion::Opaque(m) => m.is_finite(),
            MaterialVersion::Translucent(m) => m.is_finite(),
        }
    }
}

/// The material versions live in a scene, one per identity.
#[derive(Debug, Default)]
pub(super) struct MaterialRegistry {
    versions: HashMap<MaterialId, MaterialVersion>,
}

impl MaterialRegistry {
    /// Fails if the version holds a NaN or infinite property, or if a
    /// different version of the same material is registered.
    pub(super) fn check(&self, version: &MaterialVersion) -> Result<(), ConstraintError> {
        if !version.is_finite() {
            return Err(ConstraintError::NonFiniteMaterial {
                material: version.id(),
            });
        }
        match self.versions.get(&version.id()) {
            Some(known) if known != version => Err(ConstraintError::MaterialVersionConflict {
                material: version.id(),
            }),
            _ => Ok(()),
        }
    }

    pub(super) fn register(&mut self, version: MaterialVersion) -> Result<(), ConstraintError> {
        self.check(&version)?;
        self.versions.insert(version.id(), version);
        Ok(())
    }

    fn merge(&mut self, other: MaterialRegistry) -> Result<(), ConstraintError> {
        other
            .versions
            .into_values()
            .try_for_each(|version| self.register(version))
    }
}

/// Assembles one [`Scene`] in a single pass.
///
/// Every opaque instance is either lit by at least one light group or
/// explicitly unlit, never both. Every operation validates the labels it
/// introduces against the capabilities of the device and fails with a
/// [`ConstraintError`] on the first violation; such an error aborts the pass.
///
/// # Examples
///
/// ```
/// use umbra_core::asset::{Mesh, MeshHandle, OpaqueRegular, Surface};
/// use umbra_core::math::{Aabb, MATRIX4_IDENTITY};
/// use umbra_core::renderer::{
///     Capabilities, DepthPrecision, DirectionalLight, Frustum, Light, Projection, Transform,
/// };
/// use umbra_core::scene::{Camera, FaceSelection, OpaqueInstance};
/// use umbra_core::{Identity, InstanceId, LightId, MeshId};
/// use umbra_data::scene::SceneBuilder;
///
/// # fn main() -> Result<(), umbra_core::ConstraintError> {
/// let capabilities = Capabilities::new(true, 8, DepthPrecision::Depth24)?;
/// let projection = Projection::new(
///     Frustum { left: -1.0, right: 1.0, bottom: -1.0, top: 1.0, near: 0.1, far: 50.0 },
///     MATRIX4_IDENTITY,
/// );
/// let camera = Camera::new(Transform::default(), projection);
/// let mesh = MeshHandle::new(Mesh {
///     id: MeshId::from_raw(0),
///     vertex_count: 4,
///     index_count: 6,
///     bounds: Aabb::new([-1.0, 0.0, -1.0], [1.0, 0.0, 1.0]),
/// });
/// let floor = OpaqueInstance::new(
///     InstanceId::from_raw(0),
///     mesh,
///     Transform::default(),
///     OpaqueRegular::new(Surface::default()).into(),
///     FaceSelection::Front,
/// );
/// let sun = Light::directional(LightId::from_raw(0), DirectionalLight::default());
///
/// let mut builder = SceneBuilder::new(camera, capabilities);
/// let mut outdoor = builder.light_group("outdoor")?;
/// outdoor.add_instance(floor.clone())?.add_light(sun);
/// outdoor.build()?;
///
/// assert!(builder.add_unlit(floor).is_err());
/// let scene = builder.build();
/// assert_eq!(scene.light_groups().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SceneBuilder {
    camera: Camera,
    capabilities: Capabilities,
    classification: HashMap<InstanceId, Classification>,
    materials: MaterialRegistry,
    lights: LightRegistry,
    group_names: HashSet<String>,
    groups: Vec<LightGroup>,
    unlit: Vec<OpaqueInstance>,
    translucents: Vec<TranslucentEntry>,
    shadows: ShadowSceneBuilder,
}

impl SceneBuilder {
    /// Starts a scene pass for `camera` on a device with `capabilities`.
    pub fn new(camera: Camera, capabilities: Capabilities) -> Self {
        Self {
            camera,
            capabilities,
            classification: HashMap::new(),
            materials: MaterialRegistry::default(),
            lights: LightRegistry::default(),
            group_names: HashSet::new(),
            groups: Vec::new(),
            unlit: Vec::new(),
            translucents: Vec::new(),
            shadows: ShadowSceneBuilder::new(),
        }
    }

    /// Returns the capabilities labels are checked against.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Starts a new light group.
    ///
    /// Fails with [`ConstraintError::LightGroupNameInUse`] if a group with
    /// this name was already built in this pass.
    pub fn light_group(
        &mut self,
        name: impl Into<String>,
    ) -> Result<LightGroupBuilder<'_>, ConstraintError> {
        let name = name.into();
        if self.group_names.contains(&name) {
            return Err(ConstraintError::LightGroupNameInUse { group: name });
        }
        Ok(LightGroupBuilder::new(self, name))
    }

    /// Marks an opaque instance as deliberately unlit.
    ///
    /// Fails with [`ConstraintError::InstanceAlreadyLit`] if the instance is in
    /// a light group of this pass. Marking an instance unlit twice has no
    /// effect.
    pub fn add_unlit(&mut self, instance: OpaqueInstance) -> Result<&mut Self, ConstraintError> {
        match self.classification.get(&instance.id()).cloned() {
            Some(Classification::Lit { group }) => {
                return Err(ConstraintError::InstanceAlreadyLit {
                    instance: instance.id(),
                    group,
                });
            }
            Some(Classification::Unlit) => return Ok(self),
            None => {}
        }
        self.capabilities
            .check(&OpaqueLabel::derive(&instance.material))?;
        self.materials
            .register(MaterialVersion::Opaque(instance.material))?;

        log::trace!("Unlit instance {}", instance.id());
        self.classification
            .insert(instance.id(), Classification::Unlit);
        self.unlit.push(instance);
        Ok(self)
    }

    /// Appends a translucent instance lit by `lights`.
    ///
    /// Fails with [`ConstraintError::TranslucentLacksLights`] if `lights` is
    /// empty. Duplicate lights are dropped, keeping the first occurrence. Fails
    /// with [`ConstraintError::LightVersionConflict`] if two lights of
    /// different variants share an identity.
    pub fn add_translucent_lit(
        &mut self,
        instance: TranslucentInstance,
        lights: impl IntoIterator<Item = Light>,
    ) -> Result<&mut Self, ConstraintError> {
        let mut seen = LightRegistry::default();
        let mut unique = Vec::new();
        for light in lights {
            if seen.insert(light)? {
                unique.push(light);
            }
        }
        let lights = unique;
        if lights.is_empty() {
            return Err(ConstraintError::TranslucentLacksLights {
                instance: instance.id(),
            });
        }
        self.lights.check_all(&seen)?;
        for light in &lights {
            self.capabilities
                .check(&LitLabel::translucent(light, &instance.material))?;
        }
        self.materials
            .register(MaterialVersion::Translucent(instance.material))?;
        self.lights.merge(seen)?;

        log::trace!(
            "Lit translucent instance {} ({} lights)",
            instance.id(),
            lights.len()
        );
        self.translucents
            .push(TranslucentEntry::Lit { instance, lights });
        Ok(self)
    }

    /// Appends an unlit translucent instance.
    pub fn add_translucent_unlit(
        &mut self,
        instance: TranslucentInstance,
    ) -> Result<&mut Self, ConstraintError> {
        self.capabilities
            .check(&TranslucentLabel::derive(&instance.material))?;
        self.materials
            .register(MaterialVersion::Translucent(instance.material))?;

        log::trace!("Unlit translucent instance {}", instance.id());
        self.translucents.push(TranslucentEntry::Unlit { instance });
        Ok(self)
    }

    /// Appends `caster` to the shadow casters of `light`.
    ///
    /// Fails with [`ConstraintError::LightHasNoShadow`] if the light casts no
    /// shadow, and with [`ConstraintError::LightVersionConflict`] if another
    /// light of the scene has the same identity and a different variant. The shadow label of the light and the depth label of the caster
    /// are checked against the capabilities of the device.
    pub fn add_shadow_caster(
        &mut self,
        light: &Light,
        caster: OpaqueInstance,
    ) -> Result<&mut Self, ConstraintError> {
        let shadow = light
            .shadow()
            .ok_or(ConstraintError::LightHasNoShadow { light: light.id() })?;
        self.lights.check(light)?;
        self.capabilities.check(&ShadowLabel::from_shadow(shadow))?;
        self.capabilities
            .check(&DepthLabel::from_material(&caster.material))?;
        self.materials
            .register(MaterialVersion::Opaque(caster.material))?;

        self.shadows.add_caster(light, caster)?;
        self.lights.insert(*light)?;
        Ok(self)
    }

    /// Finishes the pass.
    pub fn build(self) -> Scene {
        let scene = Scene {
            camera: self.camera,
            capabilities: self.capabilities,
            light_groups: self.groups,
            unlit: self.unlit,
            translucents: self.translucents,
            shadows: self.shadows.build(),
        };
        log::debug!(
            "Built scene: {} light groups, {} unlit, {} translucent, {} shadow-casting lights",
            scene.light_groups.len(),
            scene.unlit.len(),
            scene.translucents.len(),
            scene.shadows.len()
        );
        scene
    }

    pub(super) fn classification(&self, instance: InstanceId) -> Option<&Classification> {
        self.classification.get(&instance)
    }

    pub(super) fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub(super) fn lights(&self) -> &LightRegistry {
        &self.lights
    }

    /// Records a validated group with the material versions and lights it
    /// brought in.
    pub(super) fn record_group(
        &mut self,
        group: LightGroup,
        materials: MaterialRegistry,
        lights: LightRegistry,
    ) -> Result<(), ConstraintError> {
        self.materials.merge(materials)?;
        self.lights.merge(lights)?;
        for instance in group.instances() {
            if let Entry::Vacant(entry) = self.classification.entry(instance.id()) {
                entry.insert(Classification::Lit {
                    group: group.name().to_string(),
                });
            }
        }
        self.group_names.insert(group.name().to_string());
        self.groups.push(group);
        Ok(())
    }
}
