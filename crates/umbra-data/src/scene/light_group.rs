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

use std::collections::{HashMap, HashSet};

use umbra_core::label::{Label, LitLabel};
use umbra_core::renderer::Light;
use umbra_core::scene::OpaqueInstance;
use umbra_core::{ConstraintError, InstanceId, LightId};

use super::builder::{Classification, MaterialRegistry, MaterialVersion, SceneBuilder};
use crate::lights::LightRegistry;

/// A validated association between lights and the opaque instances they
/// illuminate. Never empty of either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightGroup {
    name: String,
    instances: HashSet<OpaqueInstance>,
    lights: HashSet<Light>,
}

impl LightGroup {
    /// Returns the name of the group, unique within its scene.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instances of the group.
    pub fn instances(&self) -> &HashSet<OpaqueInstance> {
        &self.instances
    }

    /// Returns the lights of the group.
    pub fn lights(&self) -> &HashSet<Light> {
        &self.lights
    }

    /// Iterates over the label of every (light, instance) pair.
    pub fn labels(&self) -> impl Iterator<Item = (&Light, &OpaqueInstance, LitLabel)> {
        self.lights.iter().flat_map(move |light| {
            self.instances
                .iter()
                .map(move |instance| (light, instance, LitLabel::opaque(light, &instance.material)))
        })
    }

    /// Groups the (light, instance) pairs of the group by shader variant.
    ///
    /// Batches are sorted by label code and the pairs of a batch by identity,
    /// so the result does not depend on hashing order.
    pub fn batches(&self) -> Vec<(LitLabel, Vec<(LightId, InstanceId)>)> {
        let mut batches: HashMap<LitLabel, Vec<(LightId, InstanceId)>> = HashMap::new();
        for (light, instance, label) in self.labels() {
            batches
                .entry(label)
                .or_default()
                .push((light.id(), instance.id()));
        }
        let mut batches: Vec<_> = batches.into_iter().collect();
        for (_, pairs) in &mut batches {
            pairs.sort_unstable();
        }
        batches.sort_by_cached_key(|(label, _)| label.code());
        batches
    }
}

/// Accumulates the instances and lights of one light group.
///
/// Obtained from [`SceneBuilder::light_group`]. [`LightGroupBuilder::build`]
/// consumes the builder; a new group needs a new builder.
#[derive(Debug)]
pub struct LightGroupBuilder<'a> {
    scene: &'a mut SceneBuilder,
    name: String,
    instances: HashSet<OpaqueInstance>,
    lights: Vec<Light>,
    materials: MaterialRegistry,
}

impl<'a> LightGroupBuilder<'a> {
    pub(super) fn new(scene: &'a mut SceneBuilder, name: String) -> Self {
        Self {
            scene,
            name,
            instances: HashSet::new(),
            lights: Vec::new(),
            materials: MaterialRegistry::default(),
        }
    }

    /// Adds an opaque instance to the group.
    ///
    /// Fails with [`ConstraintError::InstanceAlreadyUnlit`] if the instance
    /// was marked unlit in this scene, and with
    /// [`ConstraintError::MaterialVersionConflict`] if another version of its
    /// material is already in the scene.
    pub fn add_instance(&mut self, instance: OpaqueInstance) -> Result<&mut Self, ConstraintError> {
        if let Some(Classification::Unlit) = self.scene.classification(instance.id()) {
            return Err(ConstraintError::InstanceAlreadyUnlit {
                instance: instance.id(),
            });
        }
        let version = MaterialVersion::Opaque(instance.material);
        self.scene.materials().check(&version)?;
        self.materials.register(version)?;

        log::trace!("Light group '{}': instance {}", self.name, instance.id());
        self.instances.insert(instance);
        Ok(self)
    }

    /// Adds a light to the group. Adding the same light twice has no effect.
    ///
    /// A light sharing the identity of another light of the scene but
    /// describing another variant makes [`LightGroupBuilder::build`] fail.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        log::trace!("Light group '{}': light {}", self.name, light.id());
        self.lights.push(light);
        self
    }

    /// Validates the group and records it in the scene.
    ///
    /// Fails with [`ConstraintError::LightGroupLacksInstances`] if no instance
    /// was added, then with [`ConstraintError::LightGroupLacksLights`] if no
    /// light was added. Fails with [`ConstraintError::LightVersionConflict`]
    /// if two lights of different variants share an identity, within the group
    /// or with the rest of the scene. Every (light, instance) label is then
    /// checked against the capabilities of the scene.
    pub fn build(self) -> Result<LightGroup, ConstraintError> {
        if self.instances.is_empty() {
            return Err(ConstraintError::LightGroupLacksInstances { group: self.name });
        }
        if self.lights.is_empty() {
            return Err(ConstraintError::LightGroupLacksLights { group: self.name });
        }

        let mut lights = LightRegistry::default();
        for light in &self.lights {
            lights.insert(*light)?;
        }
        self.scene.lights().check_all(&lights)?;

        let group = LightGroup {
            name: self.name,
            instances: self.instances,
            lights: self.lights.into_iter().collect(),
        };
        let capabilities = *self.scene.capabilities();
        for (_, _, label) in group.labels() {
            capabilities.check(&label)?;
        }

        self.scene.record_group(group.clone(), self.materials, lights)?;
        log::debug!(
            "Built light group '{}': {} instances, {} lights",
            group.name,
            group.instances.len(),
            group.lights.len()
        );
        Ok(group)
    }
}
