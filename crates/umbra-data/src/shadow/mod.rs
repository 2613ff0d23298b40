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

//! Assembly of shadow casters per shadow-casting light.
//!
//! Casters are kept in the exact order they were registered in. Layered
//! shadow techniques downstream depend on that order, so it is part of the
//! value of a [`ShadowSceneSnapshot`]: two snapshots with the same casters in
//! a different order are different snapshots.

use std::collections::HashMap;

use umbra_core::label::DepthLabel;
use umbra_core::renderer::Light;
use umbra_core::scene::OpaqueInstance;
use umbra_core::ConstraintError;

use crate::lights::LightRegistry;

/// Accumulates the shadow casters of each light.
#[derive(Debug, Default)]
pub struct ShadowSceneBuilder {
    lights: Vec<Light>,
    casters: HashMap<Light, Vec<OpaqueInstance>>,
    registry: LightRegistry,
}

impl ShadowSceneBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `caster` to the casters of `light`.
    ///
    /// Fails with [`ConstraintError::LightHasNoShadow`] if the light casts no
    /// shadow, and with [`ConstraintError::LightVersionConflict`] if casters
    /// were already registered for a light of another variant with the same
    /// identity.
    pub fn add_caster(
        &mut self,
        light: &Light,
        caster: OpaqueInstance,
    ) -> Result<&mut Self, ConstraintError> {
        if light.shadow().is_none() {
            return Err(ConstraintError::LightHasNoShadow { light: light.id() });
        }
        self.registry.insert(*light)?;
        log::trace!("Shadow caster {} added for {}", caster.id(), light.id());
        self.casters
            .entry(*light)
            .or_insert_with(|| {
                self.lights.push(*light);
                Vec::new()
            })
            .push(caster);
        Ok(self)
    }

    /// Returns `true` if no caster was registered.
    pub fn is_empty(&self) -> bool {
        self.casters.is_empty()
    }

    /// Freezes the accumulated casters.
    pub fn build(self) -> ShadowSceneSnapshot {
        log::debug!(
            "Built shadow snapshot: {} lights, {} casters",
            self.lights.len(),
            self.casters.values().map(Vec::len).sum::<usize>()
        );
        ShadowSceneSnapshot {
            lights: self.lights,
            casters: self.casters,
        }
    }
}

/// An immutable mapping from shadow-casting lights to their ordered casters.
///
/// Equality compares the key sets and, for each light, the caster sequences
/// element by element. The order lights were first registered in is kept for
/// iteration only and does not take part in equality.
#[derive(Debug, Clone, Default)]
pub struct ShadowSceneSnapshot {
    lights: Vec<Light>,
    casters: HashMap<Light, Vec<OpaqueInstance>>,
}

impl ShadowSceneSnapshot {
    /// Returns the casters of `light`, in registration order.
    pub fn casters(&self, light: &Light) -> Option<&[OpaqueInstance]> {
        self.casters.get(light).map(Vec::as_slice)
    }

    /// Iterates over the lights in the order they were first registered in.
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    /// Iterates over every light and its casters.
    pub fn iter(&self) -> impl Iterator<Item = (&Light, &[OpaqueInstance])> {
        self.lights
            .iter()
            .filter_map(|light| self.casters(light).map(|casters| (light, casters)))
    }

    /// Returns the number of lights with at least one caster.
    pub fn len(&self) -> usize {
        self.casters.len()
    }

    /// Returns `true` if no light has a caster.
    pub fn is_empty(&self) -> bool {
        self.casters.is_empty()
    }

    /// Groups the casters of each light by [`DepthLabel`], so that each group
    /// renders into the shadow map with a single depth shader.
    ///
    /// Groups appear in the order their label first occurs, and casters keep
    /// their relative order inside a group.
    pub fn batched(&self) -> BatchedShadows {
        let lights = self
            .iter()
            .map(|(light, casters)| {
                let mut batches: Vec<ShadowBatch> = Vec::new();
                for caster in casters {
                    let depth = DepthLabel::from_material(&caster.material);
                    match batches.iter_mut().find(|batch| batch.depth == depth) {
                        Some(batch) => batch.casters.push(caster.clone()),
                        None => batches.push(ShadowBatch {
                            depth,
                            casters: vec![caster.clone()],
                        }),
                    }
                }
                (*light, batches)
            })
            .collect();
        BatchedShadows { lights }
    }
}

impl PartialEq for ShadowSceneSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.casters == other.casters
    }
}

impl Eq for ShadowSceneSnapshot {}

/// Casters of one light sharing a depth shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowBatch {
    /// The depth label shared by the casters.
    pub depth: DepthLabel,
    /// The casters, in registration order.
    pub casters: Vec<OpaqueInstance>,
}

/// The casters of a snapshot grouped by depth shader, per light.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchedShadows {
    lights: Vec<(Light, Vec<ShadowBatch>)>,
}

impl BatchedShadows {
    /// Returns the batches of `light`.
    pub fn for_light(&self, light: &Light) -> Option<&[ShadowBatch]> {
        self.lights
            .iter()
            .find(|(l, _)| l == light)
            .map(|(_, batches)| batches.as_slice())
    }

    /// Iterates over every light and its batches.
    pub fn iter(&self) -> impl Iterator<Item = (&Light, &[ShadowBatch])> {
        self.lights
            .iter()
            .map(|(light, batches)| (light, batches.as_slice()))
    }
}
