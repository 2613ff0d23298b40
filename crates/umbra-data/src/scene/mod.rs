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

//! Single-pass assembly of a frame's scene.
//!
//! A [`SceneBuilder`] accumulates light groups, unlit instances, translucent
//! instances and shadow casters, validating each addition as it happens.
//! [`SceneBuilder::build`] produces an immutable [`Scene`]. When the content
//! changes, the scene is rebuilt from scratch rather than mutated.

mod builder;
mod light_group;
mod translucent;

#[cfg(test)]
mod tests;

pub use builder::SceneBuilder;
pub use light_group::{LightGroup, LightGroupBuilder};
pub use translucent::TranslucentEntry;

use umbra_core::renderer::Capabilities;
use umbra_core::scene::{Camera, OpaqueInstance};

use crate::shadow::ShadowSceneSnapshot;

/// The validated content of a frame.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    capabilities: Capabilities,
    light_groups: Vec<LightGroup>,
    unlit: Vec<OpaqueInstance>,
    translucents: Vec<TranslucentEntry>,
    shadows: ShadowSceneSnapshot,
}

impl Scene {
    /// Returns the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the capabilities every label of the scene was checked against.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the light groups, in the order they were built.
    pub fn light_groups(&self) -> &[LightGroup] {
        &self.light_groups
    }

    /// Returns the light group called `name`.
    pub fn light_group(&self, name: &str) -> Option<&LightGroup> {
        self.light_groups.iter().find(|group| group.name() == name)
    }

    /// Returns the unlit opaque instances, in the order they were added.
    pub fn unlit(&self) -> &[OpaqueInstance] {
        &self.unlit
    }

    /// Returns the translucent instances, in drawing order.
    pub fn translucents(&self) -> &[TranslucentEntry] {
        &self.translucents
    }

    /// Returns the shadow casters of every shadow-casting light.
    pub fn shadows(&self) -> &ShadowSceneSnapshot {
        &self.shadows
    }
}
