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

use umbra_core::label::{LitLabel, TranslucentLabel};
use umbra_core::renderer::Light;
use umbra_core::scene::{Instance, TranslucentInstance};

/// A translucent instance, drawn in the order it was added to the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslucentEntry {
    /// An instance lit by a non-empty list of lights.
    Lit {
        /// The instance.
        instance: TranslucentInstance,
        /// The lights, without duplicates, in the order they were given.
        lights: Vec<Light>,
    },
    /// An unlit instance.
    Unlit {
        /// The instance.
        instance: TranslucentInstance,
    },
}

impl TranslucentEntry {
    /// Returns the instance.
    pub fn instance(&self) -> &TranslucentInstance {
        match self {
            TranslucentEntry::Lit { instance, .. } | TranslucentEntry::Unlit { instance } => {
                instance
            }
        }
    }

    /// Returns the lights of the instance; empty if it is unlit.
    pub fn lights(&self) -> &[Light] {
        match self {
            TranslucentEntry::Lit { lights, .. } => lights.as_slice(),
            TranslucentEntry::Unlit { .. } => &[],
        }
    }

    /// Returns the label of the unlit pass of the instance.
    pub fn material_label(&self) -> TranslucentLabel {
        TranslucentLabel::derive(&self.instance().material)
    }

    /// Returns the label of each light pass of the instance.
    pub fn lit_labels(&self) -> impl Iterator<Item = (&Light, LitLabel)> {
        let instance = Instance::from(self.instance().clone());
        self.lights()
            .iter()
            .map(move |light| (light, LitLabel::derive(light, &instance)))
    }
}
