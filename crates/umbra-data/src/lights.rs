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

//! Tracks the lights of an assembly pass by identity.
//!
//! Lights hash and compare by [`LightId`], so two lights sharing an identity
//! collapse into one entry of any set or map. The registry makes sure such
//! lights describe the same variant: the same [`LightLabel`] and the same
//! shadow map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use umbra_core::label::LightLabel;
use umbra_core::renderer::{Light, ShadowMapDescription};
use umbra_core::{ConstraintError, LightId};

fn variant(light: &Light) -> (LightLabel, Option<ShadowMapDescription>) {
    (
        LightLabel::from_light(light),
        light.shadow().map(|shadow| shadow.description()),
    )
}

/// The lights seen by one pass, one per identity.
#[derive(Debug, Default)]
pub(crate) struct LightRegistry {
    lights: HashMap<LightId, Light>,
}

impl LightRegistry {
    /// Fails if a light of another variant holds the same identity.
    pub(crate) fn check(&self, light: &Light) -> Result<(), ConstraintError> {
        match self.lights.get(&light.id()) {
            Some(known) if variant(known) != variant(light) => {
                Err(ConstraintError::LightVersionConflict { light: light.id() })
            }
            _ => Ok(()),
        }
    }

    /// Registers `light`; returns `false` if its identity was already known.
    pub(crate) fn insert(&mut self, light: Light) -> Result<bool, ConstraintError> {
        self.check(&light)?;
        match self.lights.entry(light.id()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(light);
                Ok(true)
            }
        }
    }

    /// Checks every light of `other` against this registry.
    pub(crate) fn check_all(&self, other: &LightRegistry) -> Result<(), ConstraintError> {
        other.lights.values().try_for_each(|light| self.check(light))
    }

    pub(crate) fn merge(&mut self, other: LightRegistry) -> Result<(), ConstraintError> {
        other
            .lights
            .into_values()
            .try_for_each(|light| self.insert(light).map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{basic_shadow, spot, sun, variance_shadow};
    use umbra_core::Identity;

    #[test]
    fn test_same_light_twice_is_known() {
        let mut registry = LightRegistry::default();
        assert_eq!(registry.insert(sun(1)), Ok(true));
        assert_eq!(registry.insert(sun(1)), Ok(false));
        assert_eq!(registry.lights.len(), 1);
    }

    #[test]
    fn test_same_id_other_variant_conflicts() {
        let mut registry = LightRegistry::default();
        registry.insert(spot(1, Some(basic_shadow()))).unwrap();

        let conflict = Err(ConstraintError::LightVersionConflict {
            light: LightId::from_raw(1),
        });
        assert_eq!(registry.insert(spot(1, Some(variance_shadow()))), conflict);
        assert_eq!(registry.insert(spot(1, None)), conflict);
        assert_eq!(registry.insert(sun(1)), conflict);
        assert_eq!(registry.insert(spot(2, None)), Ok(true));
    }
}
