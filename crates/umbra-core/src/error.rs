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

//! Defines the hierarchy of error types for scene classification.
//!
//! There are three failure channels:
//!
//! - [`ConstraintError`]: a configuration or consistency error. It aborts the
//!   current scene build and is never recovered silently.
//! - [`RenderError`]: a runtime failure raised by rendering code running inside
//!   a visitor.
//! - a caller-chosen error type carried by a visitor.
//!
//! [`DispatchError`] folds the three into one tagged type for visitors that
//! need all of them.

use thiserror::Error;

use crate::identity::{InstanceId, LightId, MaterialId};

/// A configuration or consistency error detected while classifying a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// An instance was added to a light group after being marked unlit.
    #[error("instance {instance} is already marked as unlit")]
    InstanceAlreadyUnlit {
        /// The offending instance.
        instance: InstanceId,
    },
    /// An instance was marked unlit after being added to a light group.
    #[error("instance {instance} is already lit by light group '{group}'")]
    InstanceAlreadyLit {
        /// The offending instance.
        instance: InstanceId,
        /// The first light group the instance was added to.
        group: String,
    },
    /// A light group was finalized without any instance.
    #[error("light group '{group}' has no instances")]
    LightGroupLacksInstances {
        /// The name of the light group.
        group: String,
    },
    /// A light group was finalized without any light.
    #[error("light group '{group}' has no lights")]
    LightGroupLacksLights {
        /// The name of the light group.
        group: String,
    },
    /// Two light groups of the same scene share a name.
    #[error("a light group named '{group}' already exists in this scene")]
    LightGroupNameInUse {
        /// The duplicated name.
        group: String,
    },
    /// A shadow caster was registered for a light that casts no shadow.
    #[error("light {light} does not cast shadows")]
    LightHasNoShadow {
        /// The shadowless light.
        light: LightId,
    },
    /// A lit translucent instance was given an empty set of lights.
    #[error("translucent instance {instance} is lit by an empty set of lights")]
    TranslucentLacksLights {
        /// The offending instance.
        instance: InstanceId,
    },
    /// Two different versions of one material are live in the same scene.
    #[error("material {material} is present in the scene in two different versions")]
    MaterialVersionConflict {
        /// The identity shared by both versions.
        material: MaterialId,
    },
    /// Two lights of different variants share an identity in the same scene.
    #[error("light {light} is present in the scene in two different variants")]
    LightVersionConflict {
        /// The identity shared by both lights.
        light: LightId,
    },
    /// A material property is NaN or infinite.
    #[error("material {material} has a NaN or infinite property")]
    NonFiniteMaterial {
        /// The offending material.
        material: MaterialId,
    },
    /// A label needs more texture units than the hardware provides.
    #[error("label '{label}' requires {required} texture units but only {available} are available")]
    TextureUnitsExceeded {
        /// The code of the label.
        label: String,
        /// The number of texture units the label needs.
        required: u32,
        /// The number of texture units the hardware provides.
        available: u32,
    },
    /// A label needs depth textures and the hardware cannot render to them.
    #[error("label '{label}' requires depth texture support")]
    DepthTexturesUnsupported {
        /// The code of the label.
        label: String,
    },
    /// A capability set was described with too few texture units.
    #[error("at least 2 texture units are required, got {units}")]
    InsufficientTextureUnits {
        /// The number of texture units that was given.
        units: u32,
    },
}

/// A runtime failure raised while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The requested operation is not supported by the current renderer.
    #[error("unsupported rendering operation: {0}")]
    Unsupported(String),
    /// A rendering operation failed.
    #[error("rendering failed: {0}")]
    Internal(String),
}

/// The single error type carrying all three failure channels of a visitor.
///
/// Dispatch never produces or rewrites any of these variants: a visitor that
/// returns `DispatchError::Visitor(e)` gets exactly that value back from
/// `accept`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError<E> {
    /// An invalid argument or state.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    /// A rendering failure.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// A failure specific to the visitor.
    #[error("visitor failed: {0}")]
    Visitor(E),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::identity::Identity;

    #[test]
    fn test_constraint_error_display() {
        let err = ConstraintError::LightGroupLacksLights {
            group: "hall".to_string(),
        };
        assert_eq!(format!("{err}"), "light group 'hall' has no lights");

        let err = ConstraintError::TextureUnitsExceeded {
            label: "LP_BT_NM".to_string(),
            required: 5,
            available: 4,
        };
        assert_eq!(
            format!("{err}"),
            "label 'LP_BT_NM' requires 5 texture units but only 4 are available"
        );

        let err = ConstraintError::InstanceAlreadyUnlit {
            instance: InstanceId::from_raw(3),
        };
        assert_eq!(
            format!("{err}"),
            "instance InstanceId(3) is already marked as unlit"
        );
    }

    #[test]
    fn test_dispatch_error_from_constraint_is_transparent() {
        let inner = ConstraintError::DepthTexturesUnsupported {
            label: "TRM".to_string(),
        };
        let err: DispatchError<String> = inner.clone().into();
        assert_eq!(err, DispatchError::Constraint(inner.clone()));
        assert_eq!(format!("{err}"), format!("{inner}"));
    }

    #[test]
    fn test_dispatch_error_from_render() {
        let err: DispatchError<String> = RenderError::Internal("device lost".to_string()).into();
        assert_eq!(format!("{err}"), "rendering failed: device lost");
        // Transparent variants forward `source` to the wrapped error.
        assert!(err.source().is_none());
    }

    #[test]
    fn test_dispatch_error_visitor_channel() {
        let err: DispatchError<String> = DispatchError::Visitor("custom".to_string());
        assert_eq!(format!("{err}"), "visitor failed: custom");
    }
}
