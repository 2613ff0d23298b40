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

//! Hardware capabilities and the checks that gate labels against them.

use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;
use crate::label::Label;

/// The precision requested for depth buffers.
///
/// This is a hint forwarded to the capability layer and to shadow map
/// descriptions. The classification layer never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthPrecision {
    /// A 16-bit unsigned normalized depth buffer.
    Depth16,
    /// A 24-bit unsigned normalized depth buffer.
    #[default]
    Depth24,
    /// A 32-bit floating point depth buffer.
    Depth32Float,
}

/// What the graphics hardware of the current session supports.
///
/// A capability set is queried once per device session and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    supports_depth_textures: bool,
    texture_units: u32,
    depth_precision: DepthPrecision,
}

impl Capabilities {
    /// The smallest number of texture units a usable device has.
    pub const MIN_TEXTURE_UNITS: u32 = 2;

    /// Describes a device.
    ///
    /// Fails with [`ConstraintError::InsufficientTextureUnits`] if
    /// `texture_units` is below [`Capabilities::MIN_TEXTURE_UNITS`].
    pub fn new(
        supports_depth_textures: bool,
        texture_units: u32,
        depth_precision: DepthPrecision,
    ) -> Result<Self, ConstraintError> {
        if texture_units < Self::MIN_TEXTURE_UNITS {
            return Err(ConstraintError::InsufficientTextureUnits {
                units: texture_units,
            });
        }
        Ok(Self {
            supports_depth_textures,
            texture_units,
            depth_precision,
        })
    }

    /// Returns `true` if the device can render to depth textures.
    pub fn supports_depth_textures(&self) -> bool {
        self.supports_depth_textures
    }

    /// Returns the number of texture units available to a single shader.
    pub fn texture_units(&self) -> u32 {
        self.texture_units
    }

    /// Returns the depth precision the device was probed with.
    pub fn depth_precision(&self) -> DepthPrecision {
        self.depth_precision
    }

    /// Checks that a label can be rendered on this device.
    ///
    /// A label that needs depth textures on a device without them fails with
    /// [`ConstraintError::DepthTexturesUnsupported`], whatever its texture
    /// count. Otherwise a label needing more texture units than the device has
    /// fails with [`ConstraintError::TextureUnitsExceeded`].
    pub fn check<L: Label + ?Sized>(&self, label: &L) -> Result<(), ConstraintError> {
        if label.requires_depth_textures() && !self.supports_depth_textures {
            return Err(ConstraintError::DepthTexturesUnsupported {
                label: label.code(),
            });
        }
        let required = label.textures_required();
        if required > self.texture_units {
            return Err(ConstraintError::TextureUnitsExceeded {
                label: label.code(),
                required,
                available: self.texture_units,
            });
        }
        Ok(())
    }
}

/// The read-only interface to the graphics-capability probe.
pub trait CapabilityProbe {
    /// Queries the capabilities of the device, forwarding the depth precision
    /// hint untouched.
    fn probe(&self, precision: DepthPrecision) -> Capabilities;
}

/// A probe answering with a fixed description, typically loaded from
/// [`RenderSettings`](super::RenderSettings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCapabilityProbe {
    supports_depth_textures: bool,
    texture_units: u32,
}

impl StaticCapabilityProbe {
    /// Creates a probe for a device with the given features.
    pub fn new(supports_depth_textures: bool, texture_units: u32) -> Result<Self, ConstraintError> {
        // Validates the description once; `probe` cannot fail afterwards.
        Capabilities::new(supports_depth_textures, texture_units, DepthPrecision::default())?;
        Ok(Self {
            supports_depth_textures,
            texture_units,
        })
    }
}

impl CapabilityProbe for StaticCapabilityProbe {
    fn probe(&self, precision: DepthPrecision) -> Capabilities {
        log::debug!(
            "Probed static capabilities: depth textures = {}, texture units = {}, precision = {:?}",
            self.supports_depth_textures,
            self.texture_units,
            precision
        );
        Capabilities {
            supports_depth_textures: self.supports_depth_textures,
            texture_units: self.texture_units,
            depth_precision: precision,
        }
    }
}
