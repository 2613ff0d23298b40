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

//! Global settings for the classification layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::capabilities::{Capabilities, CapabilityProbe, DepthPrecision, StaticCapabilityProbe};
use crate::error::ConstraintError;

/// An error raised while loading [`RenderSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON or does not match the schema.
    #[error("failed to parse render settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// The settings describe an impossible device.
    #[error("invalid render settings: {0}")]
    Invalid(#[from] ConstraintError),
}

/// A collection of settings describing the rendering session.
///
/// Missing fields take their default value.
///
/// ```
/// use umbra_core::renderer::{DepthPrecision, RenderSettings};
///
/// let settings = RenderSettings::from_json_str(
///     r#"{ "depth_precision": "depth32_float", "texture_units": 4 }"#,
/// ).unwrap();
/// assert_eq!(settings.depth_precision, DepthPrecision::Depth32Float);
/// assert!(settings.supports_depth_textures);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// The depth buffer precision forwarded to the capability probe.
    pub depth_precision: DepthPrecision,
    /// Whether the device can render to depth textures.
    pub supports_depth_textures: bool,
    /// The number of texture units available to a single shader.
    pub texture_units: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            depth_precision: DepthPrecision::Depth24,
            supports_depth_textures: true,
            texture_units: 8,
        }
    }
}

impl RenderSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.capability_probe()?;
        log::debug!("Loaded render settings: {settings:?}");
        Ok(settings)
    }

    /// Serializes the settings to a pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a probe answering with the device described by these settings.
    pub fn capability_probe(&self) -> Result<StaticCapabilityProbe, ConstraintError> {
        StaticCapabilityProbe::new(self.supports_depth_textures, self.texture_units)
    }

    /// Probes the described device with the configured depth precision.
    pub fn capabilities(&self) -> Result<Capabilities, ConstraintError> {
        Ok(self.capability_probe()?.probe(self.depth_precision))
    }
}
