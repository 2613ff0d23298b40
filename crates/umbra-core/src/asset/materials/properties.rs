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

//! The properties materials are assembled from.
//!
//! Each property is a small closed set of variants. Labels are derived from
//! these values alone, see [`crate::label`].

use crate::asset::{Texture2D, TextureCube};
use crate::math::{Rgb, Rgba};

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// The base colour of a surface, optionally mixed with a texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Albedo {
    /// The base colour.
    pub color: Rgba,
    /// How much of the texture is mixed into the colour, from 0.0 to 1.0.
    pub mix: f32,
    /// The albedo texture.
    pub texture: Option<Texture2D>,
}

impl Albedo {
    /// A plain colour.
    pub fn untextured(color: Rgba) -> Self {
        Self {
            color,
            mix: 0.0,
            texture: None,
        }
    }

    /// A colour mixed with a texture.
    pub fn textured(color: Rgba, mix: f32, texture: Texture2D) -> Self {
        Self {
            color,
            mix,
            texture: Some(texture),
        }
    }

    /// Returns `true` if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        all_finite(&self.color) && self.mix.is_finite()
    }
}

impl Default for Albedo {
    fn default() -> Self {
        Self::untextured([1.0; 4])
    }
}

/// Light emitted by a surface regardless of the lights of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Emissive {
    /// The surface emits no light.
    #[default]
    None,
    /// The whole surface emits the same amount of light.
    Constant {
        /// The emission level.
        emission: f32,
    },
    /// The emission is modulated by a texture.
    Mapped {
        /// The emission level.
        emission: f32,
        /// The emission map.
        texture: Texture2D,
    },
}

impl Emissive {
    /// Returns `true` if the emission level is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Emissive::None => true,
            Emissive::Constant { emission } | Emissive::Mapped { emission, .. } => {
                emission.is_finite()
            }
        }
    }
}

/// Where surface normals come from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Normal {
    /// Interpolated vertex normals.
    #[default]
    Vertex,
    /// A tangent-space normal map.
    Mapped {
        /// The normal map.
        texture: Texture2D,
    },
}

/// Specular highlights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Specular {
    /// No specular highlights.
    #[default]
    None,
    /// The same highlight colour over the whole surface.
    Constant {
        /// The specular colour.
        color: Rgb,
        /// The specular exponent.
        exponent: f32,
    },
    /// The highlight colour is modulated by a texture.
    Mapped {
        /// The specular colour.
        color: Rgb,
        /// The specular exponent.
        exponent: f32,
        /// The specular map.
        texture: Texture2D,
    },
}

impl Specular {
    /// Returns `true` if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Specular::None => true,
            Specular::Constant { color, exponent } | Specular::Mapped { color, exponent, .. } => {
                all_finite(color) && exponent.is_finite()
            }
        }
    }
}

/// How much of the environment reflection is mixed into the surface colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentMix {
    /// A fixed mix factor.
    Constant {
        /// The mix factor, from 0.0 to 1.0.
        factor: f32,
    },
    /// A factor interpolated from the angle between the view and the normal.
    DotProduct {
        /// The factor at grazing angles.
        minimum: f32,
        /// The factor when viewed head-on.
        maximum: f32,
    },
    /// A factor read from a texture.
    Mapped {
        /// The mix map.
        texture: Texture2D,
    },
}

impl EnvironmentMix {
    /// Returns `true` if no factor is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            EnvironmentMix::Constant { factor } => factor.is_finite(),
            EnvironmentMix::DotProduct { minimum, maximum } => {
                minimum.is_finite() && maximum.is_finite()
            }
            EnvironmentMix::Mapped { .. } => true,
        }
    }
}

/// Environment reflections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// The reflected environment.
    pub texture: TextureCube,
    /// How the reflection is mixed into the surface colour.
    pub mix: EnvironmentMix,
}

/// The opacity of a translucent surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// A fixed opacity.
    Constant {
        /// The opacity, from 0.0 to 1.0.
        opacity: f32,
    },
    /// An opacity that fades as the surface nears the geometry behind it.
    DepthFaded {
        /// The opacity, from 0.0 to 1.0.
        opacity: f32,
        /// The distance over which the surface fades out.
        distance: f32,
    },
}

impl Alpha {
    /// Returns `true` if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Alpha::Constant { opacity } => opacity.is_finite(),
            Alpha::DepthFaded { opacity, distance } => opacity.is_finite() && distance.is_finite(),
        }
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Alpha::Constant { opacity: 1.0 }
    }
}

/// Refraction of the scene behind a translucent surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refractive {
    /// The strength of the distortion.
    pub scale: f32,
    /// If `true`, only geometry behind the surface is refracted, which needs
    /// the scene depth as a texture.
    pub masked: bool,
}

impl Refractive {
    /// Returns `true` if the scale is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite()
    }
}

/// The properties shared by every lit surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    /// The base colour.
    pub albedo: Albedo,
    /// Emitted light.
    pub emissive: Emissive,
    /// Environment reflections, if any.
    pub environment: Option<Environment>,
    /// The source of surface normals.
    pub normal: Normal,
    /// Specular highlights.
    pub specular: Specular,
}

impl Surface {
    /// Returns `true` if no property holds a NaN or infinite value.
    pub fn is_finite(&self) -> bool {
        self.albedo.is_finite()
            && self.emissive.is_finite()
            && self.environment.map_or(true, |e| e.mix.is_finite())
            && self.specular.is_finite()
    }
}
