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

//! Read-only projection descriptors.

use crate::math::Matrix4;

/// The edges and clipping planes of a view frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// The x coordinate of the left edge on the near plane.
    pub left: f32,
    /// The x coordinate of the right edge on the near plane.
    pub right: f32,
    /// The y coordinate of the bottom edge on the near plane.
    pub bottom: f32,
    /// The y coordinate of the top edge on the near plane.
    pub top: f32,
    /// The distance to the near clipping plane.
    pub near: f32,
    /// The distance to the far clipping plane.
    pub far: f32,
}

/// A projection as built by the projection setup stage.
///
/// The matrix is computed elsewhere and passed through untouched; the frustum
/// is kept alongside it so that later stages (shadow map sizing, culling) can
/// read the planes without decomposing the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// The frustum the matrix was built from.
    pub frustum: Frustum,
    /// The resulting projection matrix.
    pub matrix: Matrix4,
}

impl Projection {
    /// Pairs a frustum with the matrix computed for it.
    pub const fn new(frustum: Frustum, matrix: Matrix4) -> Self {
        Self { frustum, matrix }
    }

    /// Returns the distance to the near clipping plane.
    pub fn near(&self) -> f32 {
        self.frustum.near
    }

    /// Returns the distance to the far clipping plane.
    pub fn far(&self) -> f32 {
        self.frustum.far
    }
}
