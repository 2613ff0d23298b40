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

//! Plain value types exchanged with the math and geometry layers.
//!
//! Vector and matrix arithmetic lives outside this crate; these types only
//! carry values through the classification layer, laid out the way GPU uniform
//! structures expect them.

/// A 3-component vector.
pub type Vector3 = [f32; 3];

/// A rotation quaternion stored as `[x, y, z, w]`.
pub type Quaternion = [f32; 4];

/// A column-major 4x4 matrix.
pub type Matrix4 = [[f32; 4]; 4];

/// A linear RGB colour.
pub type Rgb = [f32; 3];

/// A linear RGBA colour.
pub type Rgba = [f32; 4];

/// The identity matrix.
pub const MATRIX4_IDENTITY: Matrix4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// The identity rotation.
pub const QUATERNION_IDENTITY: Quaternion = [0.0, 0.0, 0.0, 1.0];

/// An axis-aligned bounding box in object space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub lower: Vector3,
    /// The corner with the largest coordinates.
    pub upper: Vector3,
}

impl Aabb {
    /// Creates a box from its two corners.
    pub const fn new(lower: Vector3, upper: Vector3) -> Self {
        Self { lower, upper }
    }

    /// Returns the extent of the box along each axis.
    pub fn size(&self) -> Vector3 {
        [
            self.upper[0] - self.lower[0],
            self.upper[1] - self.lower[1],
            self.upper[2] - self.lower[2],
        ]
    }

    /// Returns the centre of the box.
    pub fn center(&self) -> Vector3 {
        [
            (self.lower[0] + self.upper[0]) * 0.5,
            (self.lower[1] + self.upper[1]) * 0.5,
            (self.lower[2] + self.upper[2]) * 0.5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_size_and_center() {
        let aabb = Aabb::new([-1.0, 0.0, -2.0], [1.0, 4.0, 2.0]);
        assert_eq!(aabb.size(), [2.0, 4.0, 4.0]);
        assert_eq!(aabb.center(), [0.0, 2.0, 0.0]);
    }
}
