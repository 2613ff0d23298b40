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

//! Object-to-world transforms of instances.

use crate::math::{Matrix4, Quaternion, Vector3, MATRIX4_IDENTITY, QUATERNION_IDENTITY};
use crate::visit::{VisitResult, Visitor};

/// A transform given directly as a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix {
    /// The object-to-world matrix.
    pub matrix: Matrix4,
}

/// A transform given as a translation, an orientation and a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTos {
    /// The translation applied last.
    pub translation: Vector3,
    /// The orientation applied after scaling.
    pub orientation: Quaternion,
    /// The per-axis scale applied first.
    pub scale: Vector3,
}

impl Default for TransformTos {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            orientation: QUATERNION_IDENTITY,
            scale: [1.0; 3],
        }
    }
}

/// An object-to-world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// An explicit matrix.
    Matrix(TransformMatrix),
    /// Translation, orientation and scale.
    TranslationOrientationScale(TransformTos),
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Matrix(TransformMatrix {
            matrix: MATRIX4_IDENTITY,
        })
    }
}

impl Transform {
    /// Creates a transform that only translates.
    pub fn translation(translation: Vector3) -> Self {
        Transform::TranslationOrientationScale(TransformTos {
            translation,
            ..TransformTos::default()
        })
    }

    /// Dispatches to the visitor method matching this transform's variant.
    pub fn accept<V: TransformVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            Transform::Matrix(t) => visitor.matrix(t),
            Transform::TranslationOrientationScale(t) => visitor.translation_orientation_scale(t),
        }
    }
}

/// A visitor over the [`Transform`] variants.
pub trait TransformVisitor: Visitor {
    /// Visits a matrix transform.
    fn matrix(&mut self, transform: &TransformMatrix) -> VisitResult<Self>;

    /// Visits a translation/orientation/scale transform.
    fn translation_orientation_scale(&mut self, transform: &TransformTos) -> VisitResult<Self>;
}
