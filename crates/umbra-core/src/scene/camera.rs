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

use crate::renderer::{Projection, Transform};

/// The point of view a scene is rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera-to-world transform.
    pub view: Transform,
    /// The projection, computed by the projection setup stage.
    pub projection: Projection,
}

impl Camera {
    /// Creates a camera.
    pub fn new(view: Transform, projection: Projection) -> Self {
        Self { view, projection }
    }
}
