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

//! Opaque texture handles.

use crate::identity::TextureId;

/// A handle to a two-dimensional texture owned by the asset layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture2D {
    id: TextureId,
}

impl Texture2D {
    /// Wraps the identity of a loaded texture.
    pub const fn new(id: TextureId) -> Self {
        Self { id }
    }

    /// Returns the identity of the texture.
    pub fn id(&self) -> TextureId {
        self.id
    }
}

/// A handle to a cube map owned by the asset layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureCube {
    id: TextureId,
}

impl TextureCube {
    /// Wraps the identity of a loaded cube map.
    pub const fn new(id: TextureId) -> Self {
        Self { id }
    }

    /// Returns the identity of the cube map.
    pub fn id(&self) -> TextureId {
        self.id
    }
}
