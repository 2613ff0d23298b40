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

//! Read-only views of meshes stored by the geometry layer.

use std::{ops::Deref, sync::Arc};

use crate::identity::MeshId;
use crate::math::Aabb;

/// What the classification layer knows about a mesh: its identity, the size
/// of its buffers and its object-space bounds.
#[derive(Debug, PartialEq)]
pub struct Mesh {
    /// The identity of the mesh in the geometry storage.
    pub id: MeshId,
    /// The number of vertices in the vertex buffer.
    pub vertex_count: u32,
    /// The number of indices in the index buffer.
    pub index_count: u32,
    /// The object-space bounds, precomputed by the geometry layer.
    pub bounds: Aabb,
}

/// A thread-safe, reference-counted handle to a mesh.
///
/// Cloning a handle is cheap, as it only increments the reference count.
/// Handles compare equal when they refer to the same [`MeshId`].
#[derive(Debug, Clone)]
pub struct MeshHandle(Arc<Mesh>);

impl MeshHandle {
    /// Creates a new `MeshHandle` that takes ownership of the mesh description.
    pub fn new(mesh: Mesh) -> Self {
        Self(Arc::new(mesh))
    }
}

impl Deref for MeshHandle {
    type Target = Mesh;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for MeshHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for MeshHandle {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    fn mesh(id: u64) -> Mesh {
        Mesh {
            id: MeshId::from_raw(id),
            vertex_count: 24,
            index_count: 36,
            bounds: Aabb::new([-1.0; 3], [1.0; 3]),
        }
    }

    #[test]
    fn test_mesh_handle_derefs_to_mesh() {
        let handle = MeshHandle::new(mesh(1));
        assert_eq!(handle.index_count, 36);
        assert_eq!(handle.bounds.size(), [2.0; 3]);
    }

    #[test]
    fn test_mesh_handle_equality_is_by_id() {
        let a = MeshHandle::new(mesh(1));
        let b = a.clone();
        let c = MeshHandle::new(mesh(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
