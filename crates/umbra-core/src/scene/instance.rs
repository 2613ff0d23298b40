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

//! Renderable instances.

use std::hash::{Hash, Hasher};
use std::{ops::Deref, sync::Arc};

use crate::asset::{MeshHandle, OpaqueMaterial, TranslucentMaterial};
use crate::identity::{InstanceId, MaterialId};
use crate::renderer::Transform;
use crate::visit::{VisitResult, Visitor};

/// The faces of a mesh that are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceSelection {
    /// Front faces only.
    #[default]
    Front,
    /// Back faces only.
    Back,
    /// Both sides.
    FrontAndBack,
}

/// The data shared by every kind of instance, parameterized by the material
/// family the instance accepts.
#[derive(Debug)]
pub struct InstanceData<M> {
    /// The identity of the instance.
    pub id: InstanceId,
    /// The mesh the instance draws.
    pub mesh: MeshHandle,
    /// The object-to-world transform.
    pub transform: Transform,
    /// The material of the instance.
    pub material: M,
    /// The faces that are rendered.
    pub faces: FaceSelection,
}

macro_rules! instance_handle {
    ($(#[$meta:meta])* $name:ident, $material:ty) => {
        $(#[$meta])*
        ///
        /// Cloning is cheap and shares the instance. Two handles are equal when
        /// they share an [`InstanceId`].
        #[derive(Debug, Clone)]
        pub struct $name(Arc<InstanceData<$material>>);

        impl $name {
            /// Creates an instance.
            pub fn new(
                id: InstanceId,
                mesh: MeshHandle,
                transform: Transform,
                material: $material,
                faces: FaceSelection,
            ) -> Self {
                Self(Arc::new(InstanceData {
                    id,
                    mesh,
                    transform,
                    material,
                    faces,
                }))
            }

            /// Returns the identity of the instance.
            pub fn id(&self) -> InstanceId {
                self.0.id
            }

            /// Returns the identity of the instance's material.
            pub fn material_id(&self) -> MaterialId {
                self.0.material.id()
            }
        }

        impl Deref for $name {
            type Target = InstanceData<$material>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.id == other.0.id
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.id.hash(state);
            }
        }
    };
}

instance_handle!(
    /// An instance drawn with an opaque material.
    OpaqueInstance,
    OpaqueMaterial
);
instance_handle!(
    /// An instance drawn with a translucent material.
    TranslucentInstance,
    TranslucentMaterial
);

/// Any renderable instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instance {
    /// An opaque instance.
    Opaque(OpaqueInstance),
    /// A translucent instance.
    Translucent(TranslucentInstance),
}

impl Instance {
    /// Returns the identity of the instance.
    pub fn id(&self) -> InstanceId {
        match self {
            Instance::Opaque(instance) => instance.id(),
            Instance::Translucent(instance) => instance.id(),
        }
    }

    /// Dispatches to the visitor method matching this instance's variant.
    pub fn accept<V: InstanceVisitor>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            Instance::Opaque(instance) => visitor.opaque(instance),
            Instance::Translucent(instance) => visitor.translucent(instance),
        }
    }
}

impl From<OpaqueInstance> for Instance {
    fn from(instance: OpaqueInstance) -> Self {
        Instance::Opaque(instance)
    }
}

impl From<TranslucentInstance> for Instance {
    fn from(instance: TranslucentInstance) -> Self {
        Instance::Translucent(instance)
    }
}

/// A visitor over the [`Instance`] variants.
pub trait InstanceVisitor: Visitor {
    /// Visits an opaque instance.
    fn opaque(&mut self, instance: &OpaqueInstance) -> VisitResult<Self>;

    /// Visits a translucent instance.
    fn translucent(&mut self, instance: &TranslucentInstance) -> VisitResult<Self>;
}
