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

//! Unique, monotonically increasing identities.
//!
//! Identities are minted by an [`IdAllocator`], a counter that can be shared
//! between threads. Values are never reused: a counter only ever moves forward,
//! and every value it hands out is strictly greater than all the values it
//! handed out before.
//!
//! Material identities have a process-wide allocator reachable through
//! [`MaterialId::fresh`]. Two materials carrying the same [`MaterialId`] are two
//! versions of the same logical material.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// A value type that can be minted by an [`IdAllocator`].
pub trait Identity: Copy + Ord + Hash + fmt::Debug {
    /// Wraps a raw counter value.
    fn from_raw(raw: u64) -> Self;

    /// Returns the raw counter value this identity was created from.
    fn raw(self) -> u64;
}

macro_rules! identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl Identity for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

identity!(
    /// Identifies a logical material across all of its versions.
    MaterialId
);
identity!(
    /// Identifies a renderable instance.
    InstanceId
);
identity!(
    /// Identifies a light.
    LightId
);
identity!(
    /// Identifies a texture owned by the asset layer.
    TextureId
);
identity!(
    /// Identifies a mesh owned by the geometry storage.
    MeshId
);

/// An atomic counter handing out identities of type `T`.
///
/// `fresh` is a single atomic increment-and-fetch, so concurrent callers
/// observe one total order with no duplicated and no skipped values.
/// Allocators are plain values: tests and subsystems can create their own
/// instead of sharing a global one.
pub struct IdAllocator<T> {
    next: AtomicU64,
    _marker: PhantomData<fn() -> T>,
}

static MATERIAL_IDS: IdAllocator<MaterialId> = IdAllocator::new();

impl<T: Identity> IdAllocator<T> {
    /// Creates an allocator whose first identity has the raw value `0`.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates an allocator whose first identity has the raw value `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
            _marker: PhantomData,
        }
    }

    /// Issues the next identity.
    pub fn fresh(&self) -> T {
        T::from_raw(self.next.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the raw value the next call to [`IdAllocator::fresh`] will use.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdAllocator<MaterialId> {
    /// The process-wide material identity allocator.
    pub fn global() -> &'static Self {
        &MATERIAL_IDS
    }
}

impl MaterialId {
    /// Issues a new material identity from the process-wide allocator.
    pub fn fresh() -> Self {
        IdAllocator::global().fresh()
    }
}

impl<T: Identity> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("next", &self.next.load(Ordering::Relaxed))
            .finish()
    }
}
