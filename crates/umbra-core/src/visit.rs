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

//! The dispatch protocol for closed variant families.
//!
//! Every closed family of the crate (lights, shadows, shadow map descriptions,
//! transforms, materials and instances) is an enum with an `accept` method.
//! `accept` matches on the receiver and makes exactly one call into the
//! family's visitor trait, the one matching the receiver's variant, and returns
//! whatever that method returned.
//!
//! Family visitor traits all extend [`Visitor`], which fixes the output and
//! error types of a visitor once. Adding a variant to a family adds a method to
//! its visitor trait, so every visitor in the workspace stops compiling until it
//! handles the new case.
//!
//! Visitors that need the three failure channels of the crate use
//! [`DispatchError`](crate::DispatchError) as their error type. Visitors that
//! cannot fail use [`Infallible`] and unwrap the result with [`infallible`].
//!
//! | Family | Visitor trait |
//! |--------|---------------|
//! | [`Light`](crate::renderer::Light) | [`LightVisitor`](crate::renderer::LightVisitor) |
//! | [`Shadow`](crate::renderer::Shadow) | [`ShadowVisitor`](crate::renderer::ShadowVisitor) |
//! | [`ShadowMapDescription`](crate::renderer::ShadowMapDescription) | [`ShadowMapDescriptionVisitor`](crate::renderer::ShadowMapDescriptionVisitor) |
//! | [`Transform`](crate::renderer::Transform) | [`TransformVisitor`](crate::renderer::TransformVisitor) |
//! | [`OpaqueMaterial`](crate::asset::OpaqueMaterial) | [`OpaqueMaterialVisitor`](crate::asset::OpaqueMaterialVisitor) |
//! | [`TranslucentMaterial`](crate::asset::TranslucentMaterial) | [`TranslucentMaterialVisitor`](crate::asset::TranslucentMaterialVisitor) |
//! | [`Instance`](crate::scene::Instance) | [`InstanceVisitor`](crate::scene::InstanceVisitor) |

use std::convert::Infallible;

/// The common part of every family visitor: what it produces and how it fails.
pub trait Visitor {
    /// The value returned by every visit method.
    type Output;
    /// The error returned by every visit method.
    type Error;
}

/// The result of a single visit performed by `V`.
pub type VisitResult<V> = Result<<V as Visitor>::Output, <V as Visitor>::Error>;

/// Extracts the value of a visit that cannot fail.
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
