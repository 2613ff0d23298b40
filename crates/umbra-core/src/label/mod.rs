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

//! Shader-variant labels.
//!
//! A label names the shader and resource variant an instance, a light or a
//! combination of both needs. Every label has a short textual code, unique per
//! variant, and the number of texture units the variant binds.
//!
//! Labels are derived from material and light properties alone. Derivation
//! never looks at the scene or at the hardware; whether a label can actually be
//! rendered is decided separately by
//! [`Capabilities::check`](crate::renderer::Capabilities::check).
//!
//! Leaf labels describe a single property ([`AlbedoLabel`], [`ShadowLabel`],
//! ...). Composite labels ([`OpaqueLabel`], [`TranslucentLabel`],
//! [`LitLabel`]) join the codes of their parts with `_`, skipping empty codes,
//! add up their texture counts and need depth textures if any part does.

use std::fmt;

pub use composite::{LitLabel, MaterialLabel, OpaqueLabel, SurfaceLabel, TranslucentLabel};
pub use light::{LightLabel, ShadowLabel};
pub use material::{
    AlbedoLabel, AlphaLabel, DepthLabel, EmissiveLabel, EnvironmentLabel, NormalLabel,
    RefractiveLabel, SpecularLabel,
};

/// A compact descriptor of a shader/resource variant.
///
/// The code is the [`Display`](fmt::Display) form of the label.
pub trait Label: fmt::Display {
    /// The number of texture units the variant binds.
    fn textures_required(&self) -> u32;

    /// Returns `true` if the variant samples depth textures.
    fn requires_depth_textures(&self) -> bool {
        false
    }

    /// The textual code of the label.
    fn code(&self) -> String {
        self.to_string()
    }
}

/// Declares a leaf label: a fieldless enum whose variants each carry a code,
/// a texture count and a depth-texture requirement.
macro_rules! leaf_label {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($code:literal, $textures:literal, $depth:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant of the family.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The code of the variant, possibly empty.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::label::Label for $name {
            fn textures_required(&self) -> u32 {
                match self {
                    $($name::$variant => $textures,)+
                }
            }

            fn requires_depth_textures(&self) -> bool {
                match self {
                    $($name::$variant => $depth,)+
                }
            }
        }
    };
}

mod composite;
mod light;
mod material;

/// Writes the codes of `parts` separated by `_`, skipping empty codes.
fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[&dyn Label]) -> fmt::Result {
    let mut first = true;
    for part in parts {
        let code = part.to_string();
        if code.is_empty() {
            continue;
        }
        if !first {
            f.write_str("_")?;
        }
        f.write_str(&code)?;
        first = false;
    }
    Ok(())
}

fn sum_textures(parts: &[&dyn Label]) -> u32 {
    parts.iter().map(|part| part.textures_required()).sum()
}

fn any_depth(parts: &[&dyn Label]) -> bool {
    parts.iter().any(|part| part.requires_depth_textures())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_leaf_codes_are_unique_per_family() {
        fn unique<L: Label>(labels: &[L]) -> bool {
            let codes: HashSet<String> = labels.iter().map(Label::code).collect();
            codes.len() == labels.len()
        }

        assert!(unique(AlbedoLabel::ALL));
        assert!(unique(EmissiveLabel::ALL));
        assert!(unique(NormalLabel::ALL));
        assert!(unique(SpecularLabel::ALL));
        assert!(unique(EnvironmentLabel::ALL));
        assert!(unique(DepthLabel::ALL));
        assert!(unique(RefractiveLabel::ALL));
        assert!(unique(AlphaLabel::ALL));
        assert!(unique(ShadowLabel::ALL));
    }

    #[test]
    fn test_join_skips_empty_codes() {
        struct Joined<'a>(&'a [&'a dyn Label]);

        impl fmt::Display for Joined<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, self.0)
            }
        }

        let parts: [&dyn Label; 4] = [
            &EmissiveLabel::None,
            &AlbedoLabel::Textured,
            &SpecularLabel::None,
            &NormalLabel::Mapped,
        ];
        assert_eq!(Joined(&parts).to_string(), "BT_NM");
        assert_eq!(sum_textures(&parts), 2);
        assert!(!any_depth(&parts));
    }
}
