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

use std::collections::HashSet;

use umbra_core::asset::{
    Albedo, Alpha, Normal, OpaqueMaterial, OpaqueRegular, Refractive, Specular, Surface,
    Texture2D, TranslucentRefractive, TranslucentRegular,
};
use umbra_core::label::Label;
use umbra_core::{ConstraintError, Identity, InstanceId, LightId, TextureId};

use super::*;
use crate::test_support::{
    basic_shadow, camera, capabilities, opaque, opaque_with, spot, sun, translucent,
    translucent_with, variance_shadow,
};

fn scene(units: u32) -> SceneBuilder {
    SceneBuilder::new(camera(), capabilities(true, units))
}

// --- LIGHT GROUP RULES ---

#[test]
fn test_group_without_instances_fails() {
    let mut builder = scene(8);
    let mut group = builder.light_group("empty").unwrap();
    group.add_light(sun(1));
    assert_eq!(
        group.build(),
        Err(ConstraintError::LightGroupLacksInstances {
            group: "empty".to_string()
        })
    );
}

#[test]
fn test_group_without_lights_fails() {
    let mut builder = scene(8);
    let mut group = builder.light_group("dark").unwrap();
    group.add_instance(opaque(1)).unwrap();
    assert_eq!(
        group.build(),
        Err(ConstraintError::LightGroupLacksLights {
            group: "dark".to_string()
        })
    );
}

#[test]
fn test_empty_group_reports_missing_instances_first() {
    let mut builder = scene(8);
    let group = builder.light_group("nothing").unwrap();
    assert!(matches!(
        group.build(),
        Err(ConstraintError::LightGroupLacksInstances { .. })
    ));
}

#[test]
fn test_group_holds_exactly_what_was_added() {
    let mut builder = scene(8);
    let i1 = opaque(1);
    let l1 = sun(1);

    let mut group = builder.light_group("main").unwrap();
    group.add_instance(i1.clone()).unwrap().add_light(l1);
    // Set semantics.
    group.add_light(l1);
    group.add_instance(i1.clone()).unwrap();
    let group = group.build().unwrap();

    assert_eq!(group.name(), "main");
    assert_eq!(group.instances(), &HashSet::from([i1]));
    assert_eq!(group.lights(), &HashSet::from([l1]));

    let scene = builder.build();
    assert_eq!(scene.light_groups(), &[group]);
}

#[test]
fn test_duplicate_group_name_is_rejected() {
    let mut builder = scene(8);
    let mut group = builder.light_group("hall").unwrap();
    group.add_instance(opaque(1)).unwrap().add_light(sun(1));
    group.build().unwrap();

    assert_eq!(
        builder.light_group("hall").err(),
        Some(ConstraintError::LightGroupNameInUse {
            group: "hall".to_string()
        })
    );
}

#[test]
fn test_abandoned_group_does_not_classify() {
    let mut builder = scene(8);
    {
        let mut group = builder.light_group("draft").unwrap();
        group.add_instance(opaque(1)).unwrap();
        // Dropped without building.
    }
    assert!(builder.add_unlit(opaque(1)).is_ok());
    assert!(builder.light_group("draft").is_ok());
}

// --- LIT / UNLIT EXCLUSIVITY ---

#[test]
fn test_lit_then_unlit_fails() {
    let mut builder = scene(8);
    let mut group = builder.light_group("g1").unwrap();
    group.add_instance(opaque(1)).unwrap().add_light(sun(1));
    group.build().unwrap();

    assert_eq!(
        builder.add_unlit(opaque(1)).err(),
        Some(ConstraintError::InstanceAlreadyLit {
            instance: InstanceId::from_raw(1),
            group: "g1".to_string(),
        })
    );
}

#[test]
fn test_unlit_then_lit_fails() {
    let mut builder = scene(8);
    builder.add_unlit(opaque(1)).unwrap();

    let mut group = builder.light_group("g1").unwrap();
    assert_eq!(
        group.add_instance(opaque(1)).err(),
        Some(ConstraintError::InstanceAlreadyUnlit {
            instance: InstanceId::from_raw(1),
        })
    );
}

#[test]
fn test_instance_may_belong_to_several_groups() {
    let mut builder = scene(8);
    for (name, light) in [("a", sun(1)), ("b", sun(2))] {
        let mut group = builder.light_group(name).unwrap();
        group.add_instance(opaque(1)).unwrap().add_light(light);
        group.build().unwrap();
    }

    // The first group the instance joined is the one reported.
    assert_eq!(
        builder.add_unlit(opaque(1)).err(),
        Some(ConstraintError::InstanceAlreadyLit {
            instance: InstanceId::from_raw(1),
            group: "a".to_string(),
        })
    );
}

#[test]
fn test_unlit_twice_is_idempotent() {
    let mut builder = scene(8);
    let instance = opaque(1);
    builder
        .add_unlit(instance.clone())
        .unwrap()
        .add_unlit(instance)
        .unwrap();
    assert_eq!(builder.build().unlit().len(), 1);
}

// --- CAPABILITIES ---

fn heavy_material() -> OpaqueMaterial {
    let texture = |id| Texture2D::new(TextureId::from_raw(id));
    OpaqueRegular::new(Surface {
        albedo: Albedo::textured([1.0; 4], 1.0, texture(1)),
        normal: Normal::Mapped {
            texture: texture(2),
        },
        specular: Specular::Mapped {
            color: [1.0; 3],
            exponent: 16.0,
            texture: texture(3),
        },
        ..Default::default()
    })
    .into()
}

#[test]
fn test_group_build_checks_texture_budget() {
    let instance = opaque_with(1, heavy_material());

    // LPSB + BT_NM_SM: 2 + 3 texture units.
    let mut builder = scene(4);
    let mut group = builder.light_group("spot").unwrap();
    group
        .add_instance(instance.clone())
        .unwrap()
        .add_light(spot(1, Some(basic_shadow())));
    assert_eq!(
        group.build(),
        Err(ConstraintError::TextureUnitsExceeded {
            label: "LPSB_BT_NM_SM".to_string(),
            required: 5,
            available: 4,
        })
    );

    let mut builder = scene(5);
    let mut group = builder.light_group("spot").unwrap();
    group
        .add_instance(instance)
        .unwrap()
        .add_light(spot(1, Some(basic_shadow())));
    assert!(group.build().is_ok());
}

#[test]
fn test_group_build_checks_depth_textures() {
    let mut builder = SceneBuilder::new(camera(), capabilities(false, 16));
    let mut group = builder.light_group("spot").unwrap();
    group
        .add_instance(opaque(1))
        .unwrap()
        .add_light(spot(1, Some(basic_shadow())));
    assert!(matches!(
        group.build(),
        Err(ConstraintError::DepthTexturesUnsupported { .. })
    ));
}

#[test]
fn test_group_labels_and_batches() {
    let mut builder = scene(8);
    let mut group = builder.light_group("room").unwrap();
    group
        .add_instance(opaque(1))
        .unwrap()
        .add_instance(opaque(2))
        .unwrap()
        .add_instance(opaque_with(3, heavy_material()))
        .unwrap()
        .add_light(sun(2))
        .add_light(sun(1));
    let group = group.build().unwrap();

    assert_eq!(group.labels().count(), 6);
    let batches = group.batches();
    let codes: Vec<String> = batches.iter().map(|(label, _)| label.code()).collect();
    assert_eq!(codes, vec!["LD_BT_NM_SM", "LD_BU_NV"]);

    let pair = |light, instance| (LightId::from_raw(light), InstanceId::from_raw(instance));
    assert_eq!(batches[0].1, vec![pair(1, 3), pair(2, 3)]);
    assert_eq!(
        batches[1].1,
        vec![pair(1, 1), pair(1, 2), pair(2, 1), pair(2, 2)]
    );
    assert_eq!(group.batches(), batches);
}

// --- MATERIAL VERSIONS ---

#[test]
fn test_material_version_conflict_is_rejected() {
    let original = OpaqueRegular::new(Surface::default());
    let edited = OpaqueRegular {
        surface: Surface {
            albedo: Albedo::untextured([1.0, 0.0, 0.0, 1.0]),
            ..original.surface
        },
        ..original
    };

    let mut builder = scene(8);
    builder.add_unlit(opaque_with(1, original.into())).unwrap();
    // Same version on another instance is fine.
    builder.add_unlit(opaque_with(2, original.into())).unwrap();

    let mut group = builder.light_group("g").unwrap();
    assert_eq!(
        group.add_instance(opaque_with(3, edited.into())).err(),
        Some(ConstraintError::MaterialVersionConflict {
            material: original.id,
        })
    );
}

#[test]
fn test_material_version_conflict_within_a_group() {
    let original = OpaqueRegular::new(Surface::default());
    let edited = OpaqueRegular {
        surface: Surface {
            normal: Normal::Mapped {
                texture: Texture2D::new(TextureId::from_raw(5)),
            },
            ..original.surface
        },
        ..original
    };

    let mut builder = scene(8);
    let mut group = builder.light_group("g").unwrap();
    group.add_instance(opaque_with(1, original.into())).unwrap();
    assert!(matches!(
        group.add_instance(opaque_with(2, edited.into())),
        Err(ConstraintError::MaterialVersionConflict { .. })
    ));
}

#[test]
fn test_non_finite_material_is_rejected_before_version_check() {
    let glossy = OpaqueRegular::new(Surface {
        specular: Specular::Constant {
            color: [1.0; 3],
            exponent: f32::NAN,
        },
        ..Default::default()
    });
    let statue = opaque_with(1, glossy.into());
    let lamp = spot(1, Some(basic_shadow()));

    let mut builder = scene(8);
    let nan = Some(ConstraintError::NonFiniteMaterial {
        material: glossy.id,
    });
    assert_eq!(builder.add_unlit(statue.clone()).err(), nan);
    assert_eq!(builder.add_shadow_caster(&lamp, statue.clone()).err(), nan);
    let mut group = builder.light_group("g").unwrap();
    assert_eq!(group.add_instance(statue).err(), nan);
}

#[test]
fn test_shared_material_is_not_a_conflict() {
    let glossy = OpaqueRegular::new(Surface {
        specular: Specular::Constant {
            color: [1.0; 3],
            exponent: 32.0,
        },
        ..Default::default()
    });
    let statue = opaque_with(1, glossy.into());
    let lamp = spot(1, Some(basic_shadow()));

    let mut builder = scene(8);
    builder.add_unlit(statue.clone()).unwrap();
    builder.add_shadow_caster(&lamp, statue).unwrap();
    assert_eq!(builder.build().shadows().len(), 1);
}

// --- LIGHT IDENTITIES ---

#[test]
fn test_group_rejects_same_id_lights_of_other_variants() {
    let mut builder = scene(8);
    let mut group = builder.light_group("g").unwrap();
    group
        .add_instance(opaque(1))
        .unwrap()
        .add_light(spot(1, Some(basic_shadow())))
        .add_light(spot(1, Some(variance_shadow())));
    assert_eq!(
        group.build().err(),
        Some(ConstraintError::LightVersionConflict {
            light: LightId::from_raw(1)
        })
    );

    // The failed group classified nothing.
    builder.add_unlit(opaque(1)).unwrap();
}

#[test]
fn test_light_variants_are_checked_across_the_scene() {
    let mut builder = scene(8);
    builder
        .add_shadow_caster(&spot(1, Some(basic_shadow())), opaque(1))
        .unwrap();

    let mut group = builder.light_group("g").unwrap();
    group.add_instance(opaque(2)).unwrap().add_light(spot(1, None));
    assert!(matches!(
        group.build(),
        Err(ConstraintError::LightVersionConflict { .. })
    ));

    assert!(matches!(
        builder.add_translucent_lit(translucent(3), [sun(1)]),
        Err(ConstraintError::LightVersionConflict { .. })
    ));
    assert!(matches!(
        builder.add_translucent_lit(translucent(4), [sun(2), spot(2, None)]),
        Err(ConstraintError::LightVersionConflict { .. })
    ));

    // The same light again is not a conflict.
    let mut group = builder.light_group("g").unwrap();
    group
        .add_instance(opaque(2))
        .unwrap()
        .add_light(spot(1, Some(basic_shadow())));
    group.build().unwrap();
    builder
        .add_translucent_lit(translucent(3), [spot(1, Some(basic_shadow()))])
        .unwrap();
}

// --- TRANSLUCENTS ---

#[test]
fn test_translucents_keep_caller_order() {
    let mut builder = scene(8);
    builder
        .add_translucent_unlit(translucent(3))
        .unwrap()
        .add_translucent_lit(translucent(1), [sun(1), sun(2), sun(1)])
        .unwrap()
        .add_translucent_unlit(translucent(2))
        .unwrap();

    let scene = builder.build();
    let order: Vec<u64> = scene
        .translucents()
        .iter()
        .map(|entry| entry.instance().id().raw())
        .collect();
    assert_eq!(order, vec![3, 1, 2]);

    let lit = &scene.translucents()[1];
    assert_eq!(lit.lights(), &[sun(1), sun(2)]);
    let codes: Vec<String> = lit.lit_labels().map(|(_, label)| label.code()).collect();
    assert_eq!(codes, vec!["LD_AC_BU_NV", "LD_AC_BU_NV"]);
    assert!(scene.translucents()[0].lights().is_empty());
}

#[test]
fn test_lit_translucent_needs_lights() {
    let mut builder = scene(8);
    assert_eq!(
        builder.add_translucent_lit(translucent(1), []).err(),
        Some(ConstraintError::TranslucentLacksLights {
            instance: InstanceId::from_raw(1),
        })
    );
}

#[test]
fn test_translucent_labels_are_checked() {
    let glass = translucent_with(
        1,
        TranslucentRefractive::new(
            [1.0; 4],
            Normal::Vertex,
            Refractive {
                scale: 0.1,
                masked: true,
            },
        )
        .into(),
    );
    let mut builder = SceneBuilder::new(camera(), capabilities(false, 8));
    assert!(matches!(
        builder.add_translucent_unlit(glass),
        Err(ConstraintError::DepthTexturesUnsupported { .. })
    ));

    let faded = translucent_with(
        2,
        TranslucentRegular::new(
            Surface::default(),
            Alpha::DepthFaded {
                opacity: 0.5,
                distance: 1.0,
            },
        )
        .into(),
    );
    assert!(builder.add_translucent_lit(faded, [sun(1)]).is_err());
    assert!(builder.build().translucents().is_empty());
}

// --- SHADOWS ---

#[test]
fn test_scene_shadow_casters() {
    let light = spot(1, Some(basic_shadow()));
    let mut builder = scene(8);
    builder
        .add_shadow_caster(&light, opaque(2))
        .unwrap()
        .add_shadow_caster(&light, opaque(1))
        .unwrap();
    assert!(matches!(
        builder.add_shadow_caster(&sun(9), opaque(3)),
        Err(ConstraintError::LightHasNoShadow { .. })
    ));

    let scene = builder.build();
    let ids: Vec<u64> = scene
        .shadows()
        .casters(&light)
        .unwrap()
        .iter()
        .map(|c| c.id().raw())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_scene_shadow_casters_need_depth_textures_for_basic_shadows() {
    let mut builder = SceneBuilder::new(camera(), capabilities(false, 8));
    assert_eq!(
        builder
            .add_shadow_caster(&spot(1, Some(basic_shadow())), opaque(1))
            .err(),
        Some(ConstraintError::DepthTexturesUnsupported {
            label: "SB".to_string(),
        })
    );
}

#[test]
fn test_scene_lookup_by_group_name() {
    let mut builder = scene(8);
    let mut group = builder.light_group("porch").unwrap();
    group.add_instance(opaque(1)).unwrap().add_light(sun(1));
    group.build().unwrap();

    let scene = builder.build();
    assert!(scene.light_group("porch").is_some());
    assert!(scene.light_group("attic").is_none());
    assert_eq!(scene.capabilities().texture_units(), 8);
}
