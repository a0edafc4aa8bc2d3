//! Shared spatial validation.
//!
//! One pure module serves both callers of spatial reasoning: Layer 3
//! grounding compares a preposition's expected placement against the actual
//! scene, and a host's object mover can apply the same expected placement.

use latn_core::{Dimension, GroundedEntity, SemanticVector};

/// Perfect spatial agreement.
pub const SCORE_EXACT: f32 = 1.0;
/// Within three tolerances.
pub const SCORE_GOOD: f32 = 0.8;
/// Within six tolerances.
pub const SCORE_ACCEPTABLE: f32 = 0.5;
/// Contradicted by the scene.
pub const SCORE_POOR: f32 = 0.1;

/// Direction factors of a preposition, read from its `dir_*` dimensions.
#[must_use]
pub fn direction_factors(prep: &SemanticVector) -> [f32; 3] {
    [
        prep.get(Dimension::DirX),
        prep.get(Dimension::DirY),
        prep.get(Dimension::DirZ),
    ]
}

/// Where `moving` would sit to satisfy `prep` relative to `reference`:
/// offset along each directed axis by both half-extents plus the factor's
/// magnitude.
#[must_use]
pub fn expected_position(
    moving: &dyn GroundedEntity,
    reference: &dyn GroundedEntity,
    prep: &SemanticVector,
) -> [f32; 3] {
    let factors = direction_factors(prep);
    let ref_pos = reference.position();
    let ref_half = reference.half_extents();
    let moving_half = moving.half_extents();

    let mut expected = ref_pos;
    for axis in 0..3 {
        let factor = factors[axis];
        if factor > 0.0 {
            expected[axis] = ref_pos[axis] + ref_half[axis] + moving_half[axis] + factor.abs();
        } else if factor < 0.0 {
            expected[axis] = ref_pos[axis] - ref_half[axis] - moving_half[axis] - factor.abs();
        }
    }
    expected
}

/// Score how well the actual placement of `moving` satisfies
/// `prep(reference)`, in the banded scale `1.0 / 0.8 / 0.5 / 0.1`.
///
/// Directional prepositions compare the actual position against
/// [`expected_position`] with a tolerance of half the larger entity
/// dimension; when size data is missing the comparison degrades to a sign
/// test of the displacement against the direction vector. Proximity
/// prepositions use a raw distance threshold instead. Prepositions with no
/// spatial content score neutrally.
#[must_use]
pub fn spatial_score(
    moving: &dyn GroundedEntity,
    reference: &dyn GroundedEntity,
    prep: &SemanticVector,
) -> f32 {
    let factors = direction_factors(prep);
    let has_direction = factors.iter().any(|f| *f != 0.0);

    if has_direction {
        if has_size_data(moving) && has_size_data(reference) {
            let expected = expected_position(moving, reference, prep);
            let actual = moving.position();
            let distance = euclidean(expected, actual);
            let tolerance = max_component(moving.half_extents())
                .max(max_component(reference.half_extents()))
                * 0.5;
            let score = band(distance, tolerance);
            tracing::debug!(
                prep = prep.word().unwrap_or("?"),
                moving = moving.entity_id(),
                reference = reference.entity_id(),
                distance,
                tolerance,
                score,
                "spatial validation"
            );
            score
        } else {
            // No usable geometry: fall back to a displacement sign test.
            let displacement = sub(moving.position(), reference.position());
            let dot: f32 = displacement
                .iter()
                .zip(factors.iter())
                .map(|(d, f)| d * f)
                .sum();
            if dot > 0.0 { SCORE_EXACT } else { 0.0 }
        }
    } else if prep.isa(Dimension::SpatialProximity) {
        let distance = euclidean(moving.position(), reference.position());
        let threshold = max_component(moving.half_extents())
            + max_component(reference.half_extents())
            + 1.0;
        if distance <= threshold {
            SCORE_EXACT
        } else {
            SCORE_POOR
        }
    } else {
        SCORE_EXACT
    }
}

fn band(distance: f32, tolerance: f32) -> f32 {
    if distance <= tolerance {
        SCORE_EXACT
    } else if distance <= tolerance * 3.0 {
        SCORE_GOOD
    } else if distance <= tolerance * 6.0 {
        SCORE_ACCEPTABLE
    } else {
        SCORE_POOR
    }
}

fn has_size_data(entity: &dyn GroundedEntity) -> bool {
    let v = entity.vector();
    v.get(Dimension::ScaleX) != 0.0
        || v.get(Dimension::ScaleY) != 0.0
        || v.get(Dimension::ScaleZ) != 0.0
}

fn max_component(values: [f32; 3]) -> f32 {
    values[0].max(values[1]).max(values[2])
}

fn euclidean(a: [f32; 3], b: [f32; 3]) -> f32 {
    sub(a, b).iter().map(|d| d * d).sum::<f32>().sqrt()
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{SceneEntity, SceneObject};

    fn entity(name: &str, pos: [f32; 3], scale: [f32; 3]) -> SceneEntity {
        let vector = SemanticVector::from_values(&[
            (Dimension::Noun, 1.0),
            (Dimension::LocX, pos[0]),
            (Dimension::LocY, pos[1]),
            (Dimension::LocZ, pos[2]),
            (Dimension::ScaleX, scale[0]),
            (Dimension::ScaleY, scale[1]),
            (Dimension::ScaleZ, scale[2]),
        ]);
        SceneEntity::Object(SceneObject::new(name, vector))
    }

    fn above() -> SemanticVector {
        SemanticVector::from_values(&[
            (Dimension::Prep, 1.0),
            (Dimension::SpatialLocation, 1.0),
            (Dimension::DirY, 1.0),
        ])
        .with_word("above")
    }

    fn under() -> SemanticVector {
        SemanticVector::from_values(&[
            (Dimension::Prep, 1.0),
            (Dimension::SpatialLocation, 1.0),
            (Dimension::DirY, -1.0),
        ])
        .with_word("under")
    }

    fn near() -> SemanticVector {
        SemanticVector::from_values(&[(Dimension::Prep, 1.0), (Dimension::SpatialProximity, 1.0)])
            .with_word("near")
    }

    #[test]
    fn expected_position_offsets_by_both_half_extents() {
        let cube = entity("cube", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let expected = expected_position(&cube, &table, &above());
        // 0 + 0.5 (table half) + 0.5 (cube half) + 1.0 (factor)
        assert_eq!(expected, [0.0, 2.0, 0.0]);
    }

    #[test]
    fn satisfied_relation_scores_exact() {
        let cube = entity("cube", [0.0, 2.0, 0.0], [1.0, 1.0, 1.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(spatial_score(&cube, &table, &above()), SCORE_EXACT);
    }

    #[test]
    fn contradicted_relation_scores_poor() {
        // Box above the table, but the relation says "under".
        let cube = entity("cube", [0.0, 1.0, 0.0], [1.0, 1.0, 1.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(spatial_score(&cube, &table, &under()), SCORE_POOR);
    }

    #[test]
    fn near_misses_fall_into_middle_bands() {
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        // Expected y = 2.0, tolerance = 0.25.
        let slightly_off = entity("cube", [0.0, 2.5, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(spatial_score(&slightly_off, &table, &above()), SCORE_GOOD);
        let further_off = entity("cube", [0.0, 3.2, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(
            spatial_score(&further_off, &table, &above()),
            SCORE_ACCEPTABLE
        );
    }

    #[test]
    fn proximity_uses_raw_distance() {
        let sphere = entity("sphere", [1.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(spatial_score(&sphere, &table, &near()), SCORE_EXACT);

        let far_sphere = entity("sphere", [10.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(spatial_score(&far_sphere, &table, &near()), SCORE_POOR);
    }

    #[test]
    fn missing_size_data_degrades_to_sign_test() {
        let cube = entity("cube", [0.0, 3.0, 0.0], [0.0, 0.0, 0.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        assert_eq!(spatial_score(&cube, &table, &above()), SCORE_EXACT);
        assert_eq!(spatial_score(&cube, &table, &under()), 0.0);
    }

    #[test]
    fn non_spatial_prepositions_score_neutrally() {
        let a = entity("cube", [0.0, 0.0, 0.0], [1.0; 3]);
        let b = entity("cube", [5.0, 5.0, 5.0], [1.0; 3]);
        let of = SemanticVector::from_values(&[
            (Dimension::Prep, 1.0),
            (Dimension::RelationalPossession, 1.0),
        ]);
        assert_eq!(spatial_score(&a, &b, &of), SCORE_EXACT);
    }

    #[test]
    fn sphere_radius_feeds_the_tolerance() {
        let sphere = entity("sphere", [0.0, 4.0, 0.0], [2.0, 2.0, 2.0]);
        let table = entity("table", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        // expected y = 0 + 0.5 + 2.0 + 1.0 = 3.5; distance 0.5; tolerance
        // max(2.0, 0.5) * 0.5 = 1.0 -> exact band
        assert_eq!(spatial_score(&sphere, &table, &above()), SCORE_EXACT);
    }
}
