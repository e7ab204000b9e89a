//! Rotation compatibility integration tests
//!
//! Runs the scorer across every ordered pair in the built-in catalog to
//! pin down the scoring scale and the strict rule precedence.

use crop_planner_engine::rotation::{companion_conflicts, score_rotation};
use crop_planner_engine::CropCatalog;
use proptest::prelude::*;

fn catalog_ids() -> Vec<String> {
    CropCatalog::builtin()
        .crop_ids()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Whole-catalog scoring matrix
// =============================================================================

mod scoring_matrix {
    use super::*;

    #[test]
    fn every_pair_lands_on_the_scale() {
        let catalog = CropCatalog::builtin();
        for prev_id in catalog_ids() {
            for next_id in catalog_ids() {
                let prev = catalog.crop(&prev_id).unwrap();
                let next = catalog.crop(&next_id).unwrap();
                let result = score_rotation(prev, next);
                assert!(
                    matches!(result.score, 0 | 2 | 6 | 8 | 10),
                    "{prev_id} -> {next_id} scored {}",
                    result.score
                );
                assert!(!result.reason.is_empty());
            }
        }
    }

    #[test]
    fn compatibility_tracks_the_score() {
        let catalog = CropCatalog::builtin();
        for prev_id in catalog_ids() {
            for next_id in catalog_ids() {
                let prev = catalog.crop(&prev_id).unwrap();
                let next = catalog.crop(&next_id).unwrap();
                let result = score_rotation(prev, next);
                assert_eq!(
                    result.compatible,
                    result.score >= 6,
                    "{prev_id} -> {next_id}"
                );
            }
        }
    }

    #[test]
    fn following_yourself_is_never_recommended() {
        let catalog = CropCatalog::builtin();
        for id in catalog_ids() {
            let crop = catalog.crop(&id).unwrap();
            let result = score_rotation(crop, crop);
            assert!(!result.compatible, "{id} after itself");
        }
    }

    #[test]
    fn the_perfect_score_requires_a_nitrogen_fixer() {
        let catalog = CropCatalog::builtin();
        for prev_id in catalog_ids() {
            for next_id in catalog_ids() {
                let prev = catalog.crop(&prev_id).unwrap();
                let next = catalog.crop(&next_id).unwrap();
                if score_rotation(prev, next).score == 10 {
                    assert!(prev.fixes_nitrogen(), "{prev_id} -> {next_id}");
                }
            }
        }
    }
}

// =============================================================================
// Companion conflicts
// =============================================================================

mod companions {
    use super::*;

    #[test]
    fn mutual_antagonists_report_both_directions() {
        let catalog = CropCatalog::builtin();
        let broccoli = catalog.crop("broccoli").unwrap();
        let tomato = catalog.crop("tomato").unwrap();
        let conflicts = companion_conflicts(broccoli, tomato);
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn friendly_pairs_report_nothing() {
        let catalog = CropCatalog::builtin();
        let lettuce = catalog.crop("lettuce").unwrap();
        let carrot = catalog.crop("carrot").unwrap();
        assert!(companion_conflicts(lettuce, carrot).is_empty());
    }

    #[test]
    fn conflict_listing_is_order_independent() {
        let catalog = CropCatalog::builtin();
        let broccoli = catalog.crop("broccoli").unwrap();
        let tomato = catalog.crop("tomato").unwrap();
        assert_eq!(
            companion_conflicts(broccoli, tomato).len(),
            companion_conflicts(tomato, broccoli).len()
        );
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_scoring_is_deterministic(prev_idx in 0usize..8, next_idx in 0usize..8) {
        let catalog = CropCatalog::builtin();
        let ids = catalog_ids();
        let prev = catalog.crop(&ids[prev_idx]).unwrap();
        let next = catalog.crop(&ids[next_idx]).unwrap();
        let a = score_rotation(prev, next);
        let b = score_rotation(prev, next);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.compatible, b.compatible);
        prop_assert_eq!(a.reason, b.reason);
    }
}
