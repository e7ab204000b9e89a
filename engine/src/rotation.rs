//! Rotation compatibility scoring
//!
//! Judges whether planting one crop after another in the same field is
//! agronomically sound. The rules form a strict priority chain: an explicit
//! avoid-after listing always wins, then same-family pressure, then the
//! good-after bonus, then a neutral verdict.

use shared::models::{CropProfile, RotationAssessment};
use shared::types::Level;

/// Score planting `next` after `previous` in the same field, 0-10
pub fn score_rotation(previous: &CropProfile, next: &CropProfile) -> RotationAssessment {
    if next
        .rotation
        .avoid_after_families
        .iter()
        .any(|f| f == &previous.family)
    {
        return RotationAssessment {
            compatible: false,
            reason: format!(
                "{} should not follow {} ({} family): shared pests and diseases carry over",
                next.name, previous.name, previous.family
            ),
            score: 0,
        };
    }

    if previous.family == next.family {
        return RotationAssessment {
            compatible: false,
            reason: format!(
                "Both crops belong to the {} family; repeating a family builds pest and disease pressure",
                previous.family
            ),
            score: 2,
        };
    }

    if next
        .rotation
        .good_after_families
        .iter()
        .any(|f| f == &previous.family)
    {
        let nitrogen_bonus = previous.fixes_nitrogen()
            && next.nutrients.nitrogen_demand == Level::High;
        if nitrogen_bonus {
            return RotationAssessment {
                compatible: true,
                reason: format!(
                    "{} benefits from following {}, which fixed {} lbs/acre of nitrogen for this heavy feeder",
                    next.name, previous.name, previous.nutrients.nitrogen_fixed_lbs_per_acre
                ),
                score: 10,
            };
        }
        return RotationAssessment {
            compatible: true,
            reason: format!(
                "{} benefits from following the {} family",
                next.name, previous.family
            ),
            score: 8,
        };
    }

    RotationAssessment {
        compatible: true,
        reason: format!(
            "{} after {}: no specific benefits or conflicts",
            next.name, previous.name
        ),
        score: 6,
    }
}

/// Antagonist crops shared between two profiles, for interplanting checks
pub fn companion_conflicts(a: &CropProfile, b: &CropProfile) -> Vec<String> {
    let mut conflicts: Vec<String> = Vec::new();
    if a.antagonists.iter().any(|id| id == &b.id) {
        conflicts.push(format!("{} lists {} as an antagonist", a.name, b.name));
    }
    if b.antagonists.iter().any(|id| id == &a.id) {
        conflicts.push(format!("{} lists {} as an antagonist", b.name, a.name));
    }
    conflicts
}
