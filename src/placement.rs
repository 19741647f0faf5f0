use uuid::Uuid;

use crate::models::{
    DerivedDataPoints, DerivedOverrides, PlacementFeatures, PlacementResult,
};
use crate::readiness::{clamp_pct, round2};
use crate::store::{RecordStore, StudentNotFound};

/// Static baseline standing in for a future trained-model confidence metric.
pub const BASELINE_CONFIDENCE: f64 = 85.5;

// Direct strategy: all seven features supplied by the caller.
const DIRECT_SKILL_WEIGHT: f64 = 30.0;
const DIRECT_PROJECT_WEIGHT: f64 = 15.0;
const DIRECT_PROJECT_CAP: u32 = 5;
const DIRECT_COMM_WEIGHT: f64 = 10.0;
const DIRECT_CORE_WEIGHT: f64 = 20.0;
const INTERNSHIP_BASE: f64 = 10.0;
const INTERNSHIP_DURATION_CAP: f64 = 5.0;

// Store-derived strategy: marks and attendance aggregated from history.
// Weights intentionally differ from the direct table; both schemes are
// live request shapes and must stay independently testable.
const DERIVED_MARKS_WEIGHT: f64 = 0.35;
const DERIVED_ATTENDANCE_WEIGHT: f64 = 0.15;
const DERIVED_SKILL_WEIGHT: f64 = 0.30;
const DERIVED_PROJECT_POINTS: f64 = 5.0;
const DERIVED_FLOOR: f64 = 5.0;
const DERIVED_CEILING: f64 = 99.9;

// Advisory thresholds, checked in fixed priority order.
const SKILL_ADVISORY_FLOOR: f64 = 70.0;
const PROJECT_ADVISORY_FLOOR: u32 = 3;
const MIN_INTERNSHIP_MONTHS: u32 = 2;
const COMM_ADVISORY_FLOOR: f64 = 7.0;
const MARKS_ADVISORY_FLOOR: f64 = 65.0;

pub fn predict_direct(features: &PlacementFeatures) -> PlacementResult {
    let skill_term = clamp_pct(features.skill_readiness_score) / 100.0 * DIRECT_SKILL_WEIGHT;
    let project_term = features.project_count.min(DIRECT_PROJECT_CAP) as f64
        / DIRECT_PROJECT_CAP as f64
        * DIRECT_PROJECT_WEIGHT;
    let internship_term = internship_score(
        features.internship_status,
        &features.internship_type,
        features.internship_duration,
    );
    let comm_term =
        features.communication_rating.clamp(0.0, 10.0) / 10.0 * DIRECT_COMM_WEIGHT;
    let core_term = clamp_pct(features.core_subject_marks) / 100.0 * DIRECT_CORE_WEIGHT;

    let probability =
        (skill_term + project_term + internship_term + comm_term + core_term).clamp(0.0, 100.0);

    PlacementResult {
        placement_probability: round2(probability),
        confidence_score: BASELINE_CONFIDENCE,
        suggested_improvements: suggestions(
            features.skill_readiness_score,
            features.project_count,
            features.internship_status,
            features.internship_duration,
            features.communication_rating,
            features.core_subject_marks,
        ),
        data_points: None,
    }
}

/// Derived strategy: only a student id plus optional overrides; marks and
/// attendance come from the record store. Fails with [`StudentNotFound`]
/// when the id does not resolve, with no partial result.
pub async fn predict_for_student(
    store: &impl RecordStore,
    student_id: Uuid,
    overrides: &DerivedOverrides,
) -> anyhow::Result<PlacementResult> {
    if !store.student_exists(student_id).await? {
        return Err(StudentNotFound(student_id).into());
    }

    let marks = store.marks_for_student(student_id).await?;
    let attendance = store.attendance_for_student(student_id).await?;

    let avg_marks = if marks.is_empty() {
        0.0
    } else {
        marks.iter().map(|mark| mark.score).sum::<f64>() / marks.len() as f64
    };
    let attendance_pct = if attendance.is_empty() {
        0.0
    } else {
        attendance.iter().filter(|entry| entry.present).count() as f64
            / attendance.len() as f64
            * 100.0
    };

    let probability = (avg_marks * DERIVED_MARKS_WEIGHT
        + attendance_pct * DERIVED_ATTENDANCE_WEIGHT
        + overrides.project_count as f64 * DERIVED_PROJECT_POINTS
        + clamp_pct(overrides.skill_readiness_score) * DERIVED_SKILL_WEIGHT)
        .clamp(DERIVED_FLOOR, DERIVED_CEILING);

    Ok(PlacementResult {
        placement_probability: round2(probability),
        confidence_score: BASELINE_CONFIDENCE,
        suggested_improvements: suggestions(
            overrides.skill_readiness_score,
            overrides.project_count,
            overrides.internship_status,
            overrides.internship_duration,
            overrides.communication_rating,
            avg_marks,
        ),
        data_points: Some(DerivedDataPoints {
            avg_marks: round2(avg_marks),
            attendance_pct: round2(attendance_pct),
            mark_count: marks.len(),
            attendance_count: attendance.len(),
        }),
    })
}

fn internship_score(status: bool, kind: &str, duration_months: u32) -> f64 {
    if !status {
        return 0.0;
    }
    INTERNSHIP_BASE
        + internship_type_bonus(kind)
        + (duration_months as f64).min(INTERNSHIP_DURATION_CAP)
}

fn internship_type_bonus(kind: &str) -> f64 {
    match kind.to_lowercase().as_str() {
        "technical" => 10.0,
        "industrial" => 8.0,
        "research" => 7.0,
        "corporate" => 5.0,
        _ => 0.0,
    }
}

fn suggestions(
    skill_readiness_score: f64,
    project_count: u32,
    internship_status: bool,
    internship_duration: u32,
    communication_rating: f64,
    core_subject_marks: f64,
) -> Vec<String> {
    let mut advisories = Vec::new();

    if skill_readiness_score < SKILL_ADVISORY_FLOOR {
        advisories
            .push("Focus on upskilling core competencies required by industry roles.".to_string());
    }
    if project_count < PROJECT_ADVISORY_FLOOR {
        advisories.push(
            "Build more full-stack or domain-specific projects to showcase practical skills."
                .to_string(),
        );
    }
    if !internship_status || internship_duration < MIN_INTERNSHIP_MONTHS {
        advisories.push(
            "Apply for summer internships or open-source programs to gain industry experience."
                .to_string(),
        );
    }
    if communication_rating < COMM_ADVISORY_FLOOR {
        advisories.push(
            "Participate in mock interviews and group discussions to improve communication skills."
                .to_string(),
        );
    }
    if core_subject_marks < MARKS_ADVISORY_FLOOR {
        advisories
            .push("Revise core CS subjects (OS, DBMS, CN, DSA) for technical rounds.".to_string());
    }

    if advisories.is_empty() {
        advisories.push(
            "Profile looks great! Focus on advanced competitive programming or system design."
                .to_string(),
        );
    }

    advisories
}
