use crate::models::{ReadinessResult, RiskLevel};

const WEIGHT_MARKS: f64 = 0.30;
const WEIGHT_ATTENDANCE: f64 = 0.20;
const WEIGHT_LAB: f64 = 0.20;
const WEIGHT_SKILL_COVERAGE: f64 = 0.20;
const WEIGHT_PROJECTS: f64 = 0.10;

/// Each project fills 20% of the project category; five projects max it out.
const PROJECT_CREDIT: f64 = 20.0;

const LOW_RISK_FLOOR: f64 = 75.0;
const MEDIUM_RISK_FLOOR: f64 = 50.0;

pub fn score(
    avg_marks: f64,
    attendance_pct: f64,
    lab_score: f64,
    skill_coverage_pct: f64,
    project_count: u32,
    missing_skills: Vec<String>,
) -> ReadinessResult {
    let avg_marks = clamp_pct(avg_marks);
    let attendance_pct = clamp_pct(attendance_pct);
    let lab_score = clamp_pct(lab_score);
    let skill_coverage_pct = clamp_pct(skill_coverage_pct);
    let project_score = (project_count as f64 * PROJECT_CREDIT).min(100.0);

    let readiness_score = avg_marks * WEIGHT_MARKS
        + attendance_pct * WEIGHT_ATTENDANCE
        + lab_score * WEIGHT_LAB
        + skill_coverage_pct * WEIGHT_SKILL_COVERAGE
        + project_score * WEIGHT_PROJECTS;

    // Classify the rounded value so the tier is always a function of the
    // score the caller actually sees.
    let readiness_score = round2(readiness_score);

    ReadinessResult {
        readiness_score,
        risk_classification: classify(readiness_score),
        missing_skills,
    }
}

/// Tie at a floor lands in the lower-risk tier.
pub fn classify(readiness_score: f64) -> RiskLevel {
    if readiness_score >= LOW_RISK_FLOOR {
        RiskLevel::Low
    } else if readiness_score >= MEDIUM_RISK_FLOOR {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
