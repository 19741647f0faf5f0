use crate::models::{BurnoutInput, BurnoutResult, RiskLevel};
use crate::readiness::round2;

// Heuristic stand-in for a trained model; weights mimic logistic
// regression coefficients fitted by hand.
const TREND_WEIGHT: f64 = 30.0;
const DELAY_WEIGHT: f64 = 5.0;
const DELAY_CAP: f64 = 40.0;
const MISMATCH_PENALTY: f64 = 20.0;

const FLAG_THRESHOLD: f64 = 50.0;
const HIGH_THRESHOLD: f64 = 70.0;
const MEDIUM_THRESHOLD: f64 = 40.0;

pub fn predict(features: &BurnoutInput) -> BurnoutResult {
    let mut risk_score = 0.0;

    if features.weekly_attendance_trend < 0.0 {
        risk_score += features.weekly_attendance_trend.abs() * TREND_WEIGHT;
    }
    if features.marks_decline_trend < 0.0 {
        risk_score += features.marks_decline_trend.abs() * TREND_WEIGHT;
    }

    risk_score += (features.lab_submission_delays as f64 * DELAY_WEIGHT).min(DELAY_CAP);

    if features.high_attendance_low_marks != 0 {
        risk_score += MISMATCH_PENALTY;
    }

    let probability = risk_score.clamp(0.0, 100.0);

    BurnoutResult {
        burnout_risk_flag: probability > FLAG_THRESHOLD,
        burnout_probability: round2(probability),
        warning_level: warning_level(probability),
    }
}

// Boundaries are strict-greater on both tiers; values sitting exactly on
// 70 or 40 fall to the tier below.
pub fn warning_level(probability: f64) -> RiskLevel {
    if probability > HIGH_THRESHOLD {
        RiskLevel::High
    } else if probability > MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        attendance_trend: f64,
        marks_trend: f64,
        delays: u32,
        mismatch: i32,
    ) -> BurnoutInput {
        BurnoutInput {
            weekly_attendance_trend: attendance_trend,
            marks_decline_trend: marks_trend,
            lab_submission_delays: delays,
            high_attendance_low_marks: mismatch,
        }
    }

    #[test]
    fn reference_profile_scores_ninety() {
        let result = predict(&input(-1.0, 0.0, 10, 1));
        assert!((result.burnout_probability - 90.0).abs() < 0.001);
        assert!(result.burnout_risk_flag);
        assert_eq!(result.warning_level, RiskLevel::High);
    }

    #[test]
    fn positive_trends_contribute_nothing() {
        let result = predict(&input(2.5, 1.0, 0, 0));
        assert!((result.burnout_probability - 0.0).abs() < 0.001);
        assert!(!result.burnout_risk_flag);
        assert_eq!(result.warning_level, RiskLevel::Low);
    }

    #[test]
    fn delay_term_caps_at_forty() {
        let eight = predict(&input(0.0, 0.0, 8, 0));
        let fifty = predict(&input(0.0, 0.0, 50, 0));
        assert!((eight.burnout_probability - 40.0).abs() < 0.001);
        assert_eq!(eight.burnout_probability, fifty.burnout_probability);
    }

    #[test]
    fn combined_terms_clamp_at_one_hundred() {
        let result = predict(&input(-3.0, -3.0, 20, 1));
        assert!((result.burnout_probability - 100.0).abs() < 0.001);
        assert_eq!(result.warning_level, RiskLevel::High);
    }

    #[test]
    fn tier_boundaries_are_strict_greater() {
        assert_eq!(warning_level(70.0), RiskLevel::Medium);
        assert_eq!(warning_level(70.01), RiskLevel::High);
        assert_eq!(warning_level(40.0), RiskLevel::Low);
        assert_eq!(warning_level(40.01), RiskLevel::Medium);
    }

    #[test]
    fn flag_requires_strictly_more_than_fifty() {
        // 30 from the attendance trend plus 20 from delays lands exactly on 50
        let exact = predict(&input(-1.0, 0.0, 4, 0));
        assert!((exact.burnout_probability - 50.0).abs() < 0.001);
        assert!(!exact.burnout_risk_flag);

        let over = predict(&input(-1.0, 0.0, 5, 0));
        assert!(over.burnout_risk_flag);
    }
}
