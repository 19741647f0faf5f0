use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordinal tier shared by the readiness and burnout scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResult {
    pub readiness_score: f64,
    pub risk_classification: RiskLevel,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BurnoutInput {
    pub weekly_attendance_trend: f64,
    pub marks_decline_trend: f64,
    pub lab_submission_delays: u32,
    pub high_attendance_low_marks: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BurnoutResult {
    pub burnout_risk_flag: bool,
    pub burnout_probability: f64,
    pub warning_level: RiskLevel,
}

/// Fully specified feature vector for the direct placement strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementFeatures {
    pub skill_readiness_score: f64,
    pub project_count: u32,
    pub internship_status: bool,
    pub internship_type: String,
    pub internship_duration: u32,
    pub communication_rating: f64,
    pub core_subject_marks: f64,
}

/// Optional extras for the store-derived strategy; anything left out
/// falls back to zero / absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DerivedOverrides {
    pub skill_readiness_score: f64,
    pub project_count: u32,
    pub internship_status: bool,
    pub internship_type: String,
    pub internship_duration: u32,
    pub communication_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DerivedDataPoints {
    pub avg_marks: f64,
    pub attendance_pct: f64,
    pub mark_count: usize,
    pub attendance_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementResult {
    pub placement_probability: f64,
    pub confidence_score: f64,
    pub suggested_improvements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<DerivedDataPoints>,
}

/// One graded assessment fetched from the record store.
#[derive(Debug, Clone)]
pub struct MarkRecord {
    pub student_id: Uuid,
    pub subject: String,
    pub exam_type: String,
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone)]
pub struct AttendanceEntry {
    pub student_id: Uuid,
    pub subject: String,
    pub on_date: NaiveDate,
    pub present: bool,
}

/// Catalog row owned by the record store; the matcher only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub skill_name: String,
    pub title: String,
    pub url: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub skill: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentReportInput {
    pub department_name: String,
    pub total_students: u32,
    pub avg_attendance: f64,
    pub avg_skill_readiness: f64,
    pub placement_probability_avg: f64,
    #[serde(default)]
    pub faculty_heatmap_summary: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub top_industry_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub title: String,
    pub department: String,
    pub date: String,
    pub generated_by: String,
    pub framework_compliance: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSummary {
    pub total_students_analyzed: u32,
    pub department_attendance_avg: String,
    pub cohort_skill_readiness: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementInsights {
    pub average_placement_probability: String,
    pub top_industry_roles_mapped: Vec<String>,
    pub readiness_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccreditationReport {
    pub metadata: ReportMetadata,
    pub executive_summary: ExecutiveSummary,
    pub placement_insights: PlacementInsights,
    pub faculty_heatmap: serde_json::Map<String, serde_json::Value>,
    pub recommendations: Vec<String>,
}
