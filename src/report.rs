use chrono::Utc;

use crate::models::{
    AccreditationReport, DepartmentReportInput, ExecutiveSummary, PlacementInsights,
    ReportMetadata,
};

const EXCELLENT_ABOVE: f64 = 80.0;
const SATISFACTORY_ABOVE: f64 = 60.0;
const LAB_CURRICULUM_FLOOR: f64 = 70.0;
const WORKSHOP_FLOOR: f64 = 60.0;

const REPORT_TITLE: &str = "Academic Intelligence & Performance Report";
const GENERATOR: &str = "Placement Readiness Engine";

/// Assembles the accreditation-style document from stats the caller has
/// already aggregated. Pure formatting plus two qualitative derivations;
/// no new numeric computation beyond 2-decimal percent strings.
pub fn generate(input: &DepartmentReportInput) -> AccreditationReport {
    AccreditationReport {
        metadata: ReportMetadata {
            title: REPORT_TITLE.to_string(),
            department: input.department_name.clone(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            generated_by: GENERATOR.to_string(),
            framework_compliance: vec!["NAAC".to_string(), "NBA".to_string()],
        },
        executive_summary: ExecutiveSummary {
            total_students_analyzed: input.total_students,
            department_attendance_avg: format!("{:.2}%", input.avg_attendance),
            cohort_skill_readiness: format!("{:.2}/100", input.avg_skill_readiness),
        },
        placement_insights: PlacementInsights {
            average_placement_probability: format!("{:.2}%", input.placement_probability_avg),
            top_industry_roles_mapped: input.top_industry_roles.clone(),
            readiness_status: readiness_status(input.avg_skill_readiness).to_string(),
        },
        faculty_heatmap: input.faculty_heatmap_summary.clone(),
        recommendations: recommendations(
            input.avg_skill_readiness,
            input.placement_probability_avg,
        ),
    }
}

pub fn readiness_status(avg_skill_readiness: f64) -> &'static str {
    if avg_skill_readiness > EXCELLENT_ABOVE {
        "Excellent"
    } else if avg_skill_readiness > SATISFACTORY_ABOVE {
        "Satisfactory"
    } else {
        "Requires Intervention"
    }
}

fn recommendations(avg_skill_readiness: f64, placement_probability_avg: f64) -> Vec<String> {
    let lab_line = if avg_skill_readiness < LAB_CURRICULUM_FLOOR {
        "Integrate more hands-on lab sessions to improve real-world application."
    } else {
        "Maintain current lab curriculum standards."
    };
    let seminar_line = if placement_probability_avg < WORKSHOP_FLOOR {
        "Conduct specialized workshops for missing industry tools."
    } else {
        "Focus on advanced system design seminars."
    };
    vec![lab_line.to_string(), seminar_line.to_string()]
}
