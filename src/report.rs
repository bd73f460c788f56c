//! Plain-text health report rendering.
//!
//! The downloadable report the maintenance planner files with the
//! inspection paperwork. Formatting lives here; the assessment itself stays
//! unrounded.

use chrono::{DateTime, Utc};

use crate::types::JointAssessment;

/// Render the assessment as a plain-text report.
pub fn render(joint_name: &str, assessment: &JointAssessment, generated_at: DateTime<Utc>) -> String {
    let health = assessment.health;
    format!(
        "{joint_name} — Asphalt Joint Health Report\n\
         Generated: {}\n\
         \n\
         Health Index: {:.1}/100\n\
         Status: {}\n\
         \n\
         Traffic fatigue score: {:.1}\n\
         Thermal stress score: {:.1}\n\
         Noise anomaly score: {:.1}\n\
         Noise trend (7d): {} ({:+.1} dB)\n\
         \n\
         Maintenance advice:\n\
         {}\n",
        generated_at.format("%Y-%m-%d %H:%M"),
        health.value,
        health.status,
        assessment.traffic.score,
        assessment.thermal.score,
        assessment.noise.score,
        assessment.noise.trend,
        assessment.noise.delta_db,
        assessment.recommendation,
    )
}
