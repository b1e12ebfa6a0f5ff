//! Built-in reference data shown by every page
//!
//! Everything here is constructed once at startup and only ever read.

use crate::theme;
use crate::types::*;
use chrono::NaiveDate;

pub struct ReferenceData {
    pub awards: Vec<AwardRecord>,
    pub programs: Vec<ProgramRecord>,
    pub applications: Vec<ApplicationRecord>,
    pub deadlines: Vec<Deadline>,
    pub feedback_score: f32,
    pub profile: StudentProfile,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            awards: vec![
                AwardRecord { program: "Federal Pell Grant", value: 3_200, color: theme::CHART_SKY },
                AwardRecord { program: "State Opportunity Grant", value: 1_500, color: theme::CHART_EMERALD },
                AwardRecord { program: "Campus Scholarship", value: 1_000, color: theme::CHART_AMBER },
                AwardRecord { program: "Emergency Aid", value: 500, color: theme::CHART_ROSE },
            ],
            programs: vec![
                ProgramRecord {
                    name: "Campus Pantry",
                    description: "Free groceries and hygiene items for enrolled students.",
                    rating: 4.5,
                },
                ProgramRecord {
                    name: "Emergency Aid",
                    description: "One-time grants for unexpected expenses.",
                    rating: 4.0,
                },
                ProgramRecord {
                    name: "Textbook Lending",
                    description: "Semester-long loans of required course materials.",
                    rating: 3.5,
                },
                ProgramRecord {
                    name: "Transit Pass",
                    description: "Discounted public transport for full-time students.",
                    rating: 5.0,
                },
                ProgramRecord {
                    name: "Childcare Subsidy",
                    description: "Partial childcare costs for student parents.",
                    rating: 3.0,
                },
                ProgramRecord {
                    name: "Housing Assistance",
                    description: "Short-term rent support and housing referrals.",
                    rating: 2.5,
                },
            ],
            applications: vec![
                ApplicationRecord {
                    program: "Campus Pantry",
                    status: ApplicationStatus::Approved,
                    last_update: date(2025, 9, 25),
                },
                ApplicationRecord {
                    program: "Emergency Aid",
                    status: ApplicationStatus::Pending,
                    last_update: date(2025, 9, 23),
                },
                ApplicationRecord {
                    program: "Textbook Lending",
                    status: ApplicationStatus::UnderReview,
                    last_update: date(2025, 9, 18),
                },
                ApplicationRecord {
                    program: "Housing Assistance",
                    status: ApplicationStatus::Denied,
                    last_update: date(2025, 9, 12),
                },
            ],
            deadlines: vec![
                Deadline { program: "Campus Pantry", due: date(2025, 10, 15) },
                Deadline { program: "Emergency Aid", due: date(2025, 11, 1) },
            ],
            feedback_score: 4.5,
            profile: StudentProfile {
                name: "Test Student",
                major: "Computer Science",
                applications_submitted: 5,
            },
        }
    }

    pub fn award_total(&self) -> u64 {
        self.awards.iter().map(|a| u64::from(a.value)).sum()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
