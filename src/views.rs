//! Page views: stateless projections of the reference data
//!
//! Each view is built fresh from [`ReferenceData`] every frame and painted by `app::pages`.

use crate::data::ReferenceData;
use crate::types::*;
use crate::ui::components::{pie_segments, PieSegment};

pub struct DashboardView<'a> {
    pub deadlines: &'a [Deadline],
    pub feedback_score: f32,
    pub awards: Vec<PieSegment>,
    pub award_total: u64,
}

impl<'a> DashboardView<'a> {
    pub fn project(data: &'a ReferenceData) -> Self {
        Self {
            deadlines: &data.deadlines,
            feedback_score: data.feedback_score,
            awards: pie_segments(&data.awards),
            award_total: data.award_total(),
        }
    }
}

pub struct FinderView<'a> {
    pub programs: &'a [ProgramRecord],
}

impl<'a> FinderView<'a> {
    pub fn project(data: &'a ReferenceData) -> Self {
        Self { programs: &data.programs }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerRow<'a> {
    pub program: &'a str,
    pub status: ApplicationStatus,
    pub last_update: String,
}

impl TrackerRow<'_> {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

pub struct TrackerView<'a> {
    pub columns: [&'static str; 3],
    pub rows: Vec<TrackerRow<'a>>,
}

impl<'a> TrackerView<'a> {
    pub fn project(data: &'a ReferenceData) -> Self {
        Self {
            columns: ["Program", "Status", "Last Update"],
            rows: data
                .applications
                .iter()
                .map(|app| TrackerRow {
                    program: app.program,
                    status: app.status,
                    last_update: app.last_update_label(),
                })
                .collect(),
        }
    }
}

pub struct ProfileView {
    pub fields: Vec<(&'static str, String)>,
}

impl ProfileView {
    pub fn project(data: &ReferenceData) -> Self {
        let profile = &data.profile;
        Self {
            fields: vec![
                ("Name", profile.name.to_string()),
                ("Major", profile.major.to_string()),
                (
                    "Aid Applications",
                    format!("{} submitted", profile.applications_submitted),
                ),
            ],
        }
    }
}

/// Exactly one of these is mounted at a time
pub enum PageView<'a> {
    Dashboard(DashboardView<'a>),
    Finder(FinderView<'a>),
    Tracker(TrackerView<'a>),
    Profile(ProfileView),
}

impl<'a> PageView<'a> {
    pub fn project(page: PageId, data: &'a ReferenceData) -> Self {
        match page {
            PageId::Dashboard => PageView::Dashboard(DashboardView::project(data)),
            PageId::Finder => PageView::Finder(FinderView::project(data)),
            PageId::Tracker => PageView::Tracker(TrackerView::project(data)),
            PageId::Profile => PageView::Profile(ProfileView::project(data)),
        }
    }
}

#[cfg(test)]
impl PageView<'_> {
    pub fn page(&self) -> PageId {
        match self {
            PageView::Dashboard(_) => PageId::Dashboard,
            PageView::Finder(_) => PageId::Finder,
            PageView::Tracker(_) => PageId::Tracker,
            PageView::Profile(_) => PageId::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_rows_match_records_in_order() {
        let data = ReferenceData::builtin();
        let view = TrackerView::project(&data);

        assert_eq!(view.rows.len(), data.applications.len());
        for (row, record) in view.rows.iter().zip(&data.applications) {
            assert_eq!(row.program, record.program);
            assert_eq!(row.status_label(), record.status.label());
            assert_eq!(row.last_update, record.last_update_label());
        }
        assert_eq!(view.rows[0].program, "Campus Pantry");
        assert_eq!(view.rows[0].status_label(), "Approved");
        assert_eq!(view.rows[0].last_update, "25 Sep 25");
        assert_eq!(view.rows[1].status_label(), "Pending");
    }

    #[test]
    fn test_profile_fields() {
        let data = ReferenceData::builtin();
        let view = ProfileView::project(&data);
        assert_eq!(view.fields[0], ("Name", "Test Student".to_string()));
        assert_eq!(view.fields[2], ("Aid Applications", "5 submitted".to_string()));
    }

    #[test]
    fn test_projection_matches_requested_page() {
        let data = ReferenceData::builtin();
        for page in PageId::ALL {
            assert_eq!(PageView::project(page, &data).page(), page);
        }
    }

    #[test]
    fn test_dashboard_awards() {
        let data = ReferenceData::builtin();
        let view = DashboardView::project(&data);
        assert_eq!(view.awards.len(), data.awards.len());
        assert_eq!(view.award_total, data.award_total());
        assert_eq!(view.deadlines.len(), 2);
    }
}
