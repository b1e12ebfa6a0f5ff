//! Common types and data structures

use chrono::NaiveDate;
use egui::Color32;

/// Navigable sections of the app. The variant order is the sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Dashboard,
    Finder,
    Tracker,
    Profile,
}

/// Static description of a page: its key, display label and sidebar icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Dashboard,
        PageId::Finder,
        PageId::Tracker,
        PageId::Profile,
    ];

    pub fn descriptor(self) -> PageDescriptor {
        let (id, label, icon) = match self {
            PageId::Dashboard => ("dashboard", "Dashboard", egui_phosphor::regular::HOUSE),
            PageId::Finder => ("finder", "Aid Finder", egui_phosphor::regular::MAGNIFYING_GLASS),
            PageId::Tracker => ("tracker", "Application Tracker", egui_phosphor::regular::LIST_CHECKS),
            PageId::Profile => ("profile", "Profile", egui_phosphor::regular::USER),
        };
        PageDescriptor { id, label, icon }
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Number-row key that jumps to this page
    pub fn shortcut_key(self) -> egui::Key {
        match self {
            PageId::Dashboard => egui::Key::Num1,
            PageId::Finder => egui::Key::Num2,
            PageId::Tracker => egui::Key::Num3,
            PageId::Profile => egui::Key::Num4,
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Award amount shown in the dashboard pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct AwardRecord {
    pub program: &'static str,
    pub value: u32, // whole dollars
    pub color: Color32,
}

/// Aid program listed in the finder
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub rating: f32, // 0.0..=5.0
}

/// Status of a submitted application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Approved,
    Pending,
    UnderReview,
    Denied,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Denied => "Denied",
        }
    }
}

/// Row in the application tracker
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationRecord {
    pub program: &'static str,
    pub status: ApplicationStatus,
    pub last_update: NaiveDate,
}

impl ApplicationRecord {
    pub fn last_update_label(&self) -> String {
        self.last_update.format("%d %b %y").to_string()
    }
}

/// Upcoming application deadline
#[derive(Debug, Clone, PartialEq)]
pub struct Deadline {
    pub program: &'static str,
    pub due: NaiveDate,
}

impl Deadline {
    pub fn due_label(&self) -> String {
        self.due.format("%b %-d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub name: &'static str,
    pub major: &'static str,
    pub applications_submitted: u32,
}
