//! Navigation state and page composition
//!
//! [`Navigator`] is the only writer of [`NavigationState`]. Everything the UI paints
//! comes from [`Navigator::render`], and every sidebar click goes back through
//! [`Navigator::select`].

use crate::data::ReferenceData;
use crate::services::{Acknowledgement, Services};
use crate::types::PageId;
use crate::views::PageView;
use tracing::{debug, info, warn};

/// Which page is active. Starts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: PageId,
}

impl NavigationState {
    pub fn active(&self) -> PageId {
        self.active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Everything visible for one frame
pub struct Screen<'a> {
    pub sidebar: Vec<SidebarEntry>,
    pub header: &'static str,
    pub page: PageView<'a>,
}

/// User actions that don't navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    StartEligibilityCheck,
    /// Index into the finder's program list
    Apply(usize),
    EditProfile,
    LogOut,
}

pub struct Navigator {
    state: NavigationState,
    data: ReferenceData,
    services: Services,
}

impl Navigator {
    pub fn new(data: ReferenceData, services: Services) -> Self {
        Self {
            state: NavigationState::default(),
            data,
            services,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn select(&mut self, page: PageId) {
        if self.state.active != page {
            debug!(from = %self.state.active, to = %page, "Page selected");
            self.state.active = page;
        }
    }

    /// Select by string key. Unknown keys are logged and ignored.
    /// Returns whether the key named a page.
    // The UI selects by PageId; this is the keyed entry point for callers outside it.
    #[allow(dead_code)]
    pub fn select_page(&mut self, id: &str) -> bool {
        match PageId::from_id(id) {
            Some(page) => {
                self.select(page);
                true
            }
            None => {
                warn!(id, "Ignoring unknown page identifier");
                false
            }
        }
    }

    pub fn render(&self) -> Screen<'_> {
        let active = self.state.active;
        let sidebar = PageId::ALL
            .into_iter()
            .map(|page| {
                let descriptor = page.descriptor();
                SidebarEntry {
                    page,
                    label: descriptor.label,
                    icon: descriptor.icon,
                    active: page == active,
                }
            })
            .collect();

        Screen {
            sidebar,
            header: active.label(),
            page: PageView::project(active, &self.data),
        }
    }

    /// Run a placeholder action. Never changes the active page.
    /// Returns None if the action refers to a program that doesn't exist.
    pub fn dispatch(&self, action: UserAction) -> Option<Acknowledgement> {
        let ack = match action {
            UserAction::StartEligibilityCheck => self.services.eligibility.start_check(),
            UserAction::Apply(idx) => match self.data.programs.get(idx) {
                Some(program) => self.services.eligibility.apply(program),
                None => {
                    warn!(idx, "Apply requested for unknown program");
                    return None;
                }
            },
            UserAction::EditProfile => self.services.profile.edit_profile(&self.data.profile),
            UserAction::LogOut => self.services.session.log_out(),
        };
        info!(action = ack.action, message = %ack.message, "Action acknowledged");
        Some(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::Recorder;

    fn navigator() -> Navigator {
        Navigator::new(ReferenceData::builtin(), Services::default())
    }

    fn active_entries(screen: &Screen<'_>) -> Vec<PageId> {
        screen.sidebar.iter().filter(|e| e.active).map(|e| e.page).collect()
    }

    #[test]
    fn test_initial_screen_is_dashboard() {
        let nav = navigator();
        let screen = nav.render();
        assert_eq!(nav.state().active(), PageId::Dashboard);
        assert!(matches!(screen.page, PageView::Dashboard(_)));
        assert_eq!(active_entries(&screen), vec![PageId::Dashboard]);
        assert_eq!(screen.header, "Dashboard");
    }

    #[test]
    fn test_every_page_renders_alone() {
        let mut nav = navigator();
        for page in PageId::ALL {
            nav.select(page);
            let screen = nav.render();
            assert_eq!(screen.page.page(), page);
            assert_eq!(active_entries(&screen), vec![page]);
            assert_eq!(screen.header, page.label());
            assert_eq!(screen.sidebar.len(), PageId::ALL.len());
        }
    }

    #[test]
    fn test_every_page_reachable_from_every_page() {
        let mut nav = navigator();
        for from in PageId::ALL {
            for to in PageId::ALL {
                nav.select(from);
                nav.select(to);
                assert_eq!(nav.state().active(), to);
            }
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = navigator();
        once.select(PageId::Tracker);

        let mut twice = navigator();
        twice.select(PageId::Tracker);
        twice.select(PageId::Tracker);

        assert_eq!(once.state(), twice.state());
        assert_eq!(active_entries(&once.render()), active_entries(&twice.render()));
    }

    #[test]
    fn test_select_page_by_key() {
        let mut nav = navigator();
        assert!(nav.select_page("finder"));
        assert_eq!(nav.state().active(), PageId::Finder);
        assert!(nav.select_page("profile"));
        assert_eq!(nav.render().header, "Profile");
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut nav = navigator();
        nav.select(PageId::Tracker);
        assert!(!nav.select_page("settings"));
        assert!(!nav.select_page(""));
        assert!(!nav.select_page("Dashboard"));
        assert_eq!(nav.state().active(), PageId::Tracker);
    }

    #[test]
    fn test_sidebar_order_and_labels() {
        let nav = navigator();
        let labels: Vec<_> = nav.render().sidebar.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Aid Finder", "Application Tracker", "Profile"]
        );
    }

    #[test]
    fn test_dispatch_calls_matching_collaborator() {
        let recorder = Recorder::default();
        let mut nav = Navigator::new(ReferenceData::builtin(), recorder.services());
        nav.select(PageId::Finder);

        nav.dispatch(UserAction::StartEligibilityCheck);
        nav.dispatch(UserAction::Apply(1));
        nav.dispatch(UserAction::EditProfile);
        nav.dispatch(UserAction::LogOut);

        assert_eq!(
            recorder.calls(),
            vec![
                "start_check".to_string(),
                "apply:Emergency Aid".to_string(),
                "edit_profile:Test Student".to_string(),
                "log_out".to_string(),
            ]
        );
        assert_eq!(nav.state().active(), PageId::Finder);
    }

    #[test]
    fn test_dispatch_unknown_program() {
        let recorder = Recorder::default();
        let nav = Navigator::new(ReferenceData::builtin(), recorder.services());
        assert!(nav.dispatch(UserAction::Apply(99)).is_none());
        assert!(recorder.calls().is_empty());
    }
}
