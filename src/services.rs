//! Collaborators behind the placeholder actions
//!
//! Eligibility checks, applications, profile edits and sign-out are not built yet.
//! The navigator calls these traits and shows whatever acknowledgement comes back.

use crate::types::{ProgramRecord, StudentProfile};

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub action: &'static str,
    pub message: String,
}

impl Acknowledgement {
    pub fn not_available(action: &'static str) -> Self {
        Self {
            action,
            message: format!("{} is not available yet", action),
        }
    }
}

pub trait EligibilityService {
    fn start_check(&self) -> Acknowledgement;
    fn apply(&self, program: &ProgramRecord) -> Acknowledgement;
}

pub trait ProfileEditor {
    fn edit_profile(&self, profile: &StudentProfile) -> Acknowledgement;
}

pub trait SessionService {
    fn log_out(&self) -> Acknowledgement;
}

/// Stand-in used by the desktop build
#[derive(Debug, Default, Clone, Copy)]
pub struct Placeholder;

impl EligibilityService for Placeholder {
    fn start_check(&self) -> Acknowledgement {
        Acknowledgement::not_available("Eligibility check")
    }

    fn apply(&self, program: &ProgramRecord) -> Acknowledgement {
        Acknowledgement {
            action: "Apply",
            message: format!("Applying to {} is not available yet", program.name),
        }
    }
}

impl ProfileEditor for Placeholder {
    fn edit_profile(&self, _profile: &StudentProfile) -> Acknowledgement {
        Acknowledgement::not_available("Profile editing")
    }
}

impl SessionService for Placeholder {
    fn log_out(&self) -> Acknowledgement {
        Acknowledgement::not_available("Log out")
    }
}

pub struct Services {
    pub eligibility: Box<dyn EligibilityService>,
    pub profile: Box<dyn ProfileEditor>,
    pub session: Box<dyn SessionService>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            eligibility: Box::new(Placeholder),
            profile: Box::new(Placeholder),
            session: Box::new(Placeholder),
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call in a shared log so tests can inspect it after handing the mock over.
    #[derive(Clone, Default)]
    pub struct Recorder {
        pub calls: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) -> Acknowledgement {
            self.calls.borrow_mut().push(call.clone());
            Acknowledgement { action: "mock", message: call }
        }

        pub fn services(&self) -> Services {
            Services {
                eligibility: Box::new(self.clone()),
                profile: Box::new(self.clone()),
                session: Box::new(self.clone()),
            }
        }
    }

    impl EligibilityService for Recorder {
        fn start_check(&self) -> Acknowledgement {
            self.record("start_check".to_string())
        }

        fn apply(&self, program: &ProgramRecord) -> Acknowledgement {
            self.record(format!("apply:{}", program.name))
        }
    }

    impl ProfileEditor for Recorder {
        fn edit_profile(&self, profile: &StudentProfile) -> Acknowledgement {
            self.record(format!("edit_profile:{}", profile.name))
        }
    }

    impl SessionService for Recorder {
        fn log_out(&self) -> Acknowledgement {
            self.record("log_out".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_acknowledges_without_work() {
        let program = ProgramRecord {
            name: "Transit Pass",
            description: "",
            rating: 5.0,
        };
        assert_eq!(
            Placeholder.start_check().message,
            "Eligibility check is not available yet"
        );
        assert_eq!(
            Placeholder.apply(&program).message,
            "Applying to Transit Pass is not available yet"
        );
        assert_eq!(Placeholder.log_out().action, "Log out");
    }
}
