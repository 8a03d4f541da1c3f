use tracing::{debug, error, info, warn};

use crate::confirm::Confirmation;
use crate::form;
use crate::records::FeedbackRecord;
use crate::repository::{ClearOutcome, DeleteOutcome, Repository};
use crate::session::AdminSession;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::{Command, Section};
use crate::storage::DurableStorage;

/// The app: record collection, admin session and current section.
///
/// The confirmation provider answers delete and clear prompts.
pub struct FeedbackApp<S: DurableStorage, C: Confirmation> {
    repository: Repository<S>,
    session: AdminSession,
    section: Section,
    confirm: C,
}

impl<S: DurableStorage, C: Confirmation> FeedbackApp<S, C> {
    /// Start on the welcome screen, unauthenticated.
    pub fn new(repository: Repository<S>, confirm: C) -> Self {
        Self {
            repository,
            session: AdminSession::new(),
            section: Section::Welcome,
            confirm,
        }
    }

    /// Start on the home screen instead of the welcome screen.
    pub fn skip_welcome(mut self) -> Self {
        if self.section == Section::Welcome {
            self.section = Section::Home;
        }
        self
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        self.repository.records()
    }

    /// Read-through search. Never persists, never changes the section.
    pub fn search(&self, query: &str) -> Vec<&FeedbackRecord> {
        self.repository.search(query)
    }

    pub fn into_repository(self) -> Repository<S> {
        self.repository
    }

    fn move_to(&mut self, to: Section, events: &mut Vec<Event>) {
        if self.section != to {
            events.push(Event::SectionChanged {
                from: self.section,
                to,
            });
            self.section = to;
        }
    }

    /// Where a request for `to` actually lands, if it is allowed.
    fn resolve_target(&self, to: Section) -> Result<Section, DispatchError> {
        let from = self.section;
        match (from, to) {
            (Section::Welcome, Section::Welcome | Section::Home) => Ok(to),
            (Section::Welcome, _) | (_, Section::Welcome) => {
                Err(DispatchError::InvalidTransition { from, to })
            }
            (_, Section::Admin) if !self.session.is_authenticated() => {
                Err(DispatchError::NotAuthenticated)
            }
            (_, Section::AdminLogin) if self.session.is_authenticated() => Ok(Section::Admin),
            _ => Ok(to),
        }
    }

    fn require_section(&self, expected: Section) -> Result<(), DispatchError> {
        if self.section == expected {
            Ok(())
        } else {
            Err(DispatchError::WrongSection {
                expected,
                actual: self.section,
            })
        }
    }

    /// Authenticated and on the dashboard.
    fn require_admin(&self) -> Result<(), DispatchError> {
        self.session
            .require_authenticated()
            .map_err(|_| DispatchError::NotAuthenticated)?;
        self.require_section(Section::Admin)
    }

    fn handle(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        let mut events = Vec::new();
        match cmd {
            Command::Navigate { to } => {
                let target = self.resolve_target(to)?;
                self.move_to(target, &mut events);
            }
            Command::SubmitFeedback { mut draft } => {
                self.require_section(Section::Student)?;
                let record = form::submit(&mut draft, &mut self.repository)?;
                events.push(Event::FeedbackSubmitted { id: record.id });
                self.move_to(Section::Home, &mut events);
            }
            Command::Login { username, password } => {
                self.require_section(Section::AdminLogin)?;
                self.session.login(&username, &password)?;
                events.push(Event::LoggedIn);
                self.move_to(Section::Admin, &mut events);
            }
            Command::Logout => {
                self.require_section(Section::Admin)?;
                self.session.logout();
                events.push(Event::LoggedOut);
                self.move_to(Section::Home, &mut events);
            }
            Command::DeleteFeedback { id } => {
                self.require_admin()?;
                let event = match self.repository.delete(&id, &mut self.confirm)? {
                    DeleteOutcome::Removed(record) => Event::FeedbackDeleted { id: record.id },
                    DeleteOutcome::NotFound => Event::FeedbackNotFound { id },
                    DeleteOutcome::Cancelled => Event::DeletionCancelled,
                };
                events.push(event);
            }
            Command::ClearFeedback => {
                self.require_admin()?;
                let event = match self.repository.clear(&mut self.confirm)? {
                    ClearOutcome::Cleared { removed } => Event::FeedbackCleared { removed },
                    ClearOutcome::Cancelled => Event::DeletionCancelled,
                };
                events.push(event);
            }
        }
        Ok(events)
    }
}

impl<S: DurableStorage, C: Confirmation> Store for FeedbackApp<S, C> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(
            event = "core.state.dispatch_started",
            command = cmd_name(&cmd),
            section = %self.section
        );

        let result = self.handle(cmd);

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len(),
                section = %self.section
            ),
            Err(DispatchError::Repository(e)) => {
                error!(event = "core.state.dispatch_failed", error = %e)
            }
            Err(e) => warn!(event = "core.state.dispatch_rejected", error = %e),
        }

        result
    }
}

/// Commands carry passwords, so only the variant name is logged.
fn cmd_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Navigate { .. } => "Navigate",
        Command::SubmitFeedback { .. } => "SubmitFeedback",
        Command::Login { .. } => "Login",
        Command::Logout => "Logout",
        Command::DeleteFeedback { .. } => "DeleteFeedback",
        Command::ClearFeedback => "ClearFeedback",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::AutoConfirm;
    use crate::form::{DraftField, FeedbackDraft, FormError};
    use crate::session::SessionError;
    use crate::storage::MemoryStorage;

    type TestApp = FeedbackApp<MemoryStorage, AutoConfirm>;

    fn app() -> TestApp {
        FeedbackApp::new(
            Repository::load(MemoryStorage::new()).unwrap(),
            AutoConfirm(true),
        )
    }

    fn nav(app: &mut TestApp, to: Section) -> Result<Vec<Event>, DispatchError> {
        app.dispatch(Command::Navigate { to })
    }

    fn login(app: &mut TestApp, password: &str) -> Result<Vec<Event>, DispatchError> {
        app.dispatch(Command::Login {
            username: "admin".to_string(),
            password: password.to_string(),
        })
    }

    /// Log in through the login screen.
    fn admin(app: &mut TestApp) {
        nav(app, Section::AdminLogin).unwrap();
        login(app, "admin123").unwrap();
        assert_eq!(app.section(), Section::Admin);
    }

    fn draft(course: &str, faculty: &str) -> FeedbackDraft {
        let mut draft = FeedbackDraft::default();
        draft.set(DraftField::StudentName, "Alice");
        draft.set(DraftField::StudentId, "S1");
        draft.set(DraftField::CourseName, course);
        draft.set(DraftField::FacultyName, faculty);
        draft
    }

    fn submit(app: &mut TestApp, draft: FeedbackDraft) -> Result<Vec<Event>, DispatchError> {
        nav(app, Section::Student)?;
        app.dispatch(Command::SubmitFeedback { draft })
    }

    #[test]
    fn test_feedback_app_implements_store_trait() {
        fn assert_store<T: Store>(_s: &T) {}
        assert_store(&app());
    }

    #[test]
    fn test_starts_on_welcome_unauthenticated() {
        let app = app();
        assert_eq!(app.section(), Section::Welcome);
        assert!(!app.is_authenticated());
        assert_eq!(app.skip_welcome().section(), Section::Home);
    }

    #[test]
    fn test_welcome_only_leads_home() {
        let mut app = app();
        for to in [Section::Student, Section::AdminLogin, Section::Admin] {
            assert!(matches!(
                nav(&mut app, to),
                Err(DispatchError::InvalidTransition {
                    from: Section::Welcome,
                    ..
                })
            ));
        }

        let events = nav(&mut app, Section::Home).unwrap();
        assert_eq!(
            events,
            vec![Event::SectionChanged {
                from: Section::Welcome,
                to: Section::Home
            }]
        );
        assert!(nav(&mut app, Section::Welcome).is_err());
    }

    #[test]
    fn test_menu_reaches_public_sections() {
        let mut app = app().skip_welcome();
        for to in [Section::Student, Section::AdminLogin, Section::Home] {
            nav(&mut app, to).unwrap();
            assert_eq!(app.section(), to);
        }
    }

    #[test]
    fn test_navigate_to_current_section_emits_nothing() {
        let mut app = app().skip_welcome();
        assert!(nav(&mut app, Section::Home).unwrap().is_empty());
    }

    #[test]
    fn test_admin_requires_login() {
        let mut app = app().skip_welcome();
        assert!(matches!(
            nav(&mut app, Section::Admin),
            Err(DispatchError::NotAuthenticated)
        ));
        assert_eq!(app.section(), Section::Home);
    }

    #[test]
    fn test_login_lands_on_admin() {
        let mut app = app().skip_welcome();
        nav(&mut app, Section::AdminLogin).unwrap();

        let events = login(&mut app, "admin123").unwrap();

        assert_eq!(
            events,
            vec![
                Event::LoggedIn,
                Event::SectionChanged {
                    from: Section::AdminLogin,
                    to: Section::Admin
                }
            ]
        );
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_wrong_password_stays_on_login() {
        let mut app = app().skip_welcome();
        nav(&mut app, Section::AdminLogin).unwrap();

        let err = login(&mut app, "wrong").unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Session(SessionError::InvalidCredentials)
        ));
        assert_eq!(err.to_string(), "Invalid Credentials");
        assert_eq!(app.section(), Section::AdminLogin);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn test_login_outside_login_screen_is_rejected() {
        let mut app = app();
        let err = login(&mut app, "admin123").unwrap_err();
        assert!(matches!(
            err,
            DispatchError::WrongSection {
                expected: Section::AdminLogin,
                actual: Section::Welcome
            }
        ));
        assert!(!app.is_authenticated());
        assert_eq!(app.section(), Section::Welcome);

        nav(&mut app, Section::Home).unwrap();
        for section in [Section::Home, Section::Student] {
            nav(&mut app, section).unwrap();
            assert!(matches!(
                login(&mut app, "admin123"),
                Err(DispatchError::WrongSection {
                    expected: Section::AdminLogin,
                    ..
                })
            ));
            assert!(!app.is_authenticated());
            assert_eq!(app.section(), section);
        }
    }

    #[test]
    fn test_login_on_dashboard_leaves_session_alone() {
        let mut app = app().skip_welcome();
        admin(&mut app);

        let err = login(&mut app, "wrong").unwrap_err();

        assert!(matches!(
            err,
            DispatchError::WrongSection {
                expected: Section::AdminLogin,
                actual: Section::Admin
            }
        ));
        assert_eq!(app.section(), Section::Admin);
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_logout_outside_dashboard_is_rejected() {
        let mut app = app();
        assert!(matches!(
            app.dispatch(Command::Logout),
            Err(DispatchError::WrongSection {
                expected: Section::Admin,
                actual: Section::Welcome
            })
        ));
        assert_eq!(app.section(), Section::Welcome);

        let mut app = self::app().skip_welcome();
        admin(&mut app);
        nav(&mut app, Section::Home).unwrap();
        assert!(matches!(
            app.dispatch(Command::Logout),
            Err(DispatchError::WrongSection { .. })
        ));
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_authenticated_admin_login_link_goes_to_admin() {
        let mut app = app().skip_welcome();
        admin(&mut app);
        nav(&mut app, Section::Home).unwrap();

        nav(&mut app, Section::AdminLogin).unwrap();
        assert_eq!(app.section(), Section::Admin);
    }

    #[test]
    fn test_logout_goes_home() {
        let mut app = app().skip_welcome();
        admin(&mut app);

        let events = app.dispatch(Command::Logout).unwrap();

        assert_eq!(events[0], Event::LoggedOut);
        assert_eq!(app.section(), Section::Home);
        assert!(!app.is_authenticated());
        assert!(nav(&mut app, Section::Admin).is_err());
    }

    #[test]
    fn test_submit_goes_home() {
        let mut app = app().skip_welcome();

        let events = submit(&mut app, draft("CS101", "Dr. X")).unwrap();

        assert!(matches!(events[0], Event::FeedbackSubmitted { .. }));
        assert_eq!(app.section(), Section::Home);
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn test_submit_outside_form_is_rejected() {
        let mut app = app().skip_welcome();
        let err = app
            .dispatch(Command::SubmitFeedback {
                draft: draft("CS101", "Dr. X"),
            })
            .unwrap_err();
        assert!(matches!(err, DispatchError::WrongSection { .. }));
        assert!(app.records().is_empty());
    }

    #[test]
    fn test_invalid_submit_stays_on_form() {
        let mut app = app().skip_welcome();
        let err = submit(&mut app, draft("CS101", "")).unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Form(FormError::MissingRequiredField { .. })
        ));
        assert_eq!(app.section(), Section::Student);
        assert!(app.records().is_empty());
    }

    #[test]
    fn test_student_submission_visible_to_admin_search() {
        let mut app = app();
        nav(&mut app, Section::Home).unwrap();
        submit(&mut app, draft("CS101", "Dr. X")).unwrap();
        nav(&mut app, Section::AdminLogin).unwrap();
        login(&mut app, "admin123").unwrap();

        assert_eq!(app.records().len(), 1);
        assert_eq!(app.search("cs").len(), 1);
        assert!(app.search("Dr. Y").is_empty());
        assert_eq!(app.search("").len(), 1);
    }

    #[test]
    fn test_delete_and_clear_require_admin() {
        let mut app = app().skip_welcome();
        submit(&mut app, draft("CS101", "Dr. X")).unwrap();
        let id = app.records()[0].id.clone();

        assert!(matches!(
            app.dispatch(Command::DeleteFeedback { id }),
            Err(DispatchError::NotAuthenticated)
        ));
        assert!(matches!(
            app.dispatch(Command::ClearFeedback),
            Err(DispatchError::NotAuthenticated)
        ));
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn test_delete_and_clear_only_on_dashboard() {
        let mut app = app().skip_welcome();
        submit(&mut app, draft("CS101", "Dr. X")).unwrap();
        admin(&mut app);
        nav(&mut app, Section::Home).unwrap();
        let id = app.records()[0].id.clone();

        for cmd in [Command::DeleteFeedback { id }, Command::ClearFeedback] {
            assert!(matches!(
                app.dispatch(cmd),
                Err(DispatchError::WrongSection {
                    expected: Section::Admin,
                    actual: Section::Home
                })
            ));
        }
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn test_admin_delete_outcomes() {
        let mut app = app().skip_welcome();
        submit(&mut app, draft("CS101", "Dr. X")).unwrap();
        submit(&mut app, draft("MA201", "Dr. Y")).unwrap();
        admin(&mut app);
        let id = app.records()[1].id.clone();

        let events = app
            .dispatch(Command::DeleteFeedback { id: id.clone() })
            .unwrap();
        assert_eq!(events, vec![Event::FeedbackDeleted { id: id.clone() }]);

        let events = app.dispatch(Command::DeleteFeedback { id: id.clone() }).unwrap();
        assert_eq!(events, vec![Event::FeedbackNotFound { id }]);

        let events = app.dispatch(Command::ClearFeedback).unwrap();
        assert_eq!(events, vec![Event::FeedbackCleared { removed: 1 }]);
        assert!(app.records().is_empty());
    }

    #[test]
    fn test_declined_confirmation_changes_nothing() {
        let repo = Repository::load(MemoryStorage::new()).unwrap();
        let mut app = FeedbackApp::new(repo, AutoConfirm(false)).skip_welcome();
        nav(&mut app, Section::Student).unwrap();
        app.dispatch(Command::SubmitFeedback {
            draft: draft("CS101", "Dr. X"),
        })
        .unwrap();
        nav(&mut app, Section::AdminLogin).unwrap();
        app.dispatch(Command::Login {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
        .unwrap();
        let id = app.records()[0].id.clone();

        assert_eq!(
            app.dispatch(Command::DeleteFeedback { id }).unwrap(),
            vec![Event::DeletionCancelled]
        );
        assert_eq!(
            app.dispatch(Command::ClearFeedback).unwrap(),
            vec![Event::DeletionCancelled]
        );
        assert_eq!(app.records().len(), 1);
    }
}
