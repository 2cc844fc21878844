use super::access::apply_plan_lock;
use super::api::{AuthClient, OAuthProvider};
use super::dispatcher::{Dispatch, FeatureDispatcher};
use super::layout::AffordanceLayout;
use super::pages::{Page, PageController, PageEntry};
use super::session::SessionState;
use super::storage::KeyValueStore;
use super::ClientError;
use crate::messages;
use crate::models::feature::FeatureCatalog;
use crate::models::plan::{AccessTiers, Plan};
use crate::services::{auth_service::LoginRequest, validation::RegisterRequest};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shown on the dashboard when no identity is stored.
pub const PLACEHOLDER_EMAIL: &str = "user@email.com";

/// A blocking message for the user. The client has no other error surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

impl Notice {
    fn new(text: impl Into<String>) -> Self {
        Notice(text.into())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub user_email: String,
    pub dropdown_open: bool,
}

/// The feature detail region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePane {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub struct ClientApp<S> {
    session: SessionState<S>,
    pages: PageController,
    dispatcher: FeatureDispatcher,
    tiers: Arc<AccessTiers>,
    api: AuthClient,
    dashboard: DashboardView,
    pane: FeaturePane,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore> ClientApp<S> {
    pub fn new(
        store: S,
        api: AuthClient,
        tiers: Arc<AccessTiers>,
        catalog: Arc<FeatureCatalog>,
        layout: AffordanceLayout,
    ) -> Self {
        Self {
            session: SessionState::new(store),
            pages: PageController::new(layout),
            dispatcher: FeatureDispatcher::new(catalog),
            tiers,
            api,
            dashboard: DashboardView::default(),
            pane: FeaturePane::default(),
            notices: Vec::new(),
        }
    }

    /// Standard tiers, catalog and layout.
    pub fn with_defaults(store: S, api: AuthClient) -> Self {
        Self::new(
            store,
            api,
            Arc::new(AccessTiers::default()),
            Arc::new(FeatureCatalog::standard()),
            AffordanceLayout::standard(),
        )
    }

    /// Opens the first page based on the persisted identity.
    pub fn start(&mut self) {
        let page = Page::initial(self.session.is_logged_in());
        self.show_page(page);
        self.pages.bind_features();
    }

    pub fn show_page(&mut self, target: Page) {
        debug!(page = %target, "Showing page");
        if self.pages.show_page(target) == PageEntry::RefreshDashboard {
            self.refresh_dashboard();
        }
    }

    fn refresh_dashboard(&mut self) {
        self.dashboard.user_email = self
            .session
            .user_email()
            .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string());
        let plan = self.session.plan();
        apply_plan_lock(self.pages.layout_mut(), &self.tiers, plan);
    }

    pub fn go_register(&mut self) {
        self.show_page(Page::Register);
    }

    pub fn go_login(&mut self) {
        self.show_page(Page::Login);
    }

    pub fn go_dashboard(&mut self) {
        self.show_page(Page::Dashboard);
    }

    pub fn open_forgot(&mut self) {
        self.show_page(Page::Forgot);
    }

    pub fn back_to_login(&mut self) {
        self.show_page(Page::Login);
    }

    /// Reset delivery is not wired to any backend; the notice is all that happens.
    pub fn send_reset(&mut self) {
        self.notify(messages::RESET_LINK_SENT);
        self.back_to_login();
    }

    pub fn oauth_url(&self, provider: OAuthProvider) -> String {
        self.api.oauth_url(provider)
    }

    pub fn toggle_dropdown(&mut self) {
        self.dashboard.dropdown_open = !self.dashboard.dropdown_open;
    }

    /// Submits the registration form. The display name defaults to the username.
    pub async fn register(&mut self, username: &str, email: &str, password: &str) {
        let (username, email, password) = (username.trim(), email.trim(), password.trim());
        if username.is_empty() || email.is_empty() || password.is_empty() {
            self.notify(messages::FILL_ALL_FIELDS);
            return;
        }

        let request = RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            full_name: Some(username.to_string()),
        };

        match self.api.register(&request).await {
            Ok(_) => {
                self.notify(messages::REGISTER_DONE_NOTICE);
                self.show_page(Page::Login);
            }
            Err(ClientError::Api { message, .. }) => {
                self.notify(message.unwrap_or_else(|| messages::GENERIC_FAILURE.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Registration request failed");
                self.notify(messages::SERVER_UNREACHABLE);
            }
        }
    }

    /// Submits the login form; on success the identity is persisted and `main` is shown.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let (email, password) = (email.trim(), password.trim());
        if email.is_empty() || password.is_empty() {
            self.notify(messages::ENTER_EMAIL_AND_PASSWORD);
            return Ok(());
        }

        let request = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                self.session.complete_login(&response.user.email)?;
                self.show_page(Page::Main);
            }
            Err(ClientError::Api { message, .. }) => {
                self.notify(message.unwrap_or_else(|| messages::LOGIN_FAILURE.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Login request failed");
                self.notify(messages::SERVER_UNREACHABLE);
            }
        }

        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.logout()?;
        self.show_page(Page::Login);
        Ok(())
    }

    pub fn choose_plan(&mut self, plan: Plan) -> Result<(), ClientError> {
        self.session.choose_plan(plan)?;
        self.show_page(Page::Dashboard);
        Ok(())
    }

    pub fn select_feature(&mut self, control_id: &str) {
        match self.dispatcher.select(self.pages.layout_mut(), control_id) {
            Dispatch::Locked(notice) => self.notify(notice),
            Dispatch::OpenPage(page) => self.show_page(page),
            Dispatch::Render(descriptor) => {
                self.pane.title = Some(descriptor.title);
                self.pane.body = Some(descriptor.body);
            }
            Dispatch::NoContent => {}
            Dispatch::UnknownControl => debug!(control_id, "Ignoring unknown feature control"),
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notices.push(Notice::new(text));
    }

    /// Drains pending notices in the order they were raised.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn current_page(&self) -> Page {
        self.pages.current()
    }

    pub fn pages(&self) -> &PageController {
        &self.pages
    }

    pub fn layout(&self) -> &AffordanceLayout {
        self.pages.layout()
    }

    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn pane(&self) -> &FeaturePane {
        &self.pane
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        self.dispatcher.catalog()
    }
}
