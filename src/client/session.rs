use super::storage::KeyValueStore;
use super::ClientError;
use crate::models::plan::Plan;

pub const USER_EMAIL_KEY: &str = "userEmail";
pub const PLAN_KEY: &str = "plan";

/// Client-held identity and plan tier. Nothing here is verified by the server.
#[derive(Debug)]
pub struct SessionState<S> {
    store: S,
}

impl<S: KeyValueStore> SessionState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn user_email(&self) -> Option<String> {
        self.store.get(USER_EMAIL_KEY).filter(|email| !email.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_email().is_some()
    }

    /// The effective plan: `basic` when unset or unrecognized.
    pub fn plan(&self) -> Plan {
        Plan::from_stored(self.store.get(PLAN_KEY).as_deref())
    }

    pub fn complete_login(&mut self, email: &str) -> Result<(), ClientError> {
        self.store.set(USER_EMAIL_KEY, email)?;
        if self.store.get(PLAN_KEY).is_none() {
            self.store.set(PLAN_KEY, Plan::Basic.as_str())?;
        }
        Ok(())
    }

    pub fn choose_plan(&mut self, plan: Plan) -> Result<(), ClientError> {
        self.store.set(PLAN_KEY, plan.as_str())
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
