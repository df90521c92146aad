/// In-memory `Client` used to exercise commands without a server.
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::client::{Client, Credentials};
use super::errors::ApiError;
use crate::types::{Application, NewApplication};

/// A `Client` backed by a map, keyed by application id.
///
/// `fail_with` makes every operation return `ApiError::Backend` with the
/// given message; `calls` counts operations that got past validation.
#[derive(Debug, Default)]
pub struct MemoryClient {
    credentials: Credentials,
    apps: RefCell<BTreeMap<String, Application>>,
    failure: Option<String>,
    calls: Cell<usize>,
}

impl MemoryClient {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_app(self, id: &str, name: &str) -> Self {
        self.apps.borrow_mut().insert(
            id.to_owned(),
            Application {
                id: id.to_owned(),
                name: name.to_owned(),
            },
        );
        self
    }

    #[must_use]
    pub fn fail_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    #[must_use]
    pub fn app(&self, id: &str) -> Option<Application> {
        self.apps.borrow().get(id).cloned()
    }

    fn enter(&self) -> Result<(), ApiError> {
        self.credentials.validate()?;
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(message) => Err(ApiError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status { status: 404 }
    }
}

impl Client for MemoryClient {
    fn list_apps(&self) -> Result<Vec<Application>, ApiError> {
        self.enter()?;
        Ok(self.apps.borrow().values().cloned().collect())
    }

    fn get_app(&self, id: &str) -> Result<Application, ApiError> {
        self.enter()?;
        self.app(id).ok_or_else(Self::not_found)
    }

    fn create_app(&self, app: &NewApplication) -> Result<Application, ApiError> {
        self.enter()?;
        let mut apps = self.apps.borrow_mut();
        if apps.contains_key(&app.id) {
            return Err(ApiError::Status { status: 409 });
        }
        let created = Application {
            id: app.id.clone(),
            name: app.name.clone(),
        };
        apps.insert(app.id.clone(), created.clone());
        Ok(created)
    }

    fn update_app(&self, id: &str, new_name: &str) -> Result<Application, ApiError> {
        self.enter()?;
        let mut apps = self.apps.borrow_mut();
        let app = apps.get_mut(id).ok_or_else(Self::not_found)?;
        app.name = new_name.to_owned();
        Ok(app.clone())
    }

    fn delete_app(&self, id: &str) -> Result<(), ApiError> {
        self.enter()?;
        self.apps
            .borrow_mut()
            .remove(id)
            .map(drop)
            .ok_or_else(Self::not_found)
    }
}
