/// Humanitec client trait and `reqwest`-backed implementation.
use std::time::Duration;

use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::errors::ApiError;
use crate::types::{Application, NewApplication};

/// Public Humanitec API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.humanitec.io";

/// Upper bound on a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to talk to one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub org: String,
    /// Base URL; `None` means [`DEFAULT_API_URL`].
    pub api_url: Option<String>,
}

impl Credentials {
    /// Fail fast when the token or organization is empty.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingToken` or `ApiError::MissingOrg`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }
        if self.org.trim().is_empty() {
            return Err(ApiError::MissingOrg);
        }
        Ok(())
    }
}

/// Operations on the application collection of one organization.
///
/// Implementations validate credentials before doing any I/O.
pub trait Client {
    /// List every application in the organization.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on missing credentials, transport failure, an
    /// unexpected status, or an undecodable body.
    fn list_apps(&self) -> Result<Vec<Application>, ApiError>;

    /// Fetch one application by id.
    ///
    /// # Errors
    ///
    /// See [`Client::list_apps`].
    fn get_app(&self, id: &str) -> Result<Application, ApiError>;

    /// Create an application.
    ///
    /// # Errors
    ///
    /// See [`Client::list_apps`].
    fn create_app(&self, app: &NewApplication) -> Result<Application, ApiError>;

    /// Rename an application. The id never changes.
    ///
    /// # Errors
    ///
    /// See [`Client::list_apps`].
    fn update_app(&self, id: &str, new_name: &str) -> Result<Application, ApiError>;

    /// Delete an application and everything under it.
    ///
    /// # Errors
    ///
    /// See [`Client::list_apps`].
    fn delete_app(&self, id: &str) -> Result<(), ApiError>;
}

impl<T: Client + ?Sized> Client for &T {
    fn list_apps(&self) -> Result<Vec<Application>, ApiError> {
        (**self).list_apps()
    }

    fn get_app(&self, id: &str) -> Result<Application, ApiError> {
        (**self).get_app(id)
    }

    fn create_app(&self, app: &NewApplication) -> Result<Application, ApiError> {
        (**self).create_app(app)
    }

    fn update_app(&self, id: &str, new_name: &str) -> Result<Application, ApiError> {
        (**self).update_app(id, new_name)
    }

    fn delete_app(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete_app(id)
    }
}

/// Blocking `reqwest` implementation of [`Client`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    credentials: Credentials,
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client for `credentials`. Does not touch the network.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the base URL cannot be parsed, or
    /// `ApiError::Transport` when the HTTP client cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        let raw = credentials.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let base_url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(raw.to_owned()));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("humctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            credentials,
            base_url,
            http,
        })
    }

    /// `{base}/orgs/{org}/apps[/{id}]`, with each segment percent-encoded.
    fn apps_url(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(["orgs", self.credentials.org.as_str(), "apps"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, id: Option<&str>) -> Result<RequestBuilder, ApiError> {
        self.credentials.validate()?;
        let url = self.apps_url(id)?;
        debug!(%method, %url, "sending request");
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(&self.credentials.token)
            .header(ACCEPT, "application/json"))
    }
}

/// Send `req` and check the status against `expected`.
fn send(req: RequestBuilder, expected: &[StatusCode]) -> Result<Response, ApiError> {
    let resp = req.send()?;
    let status = resp.status();
    debug!(status = status.as_u16(), "received response");
    if expected.contains(&status) {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let body = resp.text()?;
    trace!(%body, "response body");
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl Client for HttpClient {
    fn list_apps(&self) -> Result<Vec<Application>, ApiError> {
        let req = self.request(Method::GET, None)?;
        decode(send(req, &[StatusCode::OK])?)
    }

    fn get_app(&self, id: &str) -> Result<Application, ApiError> {
        let req = self.request(Method::GET, Some(id))?;
        decode(send(req, &[StatusCode::OK])?)
    }

    fn create_app(&self, app: &NewApplication) -> Result<Application, ApiError> {
        let req = self.request(Method::POST, None)?.json(app);
        decode(send(req, &[StatusCode::CREATED])?)
    }

    fn update_app(&self, id: &str, new_name: &str) -> Result<Application, ApiError> {
        let req = self
            .request(Method::PATCH, Some(id))?
            .json(&serde_json::json!({ "name": new_name }));
        decode(send(req, &[StatusCode::OK])?)
    }

    fn delete_app(&self, id: &str) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, Some(id))?;
        send(req, &[StatusCode::NO_CONTENT, StatusCode::ACCEPTED])?;
        Ok(())
    }
}
