//! Blocking HTTP client for the profile API.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use starmate_model::{Credentials, Registration};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::Session;
use crate::types::{
    ApiMessage, LoginRequest, LoginResponse, ProfileEnvelope, ProfilePayload, RegisterRequest,
    RemoteProfile,
};

/// Header carrying the access token on authenticated calls.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("starmate/", env!("CARGO_PKG_VERSION"));

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub message: String,
    pub user: Option<RemoteProfile>,
}

/// Client for the login, register and profile endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new client. No request is sent.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// `POST /api/login`. Stores the issued token in `session`.
    pub fn login(&self, session: &mut Session, credentials: &Credentials) -> Result<LoginOutcome> {
        let body = LoginRequest {
            email: &credentials.email,
            username: &credentials.email,
            password: &credentials.password,
        };
        let request = self.client.post(self.config.endpoint("login")).json(&body);
        let (status, text) = self.execute("login", request)?;
        let outcome = interpret_login(status, &text)?;
        session.sign_in(outcome.token.clone(), chrono::Utc::now());
        if let Some(user) = &outcome.user {
            session.set_user(user.clone());
        }
        info!("logged in");
        Ok(outcome)
    }

    /// `POST /api/register`.
    pub fn register(&self, registration: &Registration) -> Result<String> {
        let body = RegisterRequest {
            email: &registration.email,
            username: &registration.username,
            password: &registration.password,
        };
        let request = self.client.post(self.config.endpoint("register")).json(&body);
        let (status, text) = self.execute("register", request)?;
        interpret_message(status, &text, "Registration successful!", "Registration failed.")
    }

    /// `GET /api/getProfile`. Caches the profile in `session`.
    pub fn get_profile(&self, session: &mut Session) -> Result<RemoteProfile> {
        let token = session.authenticated_token(chrono::Utc::now())?;
        let request = self
            .client
            .get(self.config.endpoint("getProfile"))
            .header(ACCESS_TOKEN_HEADER, token);
        let (status, text) = self.execute("getProfile", request)?;
        let profile = interpret_profile(status, &text)?;
        session.set_user(profile.clone());
        Ok(profile)
    }

    /// `POST /api/createProfile`.
    pub fn create_profile(&self, session: &Session, payload: &ProfilePayload) -> Result<String> {
        let token = session.authenticated_token(chrono::Utc::now())?;
        let request = self
            .client
            .post(self.config.endpoint("createProfile"))
            .header(ACCESS_TOKEN_HEADER, token)
            .json(payload);
        let (status, text) = self.execute("createProfile", request)?;
        interpret_message(status, &text, "Profile created.", "Error creating profile.")
    }

    /// `PUT /api/updateProfile`.
    pub fn update_profile(&self, session: &Session, payload: &ProfilePayload) -> Result<String> {
        let token = session.authenticated_token(chrono::Utc::now())?;
        let request = self
            .client
            .put(self.config.endpoint("updateProfile"))
            .header(ACCESS_TOKEN_HEADER, token)
            .json(payload);
        let (status, text) = self.execute("updateProfile", request)?;
        interpret_message(status, &text, "Profile updated.", "Error updating profile.")
    }

    fn execute(&self, endpoint: &str, request: RequestBuilder) -> Result<(StatusCode, String)> {
        debug!(endpoint, "sending request");
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        if status.is_success() {
            debug!(endpoint, %status, bytes = text.len(), "response received");
        } else {
            warn!(endpoint, %status, "request rejected");
        }
        Ok((status, text))
    }
}

/// Interpret a login response.
///
/// Any 2xx answer carrying a non-empty `access_token` is a success; the API
/// normally answers 201.
pub fn interpret_login(status: StatusCode, body: &str) -> Result<LoginOutcome> {
    if !status.is_success() {
        return Err(rejection(status, body, "Login failed"));
    }
    let response: LoginResponse = serde_json::from_str(body)?;
    let message = response.message.as_ref().and_then(|message| message.text());
    match response.access_token.filter(|token| !token.is_empty()) {
        Some(token) => Ok(LoginOutcome {
            token,
            message: message.unwrap_or_else(|| "Login Successful".to_string()),
            user: response.user,
        }),
        None => Err(ClientError::Rejected {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| "Login failed".to_string()),
        }),
    }
}

/// Interpret a `getProfile` response; the profile sits under `data`.
pub fn interpret_profile(status: StatusCode, body: &str) -> Result<RemoteProfile> {
    const FAILURE: &str = "Failed to fetch profile.";
    if !status.is_success() {
        return Err(rejection(status, body, FAILURE));
    }
    let envelope: ProfileEnvelope = serde_json::from_str(body)?;
    envelope.data.ok_or_else(|| ClientError::Rejected {
        status: status.as_u16(),
        message: envelope
            .message
            .as_ref()
            .and_then(|message| message.text())
            .unwrap_or_else(|| FAILURE.to_string()),
    })
}

/// Interpret a response whose only interesting content is its message.
pub fn interpret_message(
    status: StatusCode,
    body: &str,
    success: &str,
    failure: &str,
) -> Result<String> {
    if !status.is_success() {
        return Err(rejection(status, body, failure));
    }
    Ok(parse_message(body).unwrap_or_else(|| success.to_string()))
}

fn rejection(status: StatusCode, body: &str, fallback: &str) -> ClientError {
    ClientError::Rejected {
        status: status.as_u16(),
        message: parse_message(body).unwrap_or_else(|| fallback.to_string()),
    }
}

fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|message| message.text())
}
