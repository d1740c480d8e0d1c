//! Explicit session context.
//!
//! A [`Session`] holds the opaque access token issued by the API and the last
//! profile fetched with it. It is passed to the client calls that need it;
//! nothing else reads it.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::types::RemoteProfile;

/// Tokens are considered valid for seven days after login.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Authentication state of one user.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<RemoteProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued token.
    pub fn sign_in(&mut self, token: impl Into<String>, now: DateTime<Utc>) {
        self.token = Some(token.into());
        self.issued_at = Some(now);
    }

    /// Forget the token and the cached profile.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    /// When the current token stops being used, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.token.as_ref()?;
        self.issued_at
            .map(|issued| issued + Duration::days(TOKEN_LIFETIME_DAYS))
    }

    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.authenticated_token(now).is_ok()
    }

    /// The token, unless missing or expired.
    pub fn authenticated_token(&self, now: DateTime<Utc>) -> Result<&str> {
        let token = self
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::NotAuthenticated)?;
        match self.expires_at() {
            Some(expires) if now >= expires => Err(ClientError::NotAuthenticated),
            _ => Ok(token),
        }
    }

    pub fn user(&self) -> Option<&RemoteProfile> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: RemoteProfile) {
        self.user = Some(user);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("issued_at", &self.issued_at)
            .field("user", &self.user)
            .finish()
    }
}
