//! Session context and client for the remote profile API.
//!
//! The API owns authentication and profile storage; this crate only carries
//! data to and from it:
//!
//! - [`Session`] holds the opaque access token and the last fetched profile.
//!   It is an explicit value passed to each call, never global state.
//! - [`ApiClient`] performs blocking requests against the five endpoints
//!   (`login`, `register`, `getProfile`, `createProfile`, `updateProfile`).
//!
//! # Example
//!
//! ```no_run
//! use starmate_client::{ApiClient, ClientConfig, Session};
//! use starmate_model::Credentials;
//!
//! fn fetch() -> starmate_client::Result<()> {
//!     let client = ApiClient::new(ClientConfig::default())?;
//!     let mut session = Session::new();
//!     let credentials = Credentials {
//!         email: "ayu@example.com".to_string(),
//!         password: "correct-horse".to_string(),
//!     };
//!     client.login(&mut session, &credentials)?;
//!     let profile = client.get_profile(&mut session)?;
//!     println!("{:?}", profile.name);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod session;
mod types;

pub use client::{
    ACCESS_TOKEN_HEADER, ApiClient, LoginOutcome, interpret_login, interpret_message,
    interpret_profile,
};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use session::{Session, TOKEN_LIFETIME_DAYS};
pub use types::{
    ApiMessage, LoginRequest, LoginResponse, MessageBody, ProfileEnvelope, ProfilePayload,
    RegisterRequest, RemoteProfile,
};
