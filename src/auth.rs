// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Authentication for web APIs.

use log::debug;
use std::{env, error, fmt};

/// Manages authentication keys for web service APIs.
pub struct Auth {
    api_key: String,
}

impl Auth {
    /// Creates a new `Auth` structure using the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self { api_key }
    }

    /// Retrieves an API key from the environment.
    ///
    /// Returns an error if the API key cannot be retrieved from the
    /// environment, or if it is set but empty.
    pub fn from_env(envvar: impl AsRef<str>) -> AuthResult {
        let envvar = envvar.as_ref();
        let api_key = env::var(envvar).map_err(AuthError::EnvError)?;
        if api_key.trim().is_empty() {
            Err(AuthError::Empty(envvar.to_string()))
        } else {
            Ok(Self { api_key })
        }
    }

    /// Retrieves an API key from the environment if one is available.
    ///
    /// Services that can be used anonymously should use this instead of
    /// [`Auth::from_env()`].
    pub fn optional_from_env(envvar: impl AsRef<str>) -> Option<Self> {
        let envvar = envvar.as_ref();
        match Self::from_env(envvar) {
            Ok(auth) => Some(auth),
            Err(err) => {
                debug!("Proceeding without ${envvar}: {err}");
                None
            }
        }
    }

    /// The actual API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use clifetch::auth::Auth;
    /// let auth = Auth::new("ThisIsMyApiKey");
    /// assert_eq!(auth.api_key(), "ThisIsMyApiKey");
    /// ```
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keeps keys out of debug logs.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth").field("api_key", &"<redacted>").finish()
    }
}

/// Standard result type for [`Auth`] creation.
pub type AuthResult = Result<Auth, AuthError>;

/// Indicates an error when creating an authentication key.
#[derive(Debug)]
pub enum AuthError {
    /// An error occurred while retrieving a key from the environment.
    EnvError(env::VarError),

    /// The environment variable is set, but to an empty value.
    Empty(String),
}

impl From<env::VarError> for AuthError {
    fn from(error: env::VarError) -> Self {
        AuthError::EnvError(error)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EnvError(err) => write!(f, "Environment error: {err}"),
            AuthError::Empty(envvar) => write!(f, "${envvar} is empty"),
        }
    }
}

impl error::Error for AuthError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AuthError::EnvError(err) => Some(err),
            AuthError::Empty(_) => None,
        }
    }
}
