//! Mock session: who is browsing the guide
//!
//! There is no authentication backend. Logging in fabricates a [`User`]
//! from the submitted email and persists it, serialized, through a
//! [`SessionStorage`]. The session is an explicit object owned by the
//! caller: it starts anonymous, can be restored from storage, and is torn
//! down with [`Session::logout`].

use crate::core::error::SessionError;
use crate::core::field::FieldFormat;
use crate::core::service::SessionStorage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default storage key for the serialized user
pub const DEFAULT_SESSION_KEY: &str = "user";

/// The signed-in visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Users created through login are verified; fresh registrations are not
    pub verified: bool,
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    fn new(email: &str, name: String, verified: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name,
            verified,
            signed_in_at: Utc::now(),
        }
    }
}

/// An explicit, caller-owned session
pub struct Session<S: SessionStorage> {
    storage: S,
    key: String,
    user: Option<User>,
}

impl<S: SessionStorage> Session<S> {
    /// A fresh anonymous session; storage is not read
    pub fn anonymous(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            user: None,
        }
    }

    /// Resume whatever user is stored under `key`
    ///
    /// Missing data yields an anonymous session; undecodable data is
    /// [`SessionError::Corrupt`] and is left in storage for the caller.
    pub async fn restore(storage: S, key: impl Into<String>) -> Result<Self, SessionError> {
        let key = key.into();
        let stored = storage.load(&key).await?;

        let user = match stored {
            None => None,
            Some(text) => {
                let user: User =
                    serde_json::from_str(&text).map_err(|e| SessionError::Corrupt {
                        key: key.clone(),
                        message: e.to_string(),
                    })?;
                tracing::debug!(user_id = %user.id, "Session restored");
                Some(user)
            }
        };

        Ok(Self { storage, key, user })
    }

    /// Sign in with an email and password
    ///
    /// Any well-formed email and non-empty password is accepted; the user's
    /// name is the local part of the email.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, SessionError> {
        validate_email(email)?;
        validate_password(password)?;

        let name = email.split('@').next().unwrap_or(email).to_string();
        self.sign_in(User::new(email, name, true)).await
    }

    /// Create an account and sign in with it
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::InvalidCredentials {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        validate_email(email)?;
        validate_password(password)?;

        self.sign_in(User::new(email, name.trim().to_string(), false))
            .await
    }

    /// Clear the user from storage, then from the session
    ///
    /// When storage fails the user stays signed in, so memory and storage
    /// never disagree.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove(&self.key).await?;
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Storage key this session writes to
    pub fn key(&self) -> &str {
        &self.key
    }

    async fn sign_in(&mut self, user: User) -> Result<&User, SessionError> {
        let text = serde_json::to_string(&user).map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })?;
        self.storage.save(&self.key, text).await?;

        tracing::info!(user_id = %user.id, verified = user.verified, "User signed in");
        Ok(&*self.user.insert(user))
    }
}

fn validate_email(email: &str) -> Result<(), SessionError> {
    if FieldFormat::Email.validate_str(email) {
        Ok(())
    } else {
        Err(SessionError::InvalidCredentials {
            field: "email".to_string(),
            message: format!("'{}' is not a valid email address", email),
        })
    }
}

fn validate_password(password: &str) -> Result<(), SessionError> {
    if password.is_empty() {
        Err(SessionError::InvalidCredentials {
            field: "password".to_string(),
            message: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}
