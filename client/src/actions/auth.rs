//! Login and signup submission flows.
//!
//! ERROR HANDLING
//! ==============
//! Each flow resolves to the inline message its form shows: `Ok` for the
//! success banner, `Err` for the error line. Server messages win over the
//! generic fallback; transport and decode failures collapse to one
//! network string per page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::app::{LOGIN_PATH, TASKS_PATH};
use crate::net::api::AuthBackend;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, SignupRequest};
use crate::util::session::TokenStore;

/// Minimum password length enforced by the login and signup inputs.
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_NETWORK_ERROR: &str = "Something went wrong. Please try again.";
pub const LOGIN_SUCCESS: &str = "Login successful!";

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SIGNUP_FAILED: &str = "Failed to register";
pub const SIGNUP_NETWORK_ERROR: &str = "Network error or server not reachable.";
pub const SIGNUP_SUCCESS: &str = "Registration successful!";

/// Signup form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Build the registration body, rejecting a confirmation mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`PASSWORD_MISMATCH`] when the two password fields differ.
    pub fn to_request(&self) -> Result<SignupRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        })
    }
}

/// A 2xx login body must carry a non-empty token.
fn require_token(response: LoginResponse) -> Result<String, ApiError> {
    response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Decode("login response missing token".to_owned()))
}

/// Post credentials, store the issued token and navigate to the task view.
///
/// `navigate` is called at most once, and only after the token is stored.
///
/// # Errors
///
/// Returns the message to show under the form when login fails.
pub async fn submit_login<A, S>(
    backend: &A,
    store: &S,
    request: &LoginRequest,
    navigate: impl FnOnce(&str),
) -> Result<&'static str, String>
where
    A: AuthBackend,
    S: TokenStore,
{
    let token = match backend.login(request).await.and_then(require_token) {
        Ok(token) => token,
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            return Err(e.user_message(LOGIN_FAILED, LOGIN_NETWORK_ERROR));
        }
    };
    store.set_token(&token);
    navigate(TASKS_PATH);
    Ok(LOGIN_SUCCESS)
}

/// Check the form, register the account and navigate to login.
///
/// A password mismatch returns before `backend` is touched.
///
/// # Errors
///
/// Returns the message to show under the form when registration fails.
pub async fn submit_signup<A>(
    backend: &A,
    form: &SignupForm,
    navigate: impl FnOnce(&str),
) -> Result<&'static str, String>
where
    A: AuthBackend,
{
    let request = form.to_request().map_err(str::to_owned)?;
    if let Err(e) = backend.signup(&request).await {
        leptos::logging::warn!("signup failed: {e}");
        return Err(e.user_message(SIGNUP_FAILED, SIGNUP_NETWORK_ERROR));
    }
    navigate(LOGIN_PATH);
    Ok(SIGNUP_SUCCESS)
}
