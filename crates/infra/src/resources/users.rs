//! Users and authentication.
//!
//! `refresh_token` is a plain call: nothing invokes it on 401, the redirect
//! to the login page stays the only reaction to an expired session.

use opsdesk_domain::{ApiResponse, LoginRequest, NewUser, Session, User, UserFilters, UserUpdate};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::{discard, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

const ME_PATH: &str = "/auth/me";
const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const REFRESH_PATH: &str = "/auth/refresh-token";

/// `/users`
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    type Entity = User;
    type Create = NewUser;
    type Update = UserUpdate;
    type Filters = UserFilters;

    const PATH: &'static str = "/users";
    const SINGULAR: &'static str = "User";
    const PLURAL: &'static str = "users";
}

pub type UserApi = ResourceApi<Users>;

impl ResourceApi<Users> {
    /// Fetch the signed-in user and store it as the session.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> ApiResponse<Option<User>> {
        let response = self.client().read_one::<User>(ME_PATH, "Failed to load current user").await;
        if let Some(user) = &response.data {
            self.client().session().establish(user.clone());
        }
        response
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let toasts = MutationToasts::new("Logged in successfully", "Login failed")
            .with_loading("Signing in...");
        let user: User =
            self.client().mutate(&toasts, self.client().post(LOGIN_PATH, credentials)).await?;
        info!(user_id = %user.id, "login succeeded");
        Ok(self.client().session().establish(user))
    }

    /// End the server session. The local session is dropped even when the
    /// call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let toasts = MutationToasts::new("Logged out successfully", "Logout failed");
        let body = empty_body();
        let call = discard(self.client().post::<_, Value>(LOGOUT_PATH, &body));
        let result = self.client().mutate(&toasts, call).await;
        self.client().session().clear();
        if let Err(err) = &result {
            warn!(error = %err, "logout call failed; local session cleared anyway");
        }
        result
    }

    /// Ask the server to rotate the session cookie. No toasts.
    #[instrument(skip(self))]
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        discard(self.client().post::<_, Value>(REFRESH_PATH, &empty_body())).await
    }
}

fn empty_body() -> Value {
    Value::Object(Map::new())
}
