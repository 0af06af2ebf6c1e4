//! Auth session: token persistence and the explicit refresh transition.
//!
//! The token moves through explicit states: valid while the server accepts
//! it, expired when a call comes back 401, refreshing while `/auth/refresh`
//! is in flight, then valid again or failed. A failed refresh clears the
//! token locally; there is no retry loop.

use storefront_api::types::{LoginRequest, Profile, RefreshRequest, RegisterRequest};
use storefront_api::{Client, Error};

use crate::error::SessionError;
use crate::store::{StateStore, AUTH_TOKEN_KEY};

/// Stateful auth wrapper over the API client.
pub struct AuthSession<'a, S: StateStore> {
    client: &'a Client,
    store: S,
}

impl<'a, S: StateStore> AuthSession<'a, S> {
    /// Creates a session, re-arming the client with any previously saved token.
    pub fn new(client: &'a Client, store: S) -> Self {
        if let Some(token) = store.get(AUTH_TOKEN_KEY) {
            client.set_token(&token);
        }
        Self { client, store }
    }

    /// Exchanges credentials for a token, persisting it on success.
    pub async fn login(&self, req: &LoginRequest) -> Result<(), SessionError> {
        let tokens = self.client.login(req).await?;
        self.remember_token(&tokens.access_token);
        Ok(())
    }

    /// Registers a new customer account. Does not log in.
    pub async fn register(&self, req: &RegisterRequest) -> Result<Profile, SessionError> {
        Ok(self.client.register(req).await?)
    }

    /// Fetches the profile, refreshing the token once if the server rejects
    /// the current one. A failed refresh clears the token and surfaces
    /// `Unauthorized`.
    pub async fn profile(&self) -> Result<Profile, SessionError> {
        match self.client.get_profile().await {
            Ok(profile) => Ok(profile),
            Err(Error::Unauthorized) => {
                tracing::debug!("access token rejected, refreshing");
                match self.refresh().await {
                    Ok(()) => Ok(self.client.get_profile().await?),
                    Err(err) => {
                        tracing::warn!("token refresh failed: {}", err);
                        self.forget_token();
                        Err(Error::Unauthorized.into())
                    }
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Exchanges the current token for a fresh one and persists it.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        let Some(current) = self.client.token() else {
            return Err(Error::Unauthorized.into());
        };
        let tokens = self
            .client
            .refresh_token(&RefreshRequest { token: current })
            .await?;
        self.remember_token(&tokens.access_token);
        Ok(())
    }

    /// Logs out. The server call is best-effort; local token state is always
    /// cleared.
    pub async fn logout(&self) {
        if let Err(err) = self.client.logout().await {
            tracing::warn!("server-side logout failed: {}", err);
        }
        self.forget_token();
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.client.token().is_some()
    }

    fn remember_token(&self, token: &str) {
        self.client.set_token(token);
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    fn forget_token(&self) {
        self.client.clear_token();
        self.store.remove(AUTH_TOKEN_KEY);
    }
}
