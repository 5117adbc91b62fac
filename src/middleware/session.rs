use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::ops::{Deref, DerefMut};

use crate::database::store::Session;
use crate::error::ApiError;
use crate::state::AppState;

/// Database session scoped to one request.
///
/// Acquired from `AppState.store` before the handler body runs and released
/// when the value is dropped, so the connection goes back to the pool on every
/// exit path, errors included.
pub struct DbSession(Box<dyn Session>);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let session = state.store.session().await?;
        Ok(DbSession(session))
    }
}

impl Deref for DbSession {
    type Target = dyn Session;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
