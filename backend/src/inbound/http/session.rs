//! Session helpers for the author endpoints.
//!
//! Handlers see a signed-in author id, never the raw Actix session.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const AUTHOR_ID_KEY: &str = "author_id";

/// Newtype wrapper that exposes author-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in author. The session key is renewed first so a
    /// pre-login cookie cannot be reused.
    pub fn persist_author(&self, author_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(AUTHOR_ID_KEY, author_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in author, if any. A tampered value counts as signed out.
    pub fn author_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(AUTHOR_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match UserId::new(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                warn!(%error, "invalid author id in session cookie");
                Ok(None)
            }
        }
    }

    /// Require a signed-in author or return `401 Unauthorized`.
    pub fn require_author(&self) -> Result<UserId, Error> {
        self.author_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session value and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
