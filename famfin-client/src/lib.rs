#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Client-side session coordination for FamFin.
//!
//! Three pieces cooperate:
//!
//! * [`SessionStore`] owns the signed-in identity, persists it and verifies
//!   it against `GET /users/profile`.
//! * [`AuthGuard`] gates the `/dashboard` area behind a verified session.
//! * [`CallbackResolver`] finishes an external login round trip.
//!
//! [`FamfinClient`] is the typed REST client they talk to. Hosts supply a
//! [`Navigator`], a [`Notifier`] and a [`storage::KeyValueStorage`].

pub mod api;
pub mod callback;
pub mod error;
pub mod guard;
pub mod interceptor;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod guard_test;

pub use api::{FamfinClient, ProfileSource};
pub use callback::{CallbackOutcome, CallbackResolver};
pub use error::{ClientError, ClientResult, StorageError};
pub use guard::{AuthGuard, GuardOutcome, GuardPhase, Liveness};
pub use interceptor::UnauthorizedInterceptor;
pub use navigation::Navigator;
pub use notify::{NoticeLevel, Notifier};
pub use session::{SessionState, SessionStatus, SessionStore};
