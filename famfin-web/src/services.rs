//! Long-lived objects shared by every component.

use std::sync::Arc;

use client::{
    ClientResult, FamfinClient, SessionStore, UnauthorizedInterceptor, storage::SharedStorage,
};
use shared::config::client::ClientConfig;
use yew::prelude::*;

use crate::{navigation::BrowserLocation, storage::BrowserStorage};

/// The session store and API client, created once at bootstrap.
#[derive(Clone, Debug)]
pub struct AppServices {
    pub session: SessionStore,
    pub api: FamfinClient,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.session.same_store(&other.session)
    }
}

impl AppServices {
    /// Build the services from the configuration baked into the bundle.
    ///
    /// # Errors
    /// Fails when the configured API base URL is unusable.
    pub fn bootstrap() -> ClientResult<Self> {
        let config = ClientConfig::from_build_env();
        config.validate()?;

        let storage: SharedStorage = Arc::new(BrowserStorage);
        let session = SessionStore::open(storage.clone(), config.storage_key.clone());
        let interceptor = UnauthorizedInterceptor::new(storage.clone(), Arc::new(BrowserLocation));
        let api = FamfinClient::new(&config, storage)?.with_interceptor(interceptor);

        log::info!(
            "session restored: authenticated={}",
            session.is_authenticated()
        );
        Ok(Self { session, api })
    }
}

/// Services provided by the app root.
///
/// # Panics
/// Panics when used outside the root provider, which is a wiring bug.
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices context is provided by the app root")
}
