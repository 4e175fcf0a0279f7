use client::{SessionState, SessionStore};
use yewdux::{Dispatch, Store};

/// Render-side mirror of the session store.
///
/// The session store is the source of truth; this copy only exists so
/// components re-render when it changes. Call [`AuthState::sync`] after
/// every store mutation.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AuthState {
    pub session: SessionState,
}

impl AuthState {
    pub fn sync(dispatch: &Dispatch<Self>, store: &SessionStore) {
        dispatch.set(Self {
            session: store.snapshot(),
        });
    }
}
