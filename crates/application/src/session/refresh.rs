//! Token refresh coordination
//!
//! Collapses concurrent refresh attempts into a single remote call: the
//! first caller installs the in-flight future, later callers await the
//! same shared handle, and every waiter resolves to the same outcome.
//! Side effects of the refresh (persisting the new token, forcing a
//! logout on rejection) live inside the installed future and therefore
//! run exactly once no matter how many callers were waiting.

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use tokio::sync::Mutex;

use crate::error::SessionResult;

type SharedRefresh = Shared<BoxFuture<'static, SessionResult<String>>>;

/// Single-flight guard for token refreshes.
#[derive(Default)]
pub(crate) struct RefreshCoordinator {
    inflight: Mutex<Option<SharedRefresh>>,
}

impl RefreshCoordinator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs `refresh` unless one is already in flight, in which case the
    /// caller joins the pending flight. The installing caller clears the
    /// slot after resolution; a caller arriving between resolution and
    /// clearing receives the just-resolved outcome, which is equivalent to
    /// having joined the flight a moment earlier.
    pub(crate) async fn run(
        &self,
        refresh: impl FnOnce() -> BoxFuture<'static, SessionResult<String>>,
    ) -> SessionResult<String> {
        let (shared, installed) = {
            let mut slot = self.inflight.lock().await;
            match slot.as_ref() {
                Some(existing) => (existing.clone(), false),
                None => {
                    let shared = refresh().shared();
                    *slot = Some(shared.clone());
                    (shared, true)
                }
            }
        };

        let outcome = shared.await;

        if installed {
            *self.inflight.lock().await = None;
        }

        outcome
    }
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator").finish_non_exhaustive()
    }
}
