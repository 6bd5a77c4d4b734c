use dioxus::prelude::*;

use crate::state::use_app_actions;
use crate::API_CLIENT;

/// One-shot health probe against the backend, run when the dashboard mounts.
pub fn use_backend_health() {
    let mut actions = use_app_actions();

    use_future(move || async move {
        let Some(client) = API_CLIENT.get().cloned() else {
            actions.set_backend_reachable(false);
            return;
        };

        match client.health().await {
            Ok(status) => actions.set_backend_reachable(status.is_ok()),
            Err(err) => {
                tracing::warn!("health check failed: {err}");
                actions.set_backend_reachable(false);
            }
        }
    });
}
