use dioxus::prelude::*;

use crate::models::WorkflowView;
use crate::state::AppActions;
use crate::API_CLIENT;

/// Fires one full pipeline run. Re-entrant: a second trigger while a run is in
/// flight allocates a fresh token and the earlier response is discarded on
/// arrival. Every exit path reaches `complete_run`, so the Running phase is
/// always cleared.
pub fn run_full_workflow(mut actions: AppActions) {
    let token = actions.begin_run();

    let Some(client) = API_CLIENT.get().cloned() else {
        actions.complete_run(token, Err("Workflow client not initialized".into()));
        return;
    };

    spawn(async move {
        let outcome = match client.run_full_workflow().await {
            Ok(payload) => {
                tracing::info!("full workflow run completed");
                Ok(WorkflowView::from_payload(payload))
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), "full workflow run failed: {err}");
                Err(err.user_message())
            }
        };
        actions.complete_run(token, outcome);
    });
}
