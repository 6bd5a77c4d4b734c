use dioxus::prelude::*;

use crate::models::WorkflowView;

pub type AppSignal = Signal<AppState>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Done,
    Failed,
}

/// The run lifecycle triple: phase, last result, last error.
///
/// A monotonically increasing run token settles overlapping triggers: only the
/// completion carrying the latest token is applied, late responses from an
/// earlier click are dropped.
#[derive(Clone, Debug, Default)]
pub struct WorkflowState {
    pub phase: RunPhase,
    pub result: Option<WorkflowView>,
    pub error: Option<String>,
    run_token: u64,
}

impl WorkflowState {
    pub fn begin_run(&mut self) -> u64 {
        self.run_token += 1;
        self.phase = RunPhase::Running;
        self.error = None;
        self.result = None;
        self.run_token
    }

    /// Applies a run outcome. Returns false when the token is stale and the
    /// outcome was discarded.
    pub fn complete_run(&mut self, token: u64, outcome: Result<WorkflowView, String>) -> bool {
        if token != self.run_token {
            tracing::debug!(token, latest = self.run_token, "discarding stale run outcome");
            return false;
        }

        match outcome {
            Ok(view) => {
                self.result = Some(view);
                self.error = None;
                self.phase = RunPhase::Done;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = RunPhase::Failed;
            }
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Render priority: error banner, then idle prompt, then busy indicator,
    /// then the result sections.
    pub fn panel_mode(&self) -> PanelMode {
        if let Some(message) = self.error.as_ref() {
            return PanelMode::Error(message.clone());
        }
        if self.is_running() {
            return PanelMode::Running;
        }
        match self.result.as_ref() {
            Some(view) => PanelMode::Result(view.clone()),
            None => PanelMode::Idle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelMode {
    Error(String),
    Idle,
    Running,
    Result(WorkflowView),
}

#[derive(Clone, Debug, Default)]
pub struct BackendState {
    /// None until the startup health probe resolves.
    pub reachable: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub workflow: WorkflowState,
    pub backend: BackendState,
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn begin_run(&mut self) -> u64 {
        self.state.write().workflow.begin_run()
    }

    pub fn complete_run(&mut self, token: u64, outcome: Result<WorkflowView, String>) {
        self.state.write().workflow.complete_run(token, outcome);
    }

    pub fn set_backend_reachable(&mut self, reachable: bool) {
        self.state.write().backend.reachable = Some(reachable);
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done_view() -> WorkflowView {
        WorkflowView {
            rfp_file: Some("data/rfps/rfp_001.txt".into()),
            ..WorkflowView::default()
        }
    }

    #[test]
    fn trigger_clears_previous_outcome() {
        let mut state = WorkflowState::default();
        let token = state.begin_run();
        assert!(state.complete_run(token, Err("boom".into())));
        assert_eq!(state.phase, RunPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.begin_run();
        assert_eq!(state.phase, RunPhase::Running);
        assert!(state.error.is_none());
        assert!(state.result.is_none());
    }

    #[test]
    fn success_stores_result_and_finishes() {
        let mut state = WorkflowState::default();
        let token = state.begin_run();
        assert!(state.is_running());

        assert!(state.complete_run(token, Ok(done_view())));
        assert_eq!(state.phase, RunPhase::Done);
        assert!(!state.is_running());
        assert!(state.result.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_sets_message_and_finishes() {
        let mut state = WorkflowState::default();
        let token = state.begin_run();

        assert!(state.complete_run(token, Err("Request failed".into())));
        assert_eq!(state.phase, RunPhase::Failed);
        assert!(!state.is_running());
        assert_eq!(state.error.as_deref(), Some("Request failed"));
        assert!(state.result.is_none());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = WorkflowState::default();
        let first = state.begin_run();
        let second = state.begin_run();

        // Late response from the first click loses.
        assert!(!state.complete_run(first, Ok(done_view())));
        assert!(state.is_running());
        assert!(state.result.is_none());

        assert!(state.complete_run(second, Err("second failed".into())));
        assert_eq!(state.phase, RunPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("second failed"));
    }

    #[test]
    fn error_banner_takes_priority_over_everything() {
        let mut state = WorkflowState::default();
        let token = state.begin_run();
        state.complete_run(token, Ok(done_view()));
        state.error = Some("late failure".into());

        assert_eq!(state.panel_mode(), PanelMode::Error("late failure".into()));
    }

    #[test]
    fn panel_mode_follows_lifecycle() {
        let mut state = WorkflowState::default();
        assert_eq!(state.panel_mode(), PanelMode::Idle);

        let token = state.begin_run();
        assert_eq!(state.panel_mode(), PanelMode::Running);

        state.complete_run(token, Ok(done_view()));
        assert!(matches!(state.panel_mode(), PanelMode::Result(_)));

        let token = state.begin_run();
        state.complete_run(token, Err("x".into()));
        assert_eq!(state.panel_mode(), PanelMode::Error("x".into()));
    }
}
