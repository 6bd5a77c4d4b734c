#![allow(non_snake_case)]

mod api;
mod config;
mod hooks;
mod models;
mod state;
mod ui;

use api::{ClientError, WorkflowClient};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::{error, info};
use ui::status::BackendStatusLine;
use ui::workflow::WorkflowPanel;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<WorkflowClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_infrastructure();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_infrastructure() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config.clone());

    match WorkflowClient::new(config) {
        Ok(client) => {
            let _ = API_CLIENT.set(client);
            info!("workflow client initialized");
        }
        Err(err) => {
            report_client_error("failed to initialize workflow client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    hooks::health::use_backend_health();

    let api_endpoint = APP_CONFIG
        .get()
        .map(|c| c.api_base_url.clone())
        .unwrap_or_else(|| "API base URL not configured".to_string());

    rsx! {
        main { class: "app-shell min-h-screen space-y-6 bg-white p-8 text-slate-900",
            section { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                p { class: "text-sm text-slate-600", "Workflow API: {api_endpoint}" }
                BackendStatusLine {}
            }
            WorkflowPanel {}
        }
    }
}
