use dioxus::prelude::*;

use crate::hooks::workflow::run_full_workflow;
use crate::state::{use_app_actions, use_app_state, PanelMode};
use crate::ui::judgement::JudgementSection;
use crate::ui::pricing::PricingSection;
use crate::ui::summary::SalesSummarySection;
use crate::ui::technical::TechnicalSection;

/// The single workflow panel: trigger control plus the prioritized body
/// (error banner > idle prompt > busy indicator > result sections).
#[component]
pub fn WorkflowPanel() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();

    let snapshot = state.read();
    let mode = snapshot.workflow.panel_mode();
    let is_running = snapshot.workflow.is_running();
    drop(snapshot);

    let button_label = if is_running {
        "Running workflow..."
    } else {
        "Run Full RFP Workflow"
    };

    let body = match mode {
        PanelMode::Error(message) => rsx! {
            div { class: "rounded-md bg-red-100 p-3 text-sm font-semibold text-red-900",
                "Error: {message}"
            }
        },
        PanelMode::Idle => rsx! {
            p { class: "text-lg font-medium text-slate-900",
                "Click "
                strong { "\"Run Full RFP Workflow\"" }
                " to begin."
            }
        },
        PanelMode::Running => rsx! {
            p { class: "text-sm text-slate-500", "Workflow in progress..." }
        },
        PanelMode::Result(view) => rsx! {
            section { class: "space-y-6",
                if let Some(file) = view.rfp_file.as_ref() {
                    p { class: "text-xs text-slate-500", "Source RFP: {file}" }
                }
                SalesSummarySection { summary: view.summary.clone() }
                TechnicalSection { items: view.technical_items.clone() }
                PricingSection {
                    rows: view.pricing_rows.clone(),
                    grand_total: view.grand_total.clone(),
                }
                JudgementSection { items: view.judged_items.clone() }
            }
        },
    };

    rsx! {
        section { class: "space-y-6",
            header { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-3xl font-bold text-slate-900", "RFP Agentic Workflow" }
                    p { class: "mt-1 text-base text-slate-600",
                        "Sales • Technical • Pricing • Judgement"
                    }
                }
                button {
                    class: "rounded-md bg-blue-700 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-800 disabled:opacity-60",
                    disabled: is_running,
                    onclick: move |_| run_full_workflow(actions),
                    {button_label}
                }
            }
            {body}
        }
    }
}
