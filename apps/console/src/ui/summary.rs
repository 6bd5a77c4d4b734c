use dioxus::prelude::*;

use crate::models::SummaryView;

#[component]
pub fn SalesSummarySection(summary: Option<SummaryView>) -> Element {
    let body = match summary {
        Some(s) => rsx! {
            div { class: "mt-3 space-y-1 text-sm text-slate-800",
                p {
                    strong { "RFP ID: " }
                    "{s.rfp_id}"
                }
                p {
                    strong { "Title: " }
                    "{s.title}"
                }
                p {
                    strong { "Due Date: " }
                    "{s.due_date}"
                }
                p { class: "mt-2 whitespace-pre-line",
                    strong { "Scope Summary:" }
                    br {}
                    "{s.scope_summary}"
                }
            }
        },
        None => rsx! {
            p { class: "mt-2 text-sm italic text-slate-500", "No sales summary available." }
        },
    };

    rsx! {
        section { class: "rounded-lg border border-slate-200 bg-slate-50 p-4 shadow-sm",
            h2 { class: "text-xl font-bold text-slate-900", "Sales Summary" }
            {body}
        }
    }
}
