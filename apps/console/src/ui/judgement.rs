use dioxus::prelude::*;

use crate::models::JudgedItemView;

#[component]
pub fn JudgementSection(items: Vec<JudgedItemView>) -> Element {
    let body = if items.is_empty() {
        rsx! {
            p { class: "mt-2 text-sm text-slate-600", "No judged items." }
        }
    } else {
        rsx! {
            div { class: "mt-3 space-y-1 text-sm text-slate-800",
                for item in items.iter() {
                    p {
                        "{item.rfp_item} → Score: {item.judge_score}"
                        if let Some(reason) = item.reason.as_ref() {
                            span { class: "text-slate-500", " ({reason})" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "rounded-lg border border-slate-200 bg-slate-50 p-4 shadow-sm",
            h2 { class: "text-xl font-bold text-slate-900", "Judgement" }
            {body}
        }
    }
}
