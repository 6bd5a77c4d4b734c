use dioxus::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn BackendStatusLine() -> Element {
    let state = use_app_state();
    let reachable = state.read().backend.reachable;

    let (label, class) = match reachable {
        None => ("Backend: checking...", "text-xs text-slate-400"),
        Some(true) => ("Backend: online", "text-xs text-emerald-600"),
        Some(false) => ("Backend: unreachable", "text-xs text-red-600"),
    };

    rsx! {
        p { class: class, {label} }
    }
}
