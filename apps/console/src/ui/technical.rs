use dioxus::prelude::*;

use crate::models::TechnicalItemView;

const TH_CLASS: &str = "border border-slate-300 px-2 py-1 text-left";
const TD_CLASS: &str = "border border-slate-300 px-2 py-1";

#[component]
pub fn TechnicalSection(items: Vec<TechnicalItemView>) -> Element {
    let body = if items.is_empty() {
        rsx! {
            p { class: "mt-2 text-sm text-slate-600", "No technical items found." }
        }
    } else {
        rsx! {
            div { class: "mt-3 space-y-4",
                for item in items.iter() {
                    div { class: "rounded border border-slate-200 bg-white p-3",
                        p { class: "mb-2 text-sm font-bold",
                            "RFP Item: "
                            span { class: "font-normal", "{item.rfp_item}" }
                        }
                        if item.matches.is_empty() {
                            p { class: "text-sm text-slate-600", "No SKU matches found." }
                        } else {
                            table { class: "w-full border-collapse text-sm",
                                thead { class: "bg-slate-200",
                                    tr {
                                        th { class: TH_CLASS, "SKU" }
                                        th { class: TH_CLASS, "Score" }
                                        th { class: TH_CLASS, "Cores" }
                                        th { class: TH_CLASS, "Area" }
                                        th { class: TH_CLASS, "Insulation" }
                                        th { class: TH_CLASS, "Material" }
                                        th { class: TH_CLASS, "Voltage" }
                                    }
                                }
                                tbody {
                                    // rows stay in the order the matcher produced
                                    for candidate in item.matches.iter() {
                                        tr {
                                            td { class: TD_CLASS, "{candidate.sku_id}" }
                                            td { class: TD_CLASS, "{candidate.score}" }
                                            td { class: TD_CLASS, "{candidate.cores}" }
                                            td { class: TD_CLASS, "{candidate.area_sqmm}" }
                                            td { class: TD_CLASS, "{candidate.insulation}" }
                                            td { class: TD_CLASS, "{candidate.material}" }
                                            td { class: TD_CLASS, "{candidate.voltage}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "rounded-lg border border-slate-200 bg-slate-50 p-4 shadow-sm",
            h2 { class: "text-xl font-bold text-slate-900", "Technical – Spec Match" }
            {body}
        }
    }
}
