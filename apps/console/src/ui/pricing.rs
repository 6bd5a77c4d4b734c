use dioxus::prelude::*;

use crate::models::PricingRowView;

const TH_CLASS: &str = "border border-slate-300 px-2 py-1 text-left";
const TD_CLASS: &str = "border border-slate-300 px-2 py-1";

#[component]
pub fn PricingSection(rows: Vec<PricingRowView>, grand_total: Option<String>) -> Element {
    rsx! {
        section { class: "rounded-lg border border-slate-200 bg-slate-50 p-4 shadow-sm",
            h2 { class: "text-xl font-bold text-slate-900", "Pricing" }
            table { class: "mt-3 w-full border-collapse text-sm",
                thead { class: "bg-slate-200",
                    tr {
                        th { class: TH_CLASS, "RFP Item" }
                        th { class: TH_CLASS, "Best SKU" }
                        th { class: TH_CLASS, "Match %" }
                        th { class: TH_CLASS, "Total Cost" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr {
                            td { class: TD_CLASS, "{row.rfp_item}" }
                            td { class: TD_CLASS, "{row.best_match_sku}" }
                            td { class: TD_CLASS, "{row.match_score}" }
                            td { class: TD_CLASS, "{row.total_cost}" }
                        }
                    }
                }
            }
            if rows.is_empty() {
                p { class: "mt-2 text-sm text-slate-600", "No priced items." }
            }
            if let Some(total) = grand_total.as_ref() {
                div { class: "mt-4 text-right text-lg font-bold text-slate-900",
                    "Grand Total: {total}"
                }
            }
        }
    }
}
