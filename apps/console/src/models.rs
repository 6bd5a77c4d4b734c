use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Composed payload returned by the backend orchestrator endpoint.
///
/// Every level is optional: the backend assembles this tree from independent
/// pipeline stages and any of them may be missing from a partial run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowRunResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_summary: Option<SalesSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingReport>,
    #[serde(default, alias = "oumi_judgement", skip_serializing_if = "Option::is_none")]
    pub judgement: Option<JudgementReport>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_summary: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TechnicalReport {
    #[serde(default)]
    pub items: Vec<TechnicalItem>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TechnicalItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_item: Option<String>,
    #[serde(default)]
    pub top_matches: Vec<SkuMatch>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SkuMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub cores: String,
    #[serde(default)]
    pub area_sqmm: String,
    #[serde(default)]
    pub insulation: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub voltage: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PricingReport {
    #[serde(default)]
    pub priced_items: Vec<PricedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PricedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_item: Option<String>,
    // The pricing stage emits either a SKU id or the literal "-", so these
    // two stay loose JSON values until normalization.
    #[serde(default)]
    pub best_match_sku: Value,
    #[serde(default)]
    pub match_score: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PriceBreakdown>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PriceBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JudgementReport {
    #[serde(default)]
    pub judged_items: Vec<JudgedItem>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JudgedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

const EMPTY_CELL: &str = "-";

/// Render-ready projection of a [`WorkflowRunResult`].
///
/// All missing-field fallbacks, placeholder dashes and currency formatting are
/// decided here, exactly once, so the UI layer only prints strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowView {
    pub rfp_file: Option<String>,
    pub summary: Option<SummaryView>,
    pub technical_items: Vec<TechnicalItemView>,
    pub pricing_rows: Vec<PricingRowView>,
    pub grand_total: Option<String>,
    pub judged_items: Vec<JudgedItemView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryView {
    pub rfp_id: String,
    pub title: String,
    pub due_date: String,
    pub scope_summary: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TechnicalItemView {
    pub rfp_item: String,
    pub matches: Vec<SkuMatchView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkuMatchView {
    pub sku_id: String,
    pub score: String,
    pub cores: String,
    pub area_sqmm: String,
    pub insulation: String,
    pub material: String,
    pub voltage: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingRowView {
    pub rfp_item: String,
    pub best_match_sku: String,
    pub match_score: String,
    pub total_cost: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JudgedItemView {
    pub rfp_item: String,
    pub judge_score: String,
    pub reason: Option<String>,
}

impl WorkflowView {
    pub fn from_payload(payload: WorkflowRunResult) -> Self {
        let summary = payload.sales_summary.map(|sales| SummaryView {
            rfp_id: text_or_dash(sales.rfp_id),
            title: text_or_dash(sales.title),
            due_date: text_or_dash(sales.due_date),
            scope_summary: text_or_dash(sales.scope_summary),
        });

        let technical_items = payload
            .technical
            .map(|report| report.items)
            .unwrap_or_default()
            .into_iter()
            .map(|item| TechnicalItemView {
                rfp_item: text_or_dash(item.rfp_item),
                // keep the order the matching stage produced
                matches: item.top_matches.into_iter().map(SkuMatchView::from).collect(),
            })
            .collect();

        let (pricing_rows, grand_total) = match payload.pricing {
            Some(report) => {
                let currency = report.currency.clone();
                let rows = report
                    .priced_items
                    .into_iter()
                    .map(|item| PricingRowView::from_item(item, currency.as_deref()))
                    .collect();
                let grand_total = report
                    .grand_total
                    .map(|total| format_money(total, currency.as_deref()));
                (rows, grand_total)
            }
            None => (Vec::new(), None),
        };

        let judged_items = payload
            .judgement
            .map(|report| report.judged_items)
            .unwrap_or_default()
            .into_iter()
            .map(|item| JudgedItemView {
                rfp_item: text_or_dash(item.rfp_item),
                judge_score: item.judge_score.map(format_score).unwrap_or_else(dash),
                reason: item.reason,
            })
            .collect();

        Self {
            rfp_file: payload.rfp_file,
            summary,
            technical_items,
            pricing_rows,
            grand_total,
            judged_items,
        }
    }
}

impl From<SkuMatch> for SkuMatchView {
    fn from(m: SkuMatch) -> Self {
        Self {
            sku_id: text_or_dash(m.sku_id),
            score: m.score.map(format_score).unwrap_or_else(dash),
            cores: cell_or_dash(m.cores),
            area_sqmm: cell_or_dash(m.area_sqmm),
            insulation: cell_or_dash(m.insulation),
            material: cell_or_dash(m.material),
            voltage: cell_or_dash(m.voltage),
        }
    }
}

impl PricingRowView {
    fn from_item(item: PricedItem, report_currency: Option<&str>) -> Self {
        let total_cost = item
            .pricing
            .as_ref()
            .and_then(|breakdown| {
                breakdown
                    .total_cost
                    .map(|total| format_money(total, breakdown.currency.as_deref().or(report_currency)))
            })
            .unwrap_or_else(dash);

        Self {
            rfp_item: text_or_dash(item.rfp_item),
            best_match_sku: loose_cell(&item.best_match_sku),
            match_score: loose_cell(&item.match_score),
            total_cost,
        }
    }
}

fn dash() -> String {
    EMPTY_CELL.to_string()
}

fn text_or_dash(value: Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => dash(),
    }
}

fn cell_or_dash(value: String) -> String {
    if value.trim().is_empty() {
        dash()
    } else {
        value
    }
}

/// Renders a loose JSON cell, treating null and empty strings as absent.
fn loose_cell(value: &Value) -> String {
    match value {
        Value::Null => dash(),
        Value::String(text) if text.trim().is_empty() => dash(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}

fn format_money(amount: f64, currency: Option<&str>) -> String {
    format!("{}{amount:.2}", currency_symbol(currency))
}

fn currency_symbol(code: Option<&str>) -> String {
    match code {
        Some("INR") | None => "₹".to_string(),
        Some(other) => format!("{other} "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view_from(value: serde_json::Value) -> WorkflowView {
        let payload: WorkflowRunResult =
            serde_json::from_value(value).expect("payload should deserialize");
        WorkflowView::from_payload(payload)
    }

    #[test]
    fn missing_technical_section_yields_no_items() {
        let view = view_from(json!({
            "sales_summary": {"rfp_id": "RFP-9"}
        }));
        assert!(view.technical_items.is_empty());
        assert!(view.pricing_rows.is_empty());
        assert!(view.judged_items.is_empty());
        assert!(view.grand_total.is_none());
    }

    #[test]
    fn empty_candidate_list_survives_normalization() {
        let view = view_from(json!({
            "technical": {"items": [{"rfp_item": "3 core cable", "top_matches": []}]}
        }));
        assert_eq!(view.technical_items.len(), 1);
        assert_eq!(view.technical_items[0].rfp_item, "3 core cable");
        assert!(view.technical_items[0].matches.is_empty());
    }

    #[test]
    fn candidate_order_is_preserved() {
        let view = view_from(json!({
            "technical": {"items": [{
                "rfp_item": "cable",
                "top_matches": [
                    {"sku_id": "SKU-2", "score": 40},
                    {"sku_id": "SKU-1", "score": 90}
                ]
            }]}
        }));
        let matches = &view.technical_items[0].matches;
        assert_eq!(matches[0].sku_id, "SKU-2");
        assert_eq!(matches[1].sku_id, "SKU-1");
        assert_eq!(matches[1].score, "90");
    }

    #[test]
    fn complete_but_empty_payload_renders_summary_and_nothing_else() {
        let view = view_from(json!({
            "sales_summary": {
                "rfp_id": "RFP-1",
                "title": "T",
                "due_date": "2024-01-01",
                "scope_summary": "S"
            },
            "technical": {"items": []},
            "pricing": {"priced_items": []},
            "judgement": {"judged_items": []}
        }));

        let summary = view.summary.expect("summary present");
        assert_eq!(summary.rfp_id, "RFP-1");
        assert_eq!(summary.title, "T");
        assert_eq!(summary.due_date, "2024-01-01");
        assert_eq!(summary.scope_summary, "S");
        assert!(view.technical_items.is_empty());
        assert!(view.pricing_rows.is_empty());
        assert!(view.judged_items.is_empty());
        assert!(view.grand_total.is_none());
    }

    #[test]
    fn priced_item_with_null_fields_renders_dashes() {
        let view = view_from(json!({
            "pricing": {"priced_items": [{
                "rfp_item": "Item A",
                "best_match_sku": null,
                "match_score": null,
                "pricing": {"total_cost": null}
            }]}
        }));

        let row = &view.pricing_rows[0];
        assert_eq!(row.rfp_item, "Item A");
        assert_eq!(row.best_match_sku, "-");
        assert_eq!(row.match_score, "-");
        assert_eq!(row.total_cost, "-");
    }

    #[test]
    fn dash_placeholders_from_backend_pass_through() {
        let view = view_from(json!({
            "pricing": {"priced_items": [{
                "rfp_item": "Item B",
                "best_match_sku": "-",
                "match_score": "-",
                "pricing": null
            }]}
        }));

        let row = &view.pricing_rows[0];
        assert_eq!(row.best_match_sku, "-");
        assert_eq!(row.match_score, "-");
        assert_eq!(row.total_cost, "-");
    }

    #[test]
    fn grand_total_formats_only_when_present() {
        let with_total = view_from(json!({
            "pricing": {
                "priced_items": [{
                    "rfp_item": "Item A",
                    "best_match_sku": "SKU-1",
                    "match_score": 80,
                    "pricing": {"total_cost": 5400.0, "currency": "INR", "found": true}
                }],
                "grand_total": 5400.0,
                "currency": "INR"
            }
        }));
        assert_eq!(with_total.grand_total.as_deref(), Some("₹5400.00"));
        assert_eq!(with_total.pricing_rows[0].total_cost, "₹5400.00");
        assert_eq!(with_total.pricing_rows[0].match_score, "80");

        let without_total = view_from(json!({
            "pricing": {"priced_items": []}
        }));
        assert!(without_total.grand_total.is_none());
    }

    #[test]
    fn judgement_accepts_original_backend_key() {
        let view = view_from(json!({
            "oumi_judgement": {"judged_items": [
                {"rfp_item": "cable", "judge_score": 72.5, "best_sku": "SKU-1"}
            ]}
        }));
        assert_eq!(view.judged_items.len(), 1);
        assert_eq!(view.judged_items[0].rfp_item, "cable");
        assert_eq!(view.judged_items[0].judge_score, "72.5");
    }

    #[test]
    fn blank_summary_fields_fall_back_to_dash() {
        let view = view_from(json!({
            "sales_summary": {"rfp_id": "  ", "title": null}
        }));
        let summary = view.summary.expect("summary present");
        assert_eq!(summary.rfp_id, "-");
        assert_eq!(summary.title, "-");
        assert_eq!(summary.due_date, "-");
        assert_eq!(summary.scope_summary, "-");
    }

    #[test]
    fn health_status_checks_ok_literal() {
        let healthy: HealthStatus = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(healthy.is_ok());

        let empty: HealthStatus = serde_json::from_value(json!({})).unwrap();
        assert!(!empty.is_ok());
    }
}
