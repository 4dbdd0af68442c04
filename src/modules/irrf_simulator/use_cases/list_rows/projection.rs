// Table view of the batch: what each row shows after the last run.

use crate::modules::irrf_simulator::core::row::{Row, RowId};
use crate::modules::irrf_simulator::core::row_store::RowStore;
use crate::shared::core::numeric_text::{PLACEHOLDER, format_currency};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: RowId,
    pub identifier: String,
    pub name: String,
    pub gross_salary: String,
    pub dependents: String,
    /// Computed INSS and whether it or the simplified deduction was used.
    pub inss: String,
    pub base: String,
    pub ir_2026: String,
    pub error: Option<String>,
    /// Details and memo export are only available for computed rows.
    pub has_result: bool,
}

pub fn project(row: &Row) -> RowView {
    let result = row.result.as_ref();
    RowView {
        id: row.id,
        identifier: row.identifier.clone(),
        name: row.name.clone(),
        gross_salary: row.gross_salary.clone(),
        dependents: row.dependents.clone(),
        inss: result.map_or_else(
            || PLACEHOLDER.to_string(),
            |r| format!("{} • {}", format_currency(r.inss_real), r.deduction_kind().label()),
        ),
        base: if row.computed_base != 0.0 {
            format_currency(row.computed_base)
        } else {
            PLACEHOLDER.to_string()
        },
        ir_2026: result.map_or_else(
            || PLACEHOLDER.to_string(),
            |r| format_currency(r.reform_year_tax()),
        ),
        error: row.error.clone(),
        has_result: result.is_some(),
    }
}

pub fn project_all(store: &RowStore) -> Vec<RowView> {
    store.rows().iter().map(project).collect()
}
