// Breakdown of one computed row: the figures shown in the details panel and
// printed on the calculation memo.

use crate::modules::irrf_simulator::core::row::{Row, RowId};
use crate::modules::irrf_simulator::core::row_store::{RowStore, RowStoreError};
use crate::shared::core::numeric_text::{PLACEHOLDER, format_currency};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDetails {
    pub id: RowId,
    pub identifier: String,
    pub name: String,
    pub taxable_income: String,
    pub inss: String,
    pub simplified_deduction: String,
    pub deduction_used: String,
    /// `"INSS"` or `"Simplif."`, whichever reached the base.
    pub deduction_kind: String,
    /// Count the result was computed with.
    pub dependents: String,
    pub dependents_deduction: String,
    pub base: String,
    pub ir_2025: String,
    pub reform_reduction: String,
    pub ir_2026: String,
}

/// `None` when the row has no computed result.
pub fn project(row: &Row) -> Option<RowDetails> {
    let result = row.result.as_ref()?;
    Some(RowDetails {
        id: row.id,
        identifier: row.identifier.clone(),
        name: row.name.clone(),
        taxable_income: format_currency(result.taxable_income()),
        inss: format_currency(result.inss_real),
        simplified_deduction: format_currency(result.deducao_simplificada),
        deduction_used: format_currency(result.deducao_utilizada),
        deduction_kind: result.deduction_kind().label().to_string(),
        dependents: result
            .dependentes
            .map_or_else(|| PLACEHOLDER.to_string(), |count| count.to_string()),
        dependents_deduction: format_currency(result.deducao_dependentes),
        base: format_currency(result.base_irrf),
        ir_2025: format_currency(result.current_year_tax()),
        reform_reduction: format_currency(result.reducao_reforma),
        ir_2026: format_currency(result.reform_year_tax()),
    })
}

pub fn find(store: &RowStore, id: RowId) -> Result<Option<RowDetails>, RowStoreError> {
    store.get(id).map(project).ok_or(RowStoreError::NotFound(id))
}
