use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::irrf_simulator::use_cases::manage_rows::inbound::graphql::row_id;
use crate::modules::irrf_simulator::use_cases::row_details::projection::{RowDetails, find};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRowDetails {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    pub taxable_income: String,
    pub inss: String,
    pub simplified_deduction: String,
    pub deduction_used: String,
    pub deduction_kind: String,
    pub dependents: String,
    pub dependents_deduction: String,
    pub base: String,
    pub ir_2025: String,
    pub reform_reduction: String,
    pub ir_2026: String,
}

impl From<RowDetails> for GqlRowDetails {
    fn from(d: RowDetails) -> Self {
        Self {
            id: d.id as i64,
            identifier: d.identifier,
            name: d.name,
            taxable_income: d.taxable_income,
            inss: d.inss,
            simplified_deduction: d.simplified_deduction,
            deduction_used: d.deduction_used,
            deduction_kind: d.deduction_kind,
            dependents: d.dependents,
            dependents_deduction: d.dependents_deduction,
            base: d.base,
            ir_2025: d.ir_2025,
            reform_reduction: d.reform_reduction,
            ir_2026: d.ir_2026,
        }
    }
}

#[derive(Default)]
pub struct RowDetailsQuery;

#[Object]
impl RowDetailsQuery {
    /// `null` while the row has no computed result.
    async fn row(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlRowDetails>> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.read().await;
        let details =
            find(&store, row_id(id)?).map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(details.map(Into::into))
    }
}
