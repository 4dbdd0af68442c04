use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::irrf_simulator::use_cases::list_rows::projection::{RowView, project_all};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRow {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    pub gross_salary: String,
    pub dependents: String,
    pub inss: String,
    pub base: String,
    pub ir_2026: String,
    pub error: Option<String>,
    pub has_result: bool,
}

impl From<RowView> for GqlRow {
    fn from(v: RowView) -> Self {
        Self {
            id: v.id as i64,
            identifier: v.identifier,
            name: v.name,
            gross_salary: v.gross_salary,
            dependents: v.dependents,
            inss: v.inss,
            base: v.base,
            ir_2026: v.ir_2026,
            error: v.error,
            has_result: v.has_result,
        }
    }
}

#[derive(Default)]
pub struct ListRowsQuery;

#[Object]
impl ListRowsQuery {
    async fn rows(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRow>> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.read().await;
        Ok(project_all(&store).into_iter().map(Into::into).collect())
    }
}
