use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::use_cases::manage_rows::command::UpdateRow;
use crate::shell::state::AppState;

pub fn row_id(id: i64) -> GqlResult<RowId> {
    RowId::try_from(id).map_err(|_| async_graphql::Error::new(format!("invalid row id {id}")))
}

#[derive(Default)]
pub struct ManageRowsMutation;

#[Object]
impl ManageRowsMutation {
    async fn add_row(&self, context: &Context<'_>) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.rows_handler.add_row().await as i64)
    }

    async fn remove_row(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.rows_handler.remove_row(row_id(id)?).await)
    }

    async fn update_row(
        &self,
        context: &Context<'_>,
        id: i64,
        identifier: Option<String>,
        name: Option<String>,
        gross_salary: Option<String>,
        dependents: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateRow {
            identifier,
            name,
            gross_salary,
            dependents,
        };
        state
            .rows_handler
            .update_row(row_id(id)?, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
