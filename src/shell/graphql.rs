use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::irrf_simulator::use_cases::list_rows::inbound::graphql::ListRowsQuery;
use crate::modules::irrf_simulator::use_cases::manage_rows::inbound::graphql::ManageRowsMutation;
use crate::modules::irrf_simulator::use_cases::row_details::inbound::graphql::RowDetailsQuery;
use crate::modules::irrf_simulator::use_cases::run_batch::inbound::graphql::RunBatchMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListRowsQuery, RowDetailsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ManageRowsMutation, RunBatchMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
