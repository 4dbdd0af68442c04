use crate::modules::irrf_simulator::core::ports::{IrrfCalculator, MemoPrinter};
use crate::modules::irrf_simulator::core::row_store::{RowStore, SharedRowStore};
use crate::modules::irrf_simulator::use_cases::export_memo::handler::ExportMemoHandler;
use crate::modules::irrf_simulator::use_cases::manage_rows::handler::ManageRowsHandler;
use crate::modules::irrf_simulator::use_cases::run_batch::handler::RunBatchHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedRowStore,
    pub rows_handler: Arc<ManageRowsHandler>,
    pub run_batch_handler: Arc<RunBatchHandler<dyn IrrfCalculator>>,
    pub export_memo_handler: Arc<ExportMemoHandler>,
}

impl AppState {
    pub fn new(
        calculator: Arc<dyn IrrfCalculator>,
        printer: Option<Arc<dyn MemoPrinter>>,
    ) -> Self {
        let store = RowStore::shared();
        Self {
            rows_handler: Arc::new(ManageRowsHandler::new(store.clone())),
            run_batch_handler: Arc::new(RunBatchHandler::new(store.clone(), calculator)),
            export_memo_handler: Arc::new(ExportMemoHandler::new(store.clone(), printer)),
            store,
        }
    }
}
