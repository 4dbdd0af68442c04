use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::core::row_store::{RowStoreError, SharedRowStore};
use crate::modules::irrf_simulator::use_cases::manage_rows::command::UpdateRow;
use tracing::debug;

/// Operator edits to the batch. Each call holds the store lock only briefly.
pub struct ManageRowsHandler {
    store: SharedRowStore,
}

impl ManageRowsHandler {
    pub fn new(store: SharedRowStore) -> Self {
        Self { store }
    }

    pub async fn add_row(&self) -> RowId {
        let id = self.store.write().await.add_row();
        debug!(row = id, "row added");
        id
    }

    pub async fn remove_row(&self, id: RowId) -> bool {
        let removed = self.store.write().await.remove_row(id);
        debug!(row = id, removed, "row removal requested");
        removed
    }

    pub async fn update_row(&self, id: RowId, command: UpdateRow) -> Result<(), RowStoreError> {
        let mut store = self.store.write().await;
        if store.get(id).is_none() {
            return Err(RowStoreError::NotFound(id));
        }
        for (field, value) in command.edits() {
            store.update_row(id, field, value)?;
        }
        Ok(())
    }
}
