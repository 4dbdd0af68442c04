use crate::modules::irrf_simulator::core::row_store::RowField;
use serde::Deserialize;

/// Partial edit of a row; only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRow {
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub gross_salary: Option<String>,
    pub dependents: Option<String>,
}

impl UpdateRow {
    pub fn edits(self) -> Vec<(RowField, String)> {
        [
            (RowField::Identifier, self.identifier),
            (RowField::Name, self.name),
            (RowField::GrossSalary, self.gross_salary),
            (RowField::Dependents, self.dependents),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}
