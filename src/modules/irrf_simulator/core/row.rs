use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;

pub type RowId = u64;

/// One employee line of the batch. Text fields hold exactly what the operator typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub identifier: String,
    pub name: String,
    pub gross_salary: String,
    pub dependents: String,
    pub computed_base: f64,
    pub result: Option<IrrfResult>,
    pub error: Option<String>,
}

/// What a batch run decided for one row. Applying it always replaces
/// `computed_base`, `result` and `error` together.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Cleared,
    Computed(IrrfResult),
    Failed(String),
}

impl Row {
    pub fn blank(id: RowId) -> Self {
        Self {
            id,
            identifier: String::new(),
            name: String::new(),
            gross_salary: String::new(),
            dependents: "0".to_string(),
            computed_base: 0.0,
            result: None,
            error: None,
        }
    }

    pub fn apply(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Cleared => {
                self.computed_base = 0.0;
                self.result = None;
                self.error = None;
            }
            RowOutcome::Computed(result) => {
                self.computed_base = result.base();
                self.result = Some(result);
                self.error = None;
            }
            RowOutcome::Failed(reason) => {
                self.computed_base = 0.0;
                self.result = None;
                self.error = Some(reason);
            }
        }
    }
}

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::tests::fixtures::results::IrrfResultBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn computed_row() -> Row {
        let mut row = Row::blank(1);
        row.apply(RowOutcome::Computed(
            IrrfResultBuilder::new().base_irrf(4500.0).build(),
        ));
        row
    }

    #[rstest]
    fn it_should_create_a_blank_row_with_zero_dependents() {
        let row = Row::blank(3);
        assert_eq!(row.id, 3);
        assert_eq!(row.dependents, "0");
        assert!(row.identifier.is_empty() && row.name.is_empty() && row.gross_salary.is_empty());
        assert_eq!(row.computed_base, 0.0);
        assert!(row.result.is_none() && row.error.is_none());
    }

    #[rstest]
    fn it_should_take_the_base_from_a_computed_result(computed_row: Row) {
        assert_eq!(computed_row.computed_base, 4500.0);
        assert!(computed_row.result.is_some());
        assert!(computed_row.error.is_none());
    }

    #[rstest]
    fn it_should_default_the_base_to_zero_when_the_result_has_none() {
        let mut row = Row::blank(1);
        row.apply(RowOutcome::Computed(IrrfResultBuilder::new().build()));
        assert_eq!(row.computed_base, 0.0);
        assert!(row.result.is_some());
    }

    #[rstest]
    fn it_should_drop_a_stale_result_on_failure(mut computed_row: Row) {
        computed_row.apply(RowOutcome::Failed("No connection".into()));
        assert_eq!(computed_row.computed_base, 0.0);
        assert!(computed_row.result.is_none());
        assert_eq!(computed_row.error.as_deref(), Some("No connection"));
    }

    #[rstest]
    fn it_should_drop_a_stale_error_on_success() {
        let mut row = Row::blank(1);
        row.apply(RowOutcome::Failed("Invalid salary".into()));
        row.apply(RowOutcome::Computed(
            IrrfResultBuilder::new().base_irrf(10.0).build(),
        ));
        assert!(row.error.is_none());
        assert_eq!(row.computed_base, 10.0);
    }

    #[rstest]
    fn it_should_clear_everything_for_a_blank_outcome(mut computed_row: Row) {
        computed_row.apply(RowOutcome::Cleared);
        assert_eq!(computed_row.computed_base, 0.0);
        assert!(computed_row.result.is_none() && computed_row.error.is_none());
    }
}
