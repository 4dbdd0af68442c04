use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;
use crate::modules::irrf_simulator::core::row::{Row, RowId, RowOutcome};

pub struct RowBuilder {
    inner: Row,
}

#[allow(dead_code)]
impl RowBuilder {
    pub fn new(id: RowId) -> Self {
        Self {
            inner: Row::blank(id),
        }
    }

    pub fn identifier(mut self, v: impl Into<String>) -> Self {
        self.inner.identifier = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn gross_salary(mut self, v: impl Into<String>) -> Self {
        self.inner.gross_salary = v.into();
        self
    }

    pub fn dependents(mut self, v: impl Into<String>) -> Self {
        self.inner.dependents = v.into();
        self
    }

    pub fn computed(mut self, result: IrrfResult) -> Self {
        self.inner.apply(RowOutcome::Computed(result));
        self
    }

    pub fn failed(mut self, reason: impl Into<String>) -> Self {
        self.inner.apply(RowOutcome::Failed(reason.into()));
        self
    }

    pub fn build(self) -> Row {
        self.inner
    }
}
