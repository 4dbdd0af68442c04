use crate::modules::irrf_simulator::core::ports::IrrfRequest;
use crate::modules::irrf_simulator::core::row::Row;
use crate::modules::irrf_simulator::use_cases::run_batch::decision::{RowDecision, RowError};
use crate::shared::core::numeric_text::{parse_currency, parse_dependents};

pub fn decide_row(row: &Row) -> RowDecision {
    let gross = parse_currency(row.gross_salary.as_str());
    let dependents = parse_dependents(&row.dependents);

    let blank = row.identifier.trim().is_empty()
        && row.name.trim().is_empty()
        && gross == 0.0
        && dependents == 0;
    if blank {
        return RowDecision::Skip;
    }

    if gross <= 0.0 {
        return RowDecision::Rejected {
            reason: RowError::InvalidSalary,
        };
    }

    RowDecision::Dispatch {
        request: IrrfRequest {
            salario_bruto: gross,
            dependentes: dependents,
        },
    }
}
