// Calculation memo for one computed row, as a standalone printable HTML page.

use crate::modules::irrf_simulator::core::row::Row;
use crate::modules::irrf_simulator::use_cases::row_details::projection::project;
use std::fmt::Write as _;
use v_htmlescape::escape;

pub const MEMO_TITLE: &str = "Memória de Cálculo - IRRF";

const STYLE: &str = r#"body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; padding: 24px; }
h1 { font-size: 20px; margin-bottom: 4px; }
h2 { font-size: 16px; margin-top: 18px; }
table { border-collapse: collapse; width: 100%; margin-top: 10px; }
td { padding: 4px 6px; border-bottom: 1px solid #e5e7eb; font-size: 13px; }
td.label { font-weight: 600; width: 45%; }"#;

const PRINT_ON_LOAD: &str =
    r#"window.addEventListener("load", function () { window.focus(); window.print(); });"#;

fn table(html: &mut String, lines: &[(&str, &str)]) {
    html.push_str("<table>\n");
    for (label, value) in lines {
        let _ = writeln!(
            html,
            r#"<tr><td class="label">{label}</td><td>{value}</td></tr>"#
        );
    }
    html.push_str("</table>\n");
}

/// Render the memo for `row`, or `None` when the row has no computed result.
pub fn render_memo(row: &Row) -> Option<String> {
    let details = project(row)?;

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{MEMO_TITLE}</title>\n<style>\n{STYLE}\n</style>\n<script>{PRINT_ON_LOAD}</script>\n</head>\n<body>\n<h1>{MEMO_TITLE}</h1>\n<div>Colaborador: <strong>{} - {}</strong></div>\n",
        escape(&details.identifier),
        escape(&details.name),
    );

    html.push_str("<h2>Base e deduções</h2>\n");
    table(
        &mut html,
        &[
            ("Rendimento tributável", details.taxable_income.as_str()),
            ("INSS calculado", details.inss.as_str()),
            ("Dedução simplificada", details.simplified_deduction.as_str()),
            ("Dedução utilizada", details.deduction_used.as_str()),
            ("Dependentes", details.dependents.as_str()),
            ("Dedução dependentes", details.dependents_deduction.as_str()),
            ("Base IRRF", details.base.as_str()),
        ],
    );

    html.push_str("<h2>IRRF 2025 x 2026</h2>\n");
    table(
        &mut html,
        &[
            ("IRRF 2025", details.ir_2025.as_str()),
            ("Redução reforma 2026", details.reform_reduction.as_str()),
            ("IRRF 2026", details.ir_2026.as_str()),
        ],
    );

    html.push_str("</body>\n</html>\n");
    Some(html)
}

#[cfg(test)]
mod export_memo_render_tests {
    use super::*;
    use crate::tests::fixtures::results::IrrfResultBuilder;
    use crate::tests::fixtures::rows::RowBuilder;
    use rstest::rstest;

    fn cell(label: &str, value: &str) -> String {
        format!(r#"<tr><td class="label">{label}</td><td>{value}</td></tr>"#)
    }

    #[rstest]
    fn it_should_render_nothing_without_a_result() {
        let row = RowBuilder::new(1).name("Maria").failed("No connection").build();
        assert!(render_memo(&row).is_none());
    }

    #[rstest]
    fn it_should_render_the_breakdown_and_comparison() {
        let row = RowBuilder::new(1)
            .identifier("0001")
            .name("Maria")
            .computed(IrrfResultBuilder::full().build())
            .build();

        let html = render_memo(&row).unwrap();

        assert!(html.contains("Colaborador: <strong>0001 - Maria</strong>"));
        assert!(html.contains(&cell("Rendimento tributável", "R$ 6.000,00")));
        assert!(html.contains(&cell("INSS calculado", "R$ 595,72")));
        assert!(html.contains(&cell("Dedução simplificada", "R$ 607,20")));
        assert!(html.contains(&cell("Dedução utilizada", "R$ 607,20")));
        assert!(html.contains(&cell("Dependentes", "2")));
        assert!(html.contains(&cell("Dedução dependentes", "R$ 379,18")));
        assert!(html.contains(&cell("Base IRRF", "R$ 5.013,62")));
        assert!(html.contains(&cell("IRRF 2025", "R$ 476,35")));
        assert!(html.contains(&cell("Redução reforma 2026", "R$ 119,76")));
        assert!(html.contains(&cell("IRRF 2026", "R$ 356,59")));
        assert!(html.contains("window.print()"));
    }

    #[rstest]
    fn it_should_fall_back_to_legacy_fields() {
        let row = RowBuilder::new(1)
            .name("João")
            .computed(
                IrrfResultBuilder::new()
                    .salario_bruto(4000.0)
                    .ir_tabela(150.0)
                    .ir_devido(80.5)
                    .build(),
            )
            .build();

        let html = render_memo(&row).unwrap();

        assert!(html.contains(&cell("Rendimento tributável", "R$ 4.000,00")));
        assert!(html.contains(&cell("IRRF 2025", "R$ 150,00")));
        assert!(html.contains(&cell("IRRF 2026", "R$ 80,50")));
        assert!(html.contains(&cell("INSS calculado", "—")));
        assert!(html.contains(&cell("Base IRRF", "—")));
    }

    #[rstest]
    fn it_should_print_the_dependents_the_result_was_computed_with() {
        let row = RowBuilder::new(1)
            .name("João")
            .computed(IrrfResultBuilder::new().dependentes(2).build())
            .dependents("5")
            .build();

        let html = render_memo(&row).unwrap();

        assert!(html.contains(&cell("Dependentes", "2")));
    }

    #[rstest]
    fn it_should_default_missing_taxes_to_zero() {
        let row = RowBuilder::new(1)
            .name("Ana")
            .computed(IrrfResultBuilder::new().base_irrf(1000.0).build())
            .build();

        let html = render_memo(&row).unwrap();

        assert!(html.contains(&cell("IRRF 2025", "R$ 0,00")));
        assert!(html.contains(&cell("IRRF 2026", "R$ 0,00")));
    }

    #[rstest]
    fn it_should_escape_operator_text() {
        let row = RowBuilder::new(1)
            .identifier("<b>")
            .name("Ana & \"Bia\"")
            .computed(IrrfResultBuilder::new().build())
            .build();

        let html = render_memo(&row).unwrap();

        assert!(html.contains("&lt;b&gt; - Ana &amp; &quot;Bia&quot;"));
        assert!(!html.contains("<b>"));
    }
}
