use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Payload returned by the IRRF computation service for one row.
///
/// The service has shipped two generations of field names (`ir_tabela` and
/// `ir_devido` before `ir_2025` and `ir_2026`). Both are kept here and read
/// through the accessors below so every consumer resolves them the same way.
/// Unknown fields are carried in `extra` and serialized back untouched.
///
/// Known fields are read leniently: a value of an unexpected type reads as
/// absent instead of rejecting the whole payload. Only a body that is not a
/// JSON object fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IrrfResult {
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_irrf: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rendimento_tributavel: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub salario_bruto: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub inss_real: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub deducao_simplificada: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub deducao_utilizada: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependentes: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub deducao_dependentes: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ir_2025: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ir_tabela: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub reducao_reforma: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ir_2026: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ir_devido: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|amount| amount.is_finite()))
}

// Counts may arrive as `2.0`; fractional or negative values read as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|count| count.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(count))
        .map(|count| count as u32))
}

/// Which deduction the service applied to reach the tax base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionKind {
    Inss,
    Simplified,
}

impl DeductionKind {
    pub fn label(self) -> &'static str {
        match self {
            DeductionKind::Inss => "INSS",
            DeductionKind::Simplified => "Simplif.",
        }
    }
}

fn prefer<T>(primary: Option<T>, legacy: Option<T>) -> Option<T> {
    primary.or(legacy)
}

impl IrrfResult {
    pub fn base(&self) -> f64 {
        self.base_irrf.unwrap_or(0.0)
    }

    pub fn taxable_income(&self) -> Option<f64> {
        prefer(self.rendimento_tributavel, self.salario_bruto)
    }

    pub fn current_year_tax(&self) -> f64 {
        prefer(self.ir_2025, self.ir_tabela).unwrap_or(0.0)
    }

    pub fn reform_year_tax(&self) -> f64 {
        prefer(self.ir_2026, self.ir_devido).unwrap_or(0.0)
    }

    pub fn deduction_kind(&self) -> DeductionKind {
        if self.deducao_utilizada == self.inss_real {
            DeductionKind::Inss
        } else {
            DeductionKind::Simplified
        }
    }
}

#[cfg(test)]
mod irrf_result_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_prefer_current_field_names_over_legacy_ones() {
        let result: IrrfResult = serde_json::from_value(json!({
            "ir_2025": 410.5,
            "ir_tabela": 1.0,
            "ir_2026": 300.0,
            "ir_devido": 2.0,
        }))
        .unwrap();
        assert_eq!(result.current_year_tax(), 410.5);
        assert_eq!(result.reform_year_tax(), 300.0);
    }

    #[rstest]
    fn it_should_fall_back_to_legacy_field_names() {
        let result: IrrfResult = serde_json::from_value(json!({
            "ir_tabela": 410.5,
            "ir_devido": 120.0,
            "salario_bruto": 6000.0,
        }))
        .unwrap();
        assert_eq!(result.current_year_tax(), 410.5);
        assert_eq!(result.reform_year_tax(), 120.0);
        assert_eq!(result.taxable_income(), Some(6000.0));
    }

    #[rstest]
    fn it_should_treat_null_fields_as_absent() {
        let result: IrrfResult = serde_json::from_value(json!({
            "base_irrf": null,
            "ir_2026": null,
            "ir_devido": 15.0,
        }))
        .unwrap();
        assert_eq!(result.base(), 0.0);
        assert_eq!(result.reform_year_tax(), 15.0);
        assert_eq!(result.current_year_tax(), 0.0);
    }

    #[rstest]
    fn it_should_keep_unknown_fields_when_serialized_back() {
        let payload = json!({ "base_irrf": 4500.0, "aliquota": 0.225 });
        let result: IrrfResult = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), payload);
    }

    #[rstest]
    fn it_should_read_mistyped_fields_as_absent_and_keep_the_rest() {
        let result: IrrfResult = serde_json::from_value(json!({
            "base_irrf": 4500,
            "ir_2026": 300,
            "dependentes": 2.0,
            "inss_real": "595,72",
        }))
        .unwrap();
        assert_eq!(result.base(), 4500.0);
        assert_eq!(result.reform_year_tax(), 300.0);
        assert_eq!(result.dependentes, Some(2));
        assert_eq!(result.inss_real, None);
    }

    #[rstest]
    #[case(json!(2.5))]
    #[case(json!(-1))]
    #[case(json!("2"))]
    #[case(json!([2]))]
    fn it_should_read_an_unusable_dependents_count_as_absent(#[case] dependentes: Value) {
        let result: IrrfResult =
            serde_json::from_value(json!({ "base_irrf": 1000.0, "dependentes": dependentes }))
                .unwrap();
        assert_eq!(result.dependentes, None);
        assert_eq!(result.base(), 1000.0);
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!("ok"))]
    fn it_should_reject_a_payload_that_is_not_an_object(#[case] payload: Value) {
        assert!(serde_json::from_value::<IrrfResult>(payload).is_err());
    }

    #[rstest]
    #[case(Some(600.0), Some(600.0), DeductionKind::Inss)]
    #[case(Some(600.0), Some(607.2), DeductionKind::Simplified)]
    #[case(None, None, DeductionKind::Inss)]
    fn it_should_report_which_deduction_was_used(
        #[case] inss: Option<f64>,
        #[case] used: Option<f64>,
        #[case] expected: DeductionKind,
    ) {
        let result = IrrfResult {
            inss_real: inss,
            deducao_utilizada: used,
            ..IrrfResult::default()
        };
        assert_eq!(result.deduction_kind(), expected);
    }
}
