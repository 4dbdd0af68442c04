use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;

pub struct IrrfResultBuilder {
    inner: IrrfResult,
}

impl Default for IrrfResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IrrfResultBuilder {
    pub fn new() -> Self {
        Self {
            inner: IrrfResult::default(),
        }
    }

    /// A complete response for a 6.000,00 salary with two dependents.
    pub fn full() -> Self {
        Self::new()
            .rendimento_tributavel(6000.0)
            .inss_real(595.72)
            .deducao_simplificada(607.2)
            .deducao_utilizada(607.2)
            .dependentes(2)
            .deducao_dependentes(379.18)
            .base_irrf(5013.62)
            .ir_2025(476.35)
            .reducao_reforma(119.76)
            .ir_2026(356.59)
    }

    pub fn base_irrf(mut self, v: f64) -> Self {
        self.inner.base_irrf = Some(v);
        self
    }

    pub fn rendimento_tributavel(mut self, v: f64) -> Self {
        self.inner.rendimento_tributavel = Some(v);
        self
    }

    pub fn salario_bruto(mut self, v: f64) -> Self {
        self.inner.salario_bruto = Some(v);
        self
    }

    pub fn inss_real(mut self, v: f64) -> Self {
        self.inner.inss_real = Some(v);
        self
    }

    pub fn deducao_simplificada(mut self, v: f64) -> Self {
        self.inner.deducao_simplificada = Some(v);
        self
    }

    pub fn deducao_utilizada(mut self, v: f64) -> Self {
        self.inner.deducao_utilizada = Some(v);
        self
    }

    pub fn dependentes(mut self, v: u32) -> Self {
        self.inner.dependentes = Some(v);
        self
    }

    pub fn deducao_dependentes(mut self, v: f64) -> Self {
        self.inner.deducao_dependentes = Some(v);
        self
    }

    pub fn ir_2025(mut self, v: f64) -> Self {
        self.inner.ir_2025 = Some(v);
        self
    }

    pub fn ir_tabela(mut self, v: f64) -> Self {
        self.inner.ir_tabela = Some(v);
        self
    }

    pub fn reducao_reforma(mut self, v: f64) -> Self {
        self.inner.reducao_reforma = Some(v);
        self
    }

    pub fn ir_2026(mut self, v: f64) -> Self {
        self.inner.ir_2026 = Some(v);
        self
    }

    pub fn ir_devido(mut self, v: f64) -> Self {
        self.inner.ir_devido = Some(v);
        self
    }

    pub fn build(self) -> IrrfResult {
        self.inner
    }
}
