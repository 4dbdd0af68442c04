// HTTP implementation of the IrrfCalculator port.
//
// Talks JSON to `POST {base_url}/calcular-irrf`. Any answer that cannot be read
// as JSON, success or not, counts as a transport failure.

use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;
use crate::modules::irrf_simulator::core::ports::{CalculatorError, IrrfCalculator, IrrfRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const CALCULATE_PATH: &str = "/calcular-irrf";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        match self.error? {
            Value::Null => None,
            Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpIrrfCalculator {
    base_url: String,
    client: Client,
}

impl HttpIrrfCalculator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{CALCULATE_PATH}", self.base_url.trim_end_matches('/'))
    }
}

fn transport(err: impl std::fmt::Display) -> CalculatorError {
    CalculatorError::Transport(err.to_string())
}

#[async_trait]
impl IrrfCalculator for HttpIrrfCalculator {
    async fn calculate(&self, request: IrrfRequest) -> Result<IrrfResult, CalculatorError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if status.is_success() {
            return serde_json::from_slice(&body)
                .map_err(|err| transport(format!("malformed payload: {err}")));
        }

        let rejection: ErrorBody = serde_json::from_slice(&body)
            .map_err(|err| transport(format!("malformed error payload ({status}): {err}")))?;
        Err(CalculatorError::Rejected {
            message: rejection.message(),
        })
    }
}
