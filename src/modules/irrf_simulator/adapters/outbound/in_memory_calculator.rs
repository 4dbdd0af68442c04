// Scripted, in memory implementation of the IrrfCalculator port.
//
// Purpose
// - Drive the batch handler in tests and local runs without the tax service.
//
// Responsibilities
// - Answer calls from a queue of scripted responses, in order.
// - Record every request and the peak number of concurrent calls.
// - Simulate an unreachable service with `toggle_offline`.

use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;
use crate::modules::irrf_simulator::core::ports::{CalculatorError, IrrfCalculator, IrrfRequest};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

type CallHook = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone)]
enum Scripted {
    Ok(IrrfResult),
    Rejected(Option<String>),
    Transport,
}

#[derive(Default)]
pub struct InMemoryIrrfCalculator {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<IrrfRequest>>,
    hooks: Mutex<Vec<(usize, CallHook)>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    delay_ms: AtomicU64,
    offline: bool,
}

impl InMemoryIrrfCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn push_ok(&self, result: IrrfResult) {
        self.script.lock().await.push_back(Scripted::Ok(result));
    }

    pub async fn push_rejection(&self, message: Option<String>) {
        self.script.lock().await.push_back(Scripted::Rejected(message));
    }

    pub async fn push_transport_failure(&self) {
        self.script.lock().await.push_back(Scripted::Transport);
    }

    /// Run `hook` while serving the `call`-th request (1-based), before answering it.
    pub async fn on_call(&self, call: usize, hook: impl FnOnce() + Send + 'static) {
        self.hooks.lock().await.push((call, Box::new(hook)));
    }

    pub async fn requests(&self) -> Vec<IrrfRequest> {
        self.requests.lock().await.clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn answer(&self, request: IrrfRequest) -> Result<IrrfResult, CalculatorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().await.push(request);

        let due: Vec<CallHook> = {
            let mut hooks = self.hooks.lock().await;
            let (due, pending): (Vec<_>, Vec<_>) =
                hooks.drain(..).partition(|(at, _)| *at == call);
            *hooks = pending;
            due.into_iter().map(|(_, hook)| hook).collect()
        };
        for hook in due {
            hook();
        }

        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.offline {
            return Err(CalculatorError::Transport("Calculator offline".into()));
        }
        match self.script.lock().await.pop_front() {
            Some(Scripted::Ok(result)) => Ok(result),
            Some(Scripted::Rejected(message)) => Err(CalculatorError::Rejected { message }),
            Some(Scripted::Transport) => Err(CalculatorError::Transport("connection reset".into())),
            None => Err(CalculatorError::Rejected {
                message: Some("no scripted response".into()),
            }),
        }
    }
}

#[async_trait::async_trait]
impl IrrfCalculator for InMemoryIrrfCalculator {
    async fn calculate(&self, request: IrrfRequest) -> Result<IrrfResult, CalculatorError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let answer = self.answer(request).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        answer
    }
}
