use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use lcc_workbench::{
    CalculationResult, FormEdit, FormState, ResultSink, Transport, TransportError,
};

/// A draft the way the UI would build it: a name plus a couple of quantities.
pub fn bridge_draft(name: &str) -> FormState {
    let mut form = FormState::new(name);
    form.apply(FormEdit::SetQuantity {
        item: "concrete_m35".into(),
        amount: json!(1450.0),
    });
    form.apply(FormEdit::SetQuantity {
        item: "steel_fe500".into(),
        amount: json!(860.5),
    });
    form
}

/// Answers with a canned payload and records every request body it sees.
pub struct RecordingTransport {
    response: Value,
    requests: Mutex<Vec<FormState>>,
}

impl RecordingTransport {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<FormState> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn calculate(&self, request: &FormState) -> Result<CalculationResult, TransportError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());
        Ok(CalculationResult::new(self.response.clone()))
    }
}

/// Fails every request the way the service does: a message alongside a 4xx.
pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn calculate(&self, _request: &FormState) -> Result<CalculationResult, TransportError> {
        Err(TransportError::Api(self.message.clone()))
    }
}

/// Parks mid-request until released, so tests can overlap submissions.
pub struct BlockingTransport {
    response: Value,
    started: Notify,
    release: Notify,
    calls: AtomicUsize,
    requests: Mutex<Vec<FormState>>,
}

impl BlockingTransport {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            started: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Resolves once a request has reached the transport.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    /// Lets the parked request finish.
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<FormState> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for BlockingTransport {
    async fn calculate(&self, request: &FormState) -> Result<CalculationResult, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());
        self.started.notify_one();
        self.release.notified().await;
        Ok(CalculationResult::new(self.response.clone()))
    }
}

/// Captures everything handed to the result sink.
#[derive(Clone, Default)]
pub struct SinkSpy {
    received: Arc<Mutex<Vec<CalculationResult>>>,
}

impl SinkSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> ResultSink {
        let received = self.received.clone();
        Arc::new(move |result: CalculationResult| {
            received.lock().expect("sink lock poisoned").push(result);
        })
    }

    pub fn received(&self) -> Vec<CalculationResult> {
        self.received.lock().expect("sink lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().expect("sink lock poisoned").len()
    }
}
