//! Scripted transport shared by the client tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;

use linguist_core::{OnDone, RawResponse, RequestDescriptor, Transport, TransportError};

mod gateway_tests;
mod service_tests;

type Outcome = Result<RawResponse, TransportError>;

/// Replays scripted outcomes in order and records every request it sees.
/// `submit` completes on a fresh thread, optionally held until released.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Mutex<Vec<RequestDescriptor>>,
    workers: Mutex<Vec<thread::JoinHandle<()>>>,
    gate: Option<kanal::Receiver<()>>,
}

impl MockTransport {
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            workers: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    /// Like [`MockTransport::new`], but each submission waits for one
    /// message on `gate` before completing.
    pub fn gated(gate: kanal::Receiver<()>, outcomes: impl IntoIterator<Item = Outcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            workers: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }

    /// Wait for every submission thread to finish.
    pub fn join(&self) {
        let workers: Vec<_> = self.workers.lock().unwrap().drain(..).collect();
        for worker in workers {
            worker.join().unwrap();
        }
    }

    fn next(&self, request: &RequestDescriptor) -> Outcome {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &RequestDescriptor) -> Outcome {
        self.next(request)
    }

    fn submit(&self, request: RequestDescriptor, on_done: OnDone) {
        let outcome = self.next(&request);
        let gate = self.gate.clone();

        let worker = thread::spawn(move || {
            if let Some(gate) = gate {
                gate.recv().unwrap();
            }
            on_done(outcome);
        });

        self.workers.lock().unwrap().push(worker);
    }
}

pub fn ok(body: &str) -> Outcome {
    Ok(RawResponse::new(200, body.as_bytes().to_vec(), "OK"))
}

pub fn status(code: u16, message: &str) -> Outcome {
    Ok(RawResponse::new(code, format!("{{\"code\":{code}}}").into_bytes(), message))
}

pub fn refused() -> Outcome {
    Err(TransportError::new("connection refused"))
}
