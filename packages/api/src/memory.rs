use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::transport::{RawResponse, Request, Transport, TransportError};

type Scripted = Result<RawResponse, TransportError>;

/// In-memory Transport for testing: replays scripted responses in order and
/// records every request it receives.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    /// Queue a network-level failure.
    pub fn fail(&self, detail: impl Into<String>) -> &Self {
        self.push(Err(TransportError::new(detail)))
    }

    fn push(&self, scripted: Scripted) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(scripted);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}
