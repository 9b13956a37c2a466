//! In-memory transport for exercising method blocks without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use super::http_client::{Transport, TransportResponse};
use super::request::ApiRequest;
use crate::error::TransportError;

/// Records every request and answers from a queue of canned responses.
/// Once the queue is empty the last response is repeated.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<TransportResponse>>,
    last: Mutex<Option<TransportResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that always answers `200` with `body`
    pub fn replying(body: &str) -> Self {
        let transport = Self::new();
        transport.push_response(200, body);
        transport
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            });
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(response) = next {
            *last = Some(response);
        }

        last.clone().ok_or_else(|| TransportError::Status {
            status: 503,
            body: "no canned response".to_string(),
        })
    }
}
