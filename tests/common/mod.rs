#![allow(dead_code)]

use ritual::api::{BoxError, HttpRequest, HttpResponse, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory transport that replays queued responses and records every request.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err("no stubbed response left".into()),
        }
    }
}

/// Query pairs of a recorded request, decoded.
pub fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub fn header(request: &HttpRequest, name: &str) -> Option<String> {
    request.headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_string)
}
