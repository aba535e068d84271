//! Scripted transport and recording prompt for unit tests.

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use items_core::{HttpRequest, HttpResponse, ItemsClient, Transport, TransportError};

use crate::adapter::Api;
use crate::prompt::Prompt;
use crate::screen::{OutputFormat, Screen, SharedScreen};

struct Reply {
    response: Result<HttpResponse, String>,
    gate: Option<Receiver<()>>,
}

/// Answers requests from a queue of scripted replies, in order, and records
/// every request it sees. A gated reply blocks until its sender fires.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply(&self, status: u16, body: &str) {
        self.push(Ok(response(status, body)), None);
    }

    pub(crate) fn reply_after(&self, gate: Receiver<()>, status: u16, body: &str) {
        self.push(Ok(response(status, body)), Some(gate));
    }

    pub(crate) fn fail(&self, reason: &str) {
        self.push(Err(reason.to_string()), None);
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    fn push(&self, response: Result<HttpResponse, String>, gate: Option<Receiver<()>>) {
        self.replies.lock().unwrap().push_back(Reply { response, gate });
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        // Pop before recording: once a request is visible, its reply is taken.
        let reply = self.replies.lock().unwrap().pop_front();
        self.seen.lock().unwrap().push(request.clone());
        let failed = |reason: String| TransportError {
            method: request.method.as_str(),
            url: request.path.clone(),
            reason,
        };
        let Some(reply) = reply else {
            return Err(failed("no scripted reply".to_string()));
        };
        if let Some(gate) = reply.gate {
            let _ = gate.recv();
        }
        reply.response.map_err(failed)
    }
}

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

pub(crate) fn api(transport: &Arc<FakeTransport>) -> Api {
    Api::new(ItemsClient::new("http://backend.test/api"), transport.clone())
}

pub(crate) fn screen() -> SharedScreen {
    Screen::new(OutputFormat::Text, Box::new(io::sink())).into_shared()
}

/// Records alerts and answers every confirmation with `answer`.
pub(crate) struct RecordingPrompt {
    pub(crate) answer: bool,
    pub(crate) alerts: Vec<String>,
    pub(crate) questions: Vec<String>,
}

impl RecordingPrompt {
    pub(crate) fn answering(answer: bool) -> Self {
        Self {
            answer,
            alerts: Vec::new(),
            questions: Vec::new(),
        }
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    async fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answer
    }
}
