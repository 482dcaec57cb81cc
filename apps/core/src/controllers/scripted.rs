use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;

use crate::api::{Backend, HttpReply};
use crate::error::{DashboardError, Result};

#[derive(Clone)]
enum Scripted {
    Reply(HttpReply),
    Offline(String),
}

/// Backend double answering from a per-URL script. `hold` parks the next
/// call to a URL until the returned sender fires.
#[derive(Default)]
pub struct ScriptedBackend {
    script: RefCell<HashMap<String, Scripted>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    calls: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, url: &str, status: u16, body: &str) -> Self {
        self.set_reply(url, status, body);
        self
    }

    pub fn offline(self, url: &str, message: &str) -> Self {
        self.script
            .borrow_mut()
            .insert(url.to_string(), Scripted::Offline(message.to_string()));
        self
    }

    pub fn set_reply(&self, url: &str, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .insert(url.to_string(), Scripted::Reply(HttpReply::new(status, body)));
    }

    pub fn hold(&self, url: &str) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(receiver);
        sender
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|(called, _)| called == url).count()
    }

    pub fn posted_bodies(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|(_, body)| body.clone())
            .collect()
    }

    async fn respond(&self, url: &str, body: Option<&str>) -> Result<HttpReply> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), body.map(ToString::to_string)));
        let scripted = self.script.borrow().get(url).cloned();
        let gate = self
            .gates
            .borrow_mut()
            .get_mut(url)
            .and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        match scripted {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Offline(message)) => Err(DashboardError::Transport(message)),
            None => Ok(HttpReply::new(404, r#"{"detail": "Not Found"}"#)),
        }
    }
}

impl Backend for ScriptedBackend {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        self.respond(url, None).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply> {
        self.respond(url, Some(body)).await
    }
}
