//! Scripted fakes for scheduler tests

use async_trait::async_trait;
use kaniko_client::{BuildService, ClientError, Result};
use kaniko_core::domain::headers::HeaderSet;
use kaniko_core::domain::job::JobHandle;
use kaniko_core::dto::job::JobRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ActionConfig;
use crate::pacer::Pacer;

/// Something observable that happened during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Create,
    Poll(String),
    Pause(Duration),
}

/// One scripted answer to a status query
pub enum Reply {
    Body(&'static str),
    TransportFault,
}

/// Build service that answers from a fixed script
pub struct ScriptedService {
    create: Mutex<Option<Result<JobHandle>>>,
    replies: Mutex<VecDeque<Reply>>,
    created: Mutex<Vec<JobRequest>>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl ScriptedService {
    pub fn accepting(name: &str, replies: Vec<Reply>) -> Self {
        Self::with_create(Ok(JobHandle::new(name)), replies)
    }

    pub fn rejecting(err: ClientError) -> Self {
        Self::with_create(Err(err), Vec::new())
    }

    fn with_create(create: Result<JobHandle>, replies: Vec<Reply>) -> Self {
        Self {
            create: Mutex::new(Some(create)),
            replies: Mutex::new(replies.into()),
            created: Mutex::new(Vec::new()),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pacer that records into this service's event log
    pub fn pacer(&self) -> Arc<RecordingPacer> {
        Arc::new(RecordingPacer {
            events: Arc::clone(&self.events),
        })
    }

    pub fn created(&self) -> Vec<JobRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Poll(_)))
            .count()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Pause(d) => Some(d),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl BuildService for ScriptedService {
    async fn create_job(&self, req: &JobRequest) -> Result<JobHandle> {
        self.events.lock().unwrap().push(Event::Create);
        self.created.lock().unwrap().push(req.clone());
        self.create
            .lock()
            .unwrap()
            .take()
            .expect("create_job called more than once")
    }

    async fn job_status_body(&self, handle: &JobHandle) -> Result<String> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Poll(handle.to_string()));
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("polled past the end of the script");
        match reply {
            Reply::Body(body) => Ok(body.to_string()),
            Reply::TransportFault => Err(transport_fault()),
        }
    }
}

/// Pacer that returns immediately and logs the requested delay
pub struct RecordingPacer {
    events: Arc<Mutex<Vec<Event>>>,
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.events.lock().unwrap().push(Event::Pause(delay));
    }
}

/// A genuine `reqwest` error, produced without touching the network
pub fn transport_fault() -> ClientError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("request with invalid url should not build");
    ClientError::RequestFailed(err)
}

pub fn test_config() -> ActionConfig {
    ActionConfig {
        name: "app".to_string(),
        url: "http://builder.local:8080".to_string(),
        context: "git://github.com/acme/app".to_string(),
        destination: "registry.local/app:latest".to_string(),
        secret: None,
        arch: None,
        headers: HeaderSet::new(),
        poll_interval: Duration::from_secs(5),
        request_timeout: Duration::from_secs(30),
        preflight: false,
    }
}
