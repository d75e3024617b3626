//! In-memory transport used by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::transport::{Transport, TransportError};

/// Records every fetched URL and answers from a queue of canned replies.
///
/// When the queue is empty the fallback body (`{}` unless set) is returned.
pub struct RecordingTransport {
    urls: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    fallback: Vec<u8>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_body("{}")
    }

    /// Transport answering every request with `body`.
    pub fn with_body(body: &str) -> Self {
        Self {
            urls: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
            fallback: body.as_bytes().to_vec(),
        }
    }

    /// Queues a body for the next unanswered request.
    pub fn push_body(&self, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
    }

    /// Queues a failure for the next unanswered request.
    pub fn push_error(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// URLs fetched so far, oldest first.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// Number of fetches so far.
    pub fn calls(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, TransportError>> {
        self.urls.lock().unwrap().push(url.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()));
        async move { reply }.boxed()
    }
}
