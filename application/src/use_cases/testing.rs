//! Deterministic fakes shared by the use case tests.

use crate::ports::content_generator::{ContentGenerator, ContentRequest, GatewayError};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use polyglot_domain::ContentKind;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) fn vocabulary_json(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"word":"Wort{i}","definition":"Bedeutung {i}","translation":"word {i}"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub(crate) fn quiz_json(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"question":"Frage {i}?","options":["A{i}","B{i}","C{i}","D{i}"],"correctAnswer":"B{i}"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub(crate) fn summary_json() -> String {
    r#"{"summary":"Das Video zeigt einen Spaziergang durch Berlin. Der Sprecher erklärt die Geschichte der Stadt."}"#
        .to_string()
}

/// Scripted response for one request kind
#[derive(Clone)]
struct Script {
    delay: Duration,
    response: Result<String, GatewayError>,
}

/// Generator returning scripted responses per [`ContentKind`]
pub(crate) struct FakeGenerator {
    scripts: HashMap<ContentKind, Script>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ContentRequest>>,
}

impl FakeGenerator {
    /// Every request returns schema-conforming JSON (10 words, 5 questions)
    pub(crate) fn conforming() -> Self {
        let mut scripts = HashMap::new();
        for (kind, body) in [
            (ContentKind::Vocabulary, vocabulary_json(10)),
            (ContentKind::Quiz, quiz_json(5)),
            (ContentKind::Summary, summary_json()),
        ] {
            scripts.insert(
                kind,
                Script {
                    delay: Duration::ZERO,
                    response: Ok(body),
                },
            );
        }
        Self {
            scripts,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn script(&mut self, kind: ContentKind) -> &mut Script {
        self.scripts.entry(kind).or_insert(Script {
            delay: Duration::ZERO,
            response: Err(GatewayError::Other("unscripted".to_string())),
        })
    }

    pub(crate) fn respond(mut self, kind: ContentKind, body: impl Into<String>) -> Self {
        self.script(kind).response = Ok(body.into());
        self
    }

    pub(crate) fn fail(mut self, kind: ContentKind, error: GatewayError) -> Self {
        self.script(kind).response = Err(error);
        self
    }

    pub(crate) fn delay(mut self, kind: ContentKind, delay: Duration) -> Self {
        self.script(kind).delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    fn model_name(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, request: &ContentRequest) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let script = self
            .scripts
            .get(&request.kind)
            .cloned()
            .ok_or_else(|| GatewayError::Other("unscripted".to_string()))?;
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        script.response
    }
}

/// Progress notifier that records every callback as a string
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_generation_start(&self, total_requests: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}", total_requests));
    }

    fn on_request_complete(&self, kind: ContentKind, success: bool) {
        let outcome = if success { "ok" } else { "failed" };
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:{}", kind, outcome));
    }

    fn on_generation_complete(&self, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{}", success));
    }
}
