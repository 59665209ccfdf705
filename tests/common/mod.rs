use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use formbase::db::{DynStore, FormStore, QuestionDoc, ResponseDoc};
use formbase::{router, AppState};

pub fn test_app(store: DynStore) -> axum::Router {
    router(AppState { store })
}

/// In-memory store double mirroring the document-store semantics the
/// handlers rely on: exact-match filters and insertion order.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<QuestionDoc>>,
    responses: Mutex<Vec<ResponseDoc>>,
}

impl MemoryStore {
    pub fn stored_responses(&self) -> Vec<ResponseDoc> {
        self.responses.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn add_question(&self, doc: QuestionDoc) -> Result<QuestionDoc> {
        self.questions.lock().unwrap().push(doc.clone());
        Ok(doc)
    }

    async fn questions_by_form(&self, form_name: &str) -> Result<Vec<QuestionDoc>> {
        let questions = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.form_name == form_name)
            .cloned()
            .collect();
        Ok(questions)
    }

    async fn upsert_response(&self, doc: ResponseDoc) -> Result<ResponseDoc> {
        let mut responses = self.responses.lock().unwrap();
        let existing = responses.iter_mut().find(|r| {
            r.form_name == doc.form_name && r.user_id == doc.user_id && r.question == doc.question
        });
        match existing {
            Some(slot) => *slot = doc.clone(),
            None => responses.push(doc.clone()),
        }
        Ok(doc)
    }
}

/// Store double where every operation fails, simulating an unreachable store.
pub struct FailingStore;

#[async_trait]
impl FormStore for FailingStore {
    async fn add_question(&self, _doc: QuestionDoc) -> Result<QuestionDoc> {
        Err(eyre!("store unreachable"))
    }

    async fn questions_by_form(&self, _form_name: &str) -> Result<Vec<QuestionDoc>> {
        Err(eyre!("store unreachable"))
    }

    async fn upsert_response(&self, _doc: ResponseDoc) -> Result<ResponseDoc> {
        Err(eyre!("store unreachable"))
    }
}

/// Delays every operation before delegating, to exercise the batch join
/// under store latency.
pub struct SlowStore {
    inner: Arc<MemoryStore>,
    delay: Duration,
}

impl SlowStore {
    pub fn new(inner: Arc<MemoryStore>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl FormStore for SlowStore {
    async fn add_question(&self, doc: QuestionDoc) -> Result<QuestionDoc> {
        tokio::time::sleep(self.delay).await;
        self.inner.add_question(doc).await
    }

    async fn questions_by_form(&self, form_name: &str) -> Result<Vec<QuestionDoc>> {
        tokio::time::sleep(self.delay).await;
        self.inner.questions_by_form(form_name).await
    }

    async fn upsert_response(&self, doc: ResponseDoc) -> Result<ResponseDoc> {
        tokio::time::sleep(self.delay).await;
        self.inner.upsert_response(doc).await
    }
}
