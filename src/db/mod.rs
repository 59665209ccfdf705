// Database module - provides data access layer

use std::sync::Arc;

use async_trait::async_trait;
use color_eyre::Result;

// Re-export models for convenience
pub mod models;
pub use models::*;

mod mongo;
pub use mongo::MongoStore;

/// Store operations the HTTP layer depends on. Object-safe so handlers can
/// run against a test double instead of a live document store.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Persist a new question under its form and return the stored document.
    async fn add_question(&self, doc: QuestionDoc) -> Result<QuestionDoc>;

    /// All questions whose form name matches exactly, in store order.
    async fn questions_by_form(&self, form_name: &str) -> Result<Vec<QuestionDoc>>;

    /// Insert or replace the response for (form, user, question). Latest wins.
    async fn upsert_response(&self, doc: ResponseDoc) -> Result<ResponseDoc>;
}

pub type DynStore = Arc<dyn FormStore>;
