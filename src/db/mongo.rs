use async_trait::async_trait;
use color_eyre::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use super::models::{QuestionDoc, ResponseDoc};
use super::FormStore;
use crate::names;

/// Production store backed by the `mongodb` driver: one client, one named
/// database, two typed collections.
#[derive(Clone)]
pub struct MongoStore {
    questions: Collection<QuestionDoc>,
    responses: Collection<ResponseDoc>,
}

impl MongoStore {
    pub async fn connect(url: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(db_name);

        // The driver connects lazily; ping now so a dead store shows up in
        // the logs at startup instead of on the first request.
        match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!("store connection has been verified"),
            Err(e) => tracing::warn!("store unreachable at startup, continuing degraded: {e}"),
        }

        Ok(Self {
            questions: db.collection(names::QUESTIONS_COLLECTION),
            responses: db.collection(names::RESPONSES_COLLECTION),
        })
    }
}

#[async_trait]
impl FormStore for MongoStore {
    async fn add_question(&self, doc: QuestionDoc) -> Result<QuestionDoc> {
        self.questions.insert_one(&doc).await?;

        tracing::info!(
            "question added to form '{}': {}",
            doc.form_name,
            doc.question
        );

        Ok(doc)
    }

    async fn questions_by_form(&self, form_name: &str) -> Result<Vec<QuestionDoc>> {
        let cursor = self.questions.find(doc! { "formName": form_name }).await?;
        let questions = cursor.try_collect().await?;

        Ok(questions)
    }

    async fn upsert_response(&self, doc: ResponseDoc) -> Result<ResponseDoc> {
        let filter = doc! {
            "formName": &doc.form_name,
            "userId": &doc.user_id,
            "question": &doc.question,
        };
        self.responses.replace_one(filter, &doc).upsert(true).await?;

        Ok(doc)
    }
}
