// Stored document structs

use serde::{Deserialize, Serialize};

use crate::models::Question;

/// A question definition as stored in the `questions` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDoc {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub form_name: String,
}

impl QuestionDoc {
    pub fn new(form_name: String, payload: Question) -> Self {
        Self {
            question: payload.question,
            options: payload.options,
            form_name,
        }
    }

    /// Project to the public shape, dropping the form key and anything the
    /// store attached to the document.
    pub fn into_public(self) -> Question {
        Question {
            question: self.question,
            options: self.options,
        }
    }
}

/// One user's answer to one question, as stored in the `responses`
/// collection. The question is carried by text, not by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDoc {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub form_name: String,
    pub user_id: String,
}

impl ResponseDoc {
    pub fn new(form_name: &str, user_id: &str, payload: Question) -> Self {
        Self {
            question: payload.question,
            options: payload.options,
            form_name: form_name.to_owned(),
            user_id: user_id.to_owned(),
        }
    }

    pub fn into_public(self) -> Question {
        Question {
            question: self.question,
            options: self.options,
        }
    }
}
