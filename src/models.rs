use serde::{Deserialize, Serialize};

pub type Questions = Vec<Question>;

/// Public shape of a question prompt or a submitted answer: the prompt text
/// and its option texts. Store-internal identifiers never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}
