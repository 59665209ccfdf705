pub const QUESTIONS_URL: &str = "/questions";
pub const ADD_QUESTION_URL: &str = "/question";
pub const SUBMIT_RESPONSE_URL: &str = "/response";

pub const FORM_NAME_HEADER: &str = "form-name";
pub const USER_ID_HEADER: &str = "user-id";

pub const QUESTIONS_COLLECTION: &str = "questions";
pub const RESPONSES_COLLECTION: &str = "responses";

pub const GREETING: &str = "Hello from formbase!";
