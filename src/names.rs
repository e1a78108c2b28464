pub const ROOT_URL: &str = "/";
pub const QUIZ_URL: &str = "/quiz/";
pub const QUIZ_URL_NO_SLASH: &str = "/quiz";

pub const TRIVIA_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";

// Provider query defaults
pub const DEFAULT_AMOUNT: i64 = 4;
pub const QUESTION_TYPE: &str = "multiple";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const LIVENESS_MESSAGE: &str = "Quiz API running 🚀";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions found.";

pub fn fetch_error_message(reason: &str) -> String {
    format!("Error fetching trivia: {reason}")
}
