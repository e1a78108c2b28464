use serde::{Deserialize, Deserializer, Serialize};

use crate::names;

/// Question difficulty. Values the provider might know that are not listed here are kept
/// verbatim and forwarded unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => Difficulty::Other(other.to_string()),
        })
    }
}

impl Serialize for Difficulty {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Integer question count, kept as its decimal text so values beyond `i64` still reach
/// the provider unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::from(names::DEFAULT_AMOUNT)
    }
}

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Amount(n.to_string())
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = String;

    /// Accepts an optionally signed run of ASCII digits and stores it in canonical form
    /// (`+7` and `007` both become `7`, `-0` becomes `0`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("amount must be an integer, got `{s}`"));
        }

        let digits = digits.trim_start_matches('0');
        Ok(match (negative, digits) {
            (_, "") => Amount("0".to_string()),
            (true, d) => Amount(format!("-{d}")),
            (false, d) => Amount(d.to_string()),
        })
    }
}

/// Query parameters accepted by `GET /quiz/`.
///
/// Values are forwarded to the provider as-is; no range checks are applied to `amount`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "from_text")]
    pub amount: Amount,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub difficulty: Option<Difficulty>,
}

fn from_text<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(d)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Query strings carry every value as text, so `?category=` arrives as an empty string.
/// Treat it the same as a missing key.
fn empty_as_none<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(d)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Outbound query sent to the provider.
#[derive(Debug, PartialEq, Serialize)]
pub struct ProviderQuery {
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl From<&QuizRequest> for ProviderQuery {
    fn from(req: &QuizRequest) -> Self {
        Self {
            amount: req.amount.clone(),
            kind: names::QUESTION_TYPE,
            // category 0 is "any"; omit it like a missing value
            category: req.category.filter(|c| *c != 0),
            difficulty: req.difficulty.clone(),
        }
    }
}

/// Provider payload. `results` stays raw until the response code says it is usable.
#[derive(Debug, Deserialize)]
pub struct ProviderPayload {
    pub response_code: i64,
    #[serde(default)]
    pub results: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Vec<NormalizedQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Provider-level status code embedded in the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            n => ResponseCode::Unknown(n),
        }
    }
}

impl ResponseCode {
    pub fn reason(&self) -> String {
        match self {
            ResponseCode::Success => "success".to_string(),
            ResponseCode::NoResults => {
                "the provider does not have enough questions for this query".to_string()
            }
            ResponseCode::InvalidParameter => {
                "the provider rejected a query parameter".to_string()
            }
            ResponseCode::TokenNotFound => "session token does not exist".to_string(),
            ResponseCode::TokenEmpty => {
                "session token has returned all possible questions".to_string()
            }
            ResponseCode::RateLimit => "too many requests to the provider".to_string(),
            ResponseCode::Unknown(n) => format!("unknown provider response code {n}"),
        }
    }
}
