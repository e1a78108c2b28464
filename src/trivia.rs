use std::{fmt, time::Duration};

use rand::{seq::SliceRandom, Rng};

use crate::models::{
    NormalizedQuestion, ProviderPayload, ProviderQuery, QuizRequest, RawQuestion, ResponseCode,
};

/// Failure talking to the provider. Both variants surface as a server error.
#[derive(Debug)]
pub enum TriviaError {
    Transport(reqwest::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for TriviaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriviaError::Transport(e) => {
                write!(f, "{e}")?;
                let mut source = std::error::Error::source(e);
                while let Some(cause) = source {
                    write!(f, ": {cause}")?;
                    source = std::error::Error::source(cause);
                }
                Ok(())
            }
            TriviaError::Decode(e) => write!(f, "malformed provider results: {e}"),
        }
    }
}

impl std::error::Error for TriviaError {}

impl From<reqwest::Error> for TriviaError {
    fn from(e: reqwest::Error) -> Self {
        TriviaError::Transport(e)
    }
}

impl From<serde_json::Error> for TriviaError {
    fn from(e: serde_json::Error) -> Self {
        TriviaError::Decode(e)
    }
}

/// Result of a provider round trip that reached the provider and got a payload back.
#[derive(Debug)]
pub enum QuizOutcome {
    Questions(Vec<NormalizedQuestion>),
    /// The provider answered with a nonzero response code; `results` was not inspected.
    Empty(ResponseCode),
}

/// Client for the trivia provider. Cheap to clone; the inner `reqwest::Client` is shared.
#[derive(Clone, Debug)]
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TriviaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TriviaError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single GET against the provider. No retry.
    pub async fn fetch(&self, req: &QuizRequest) -> Result<ProviderPayload, TriviaError> {
        let query = ProviderQuery::from(req);
        tracing::debug!(?query, "requesting questions from provider");

        let payload = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderPayload>()
            .await?;

        Ok(payload)
    }

    pub async fn quiz(&self, req: &QuizRequest) -> Result<QuizOutcome, TriviaError> {
        let payload = self.fetch(req).await?;

        let code = ResponseCode::from(payload.response_code);
        if code != ResponseCode::Success {
            tracing::warn!(
                response_code = payload.response_code,
                "provider returned no questions: {}",
                code.reason()
            );
            return Ok(QuizOutcome::Empty(code));
        }

        let results: Vec<RawQuestion> = serde_json::from_value(payload.results)?;
        let questions = normalize(results, &mut rand::thread_rng());
        tracing::info!("normalized {} questions", questions.len());

        Ok(QuizOutcome::Questions(questions))
    }
}

/// Reshape provider results into numbered questions with shuffled options.
pub fn normalize<R: Rng + ?Sized>(
    results: Vec<RawQuestion>,
    rng: &mut R,
) -> Vec<NormalizedQuestion> {
    results
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let mut options = raw.incorrect_answers;
            options.push(raw.correct_answer.clone());
            options.shuffle(rng);

            NormalizedQuestion {
                id: idx + 1,
                question: raw.question,
                options,
                correct_answer: raw.correct_answer,
            }
        })
        .collect()
}
