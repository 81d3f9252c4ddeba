use serde::Deserialize;

/// Shown in place of an answer when the endpoint gives us nothing usable.
pub const FALLBACK_ANSWER: &str =
    "Sorry, the assistant is unavailable right now. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Failed to parse answer payload: {0}")]
    PayloadParse(#[from] serde_json::Error),
}

/// JSON body returned by the answer endpoint.
///
/// The answer is read from `response`, or from `text` when `response` is
/// absent or blank. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl AnswerPayload {
    pub fn parse(body: &str) -> Result<Self, ChatError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The answer text, if the payload carried a non-blank one.
    pub fn answer(&self) -> Option<&str> {
        fn non_blank(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|s| !s.trim().is_empty())
        }
        non_blank(&self.response).or_else(|| non_blank(&self.text))
    }

    /// The answer text, or `fallback` when the payload carried none.
    pub fn answer_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.answer().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn reads_response_field() {
        let p = AnswerPayload::parse(r#"{"response": "Hi **there**"}"#).unwrap();
        assert_eq!(p.answer(), Some("Hi **there**"));
    }

    #[test]
    fn text_field_is_accepted() {
        let p = AnswerPayload::parse(r#"{"text": "from text"}"#).unwrap();
        assert_eq!(p.answer(), Some("from text"));
    }

    #[test]
    fn response_wins_over_text() {
        let p = AnswerPayload::parse(r#"{"response": "a", "text": "b"}"#).unwrap();
        assert_eq!(p.answer(), Some("a"));
    }

    #[test]
    fn missing_fields_use_fallback() {
        let p = AnswerPayload::parse(r#"{"detail": "boom"}"#).unwrap();
        assert_eq!(p.answer(), None);
        assert_eq!(p.answer_or(FALLBACK_ANSWER), FALLBACK_ANSWER);
    }

    #[rstest]
    #[case(r#"{"response": "", "text": "hi"}"#)]
    #[case(r#"{"response": " \n\t", "text": "hi"}"#)]
    #[case(r#"{"response": null, "text": "hi"}"#)]
    fn blank_response_falls_through_to_text(#[case] body: &str) {
        let p = AnswerPayload::parse(body).unwrap();
        assert_eq!(p.answer(), Some("hi"));
    }

    #[rstest]
    #[case(r#"{"response": ""}"#)]
    #[case(r#"{"response": "   ", "text": ""}"#)]
    #[case(r#"{"text": "\n"}"#)]
    fn blank_fields_use_fallback(#[case] body: &str) {
        let p = AnswerPayload::parse(body).unwrap();
        assert_eq!(p.answer(), None);
        assert_eq!(p.answer_or(FALLBACK_ANSWER), FALLBACK_ANSWER);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = AnswerPayload::parse("<html>502</html>").unwrap_err();
        assert!(matches!(err, ChatError::PayloadParse(_)));
        assert!(err.to_string().starts_with("Failed to parse answer payload"));
    }

    #[test]
    fn non_string_response_is_an_error() {
        assert!(AnswerPayload::parse(r#"{"response": 42}"#).is_err());
    }
}
