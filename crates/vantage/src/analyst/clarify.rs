//! Clarification questions for vague requests.

use tracing::warn;

use super::state::AnalystState;
use crate::error::{Result, VantageError};
use crate::llm::{LlmProvider, prompts};

/// Produce one clarification question for the user.
///
/// Previously asked, still-unanswered questions take precedence (FIFO)
/// over generating new ones, and the model is not contacted while any
/// remain. A newly generated question is recorded on the queue. Failures
/// fall back to a fixed generic question without touching the queue; this
/// function never errors.
pub fn clarification_question(
    state: &mut AnalystState,
    message: &str,
    llm: Option<&dyn LlmProvider>,
    fallback_question: &str,
) -> String {
    if let Some(question) = state.unanswered_questions.pop_front() {
        return question;
    }

    match model_question(state, message, llm) {
        Ok(question) => {
            state.unanswered_questions.push_back(question.clone());
            question
        }
        Err(err) => {
            warn!(error = %err, "clarification generation failed, using generic question");
            fallback_question.to_string()
        }
    }
}

fn model_question(
    state: &mut AnalystState,
    message: &str,
    llm: Option<&dyn LlmProvider>,
) -> Result<String> {
    let llm = llm.ok_or_else(|| {
        VantageError::ModelUnavailable("no model provider configured".to_string())
    })?;
    let summary = state
        .ensure_summary()
        .ok_or_else(|| VantageError::EmptyData("no dataset loaded".to_string()))?;

    let prompt = prompts::clarification_prompt(summary, message);
    let response = llm.chat(&prompt)?;

    // The model is told to answer with the question on the first line;
    // anything after it is commentary.
    response
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| VantageError::ModelMalformed("empty clarification response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Dataset;
    use crate::llm::MockProvider;

    fn state_with_dataset() -> AnalystState {
        let mut state = AnalystState::new();
        state.load_dataset(Dataset::new(
            vec!["age".into(), "sex".into()],
            vec![vec!["30".into(), "male".into()]],
        ));
        state
    }

    #[test]
    fn test_queue_takes_precedence_fifo() {
        let mut state = state_with_dataset();
        state.unanswered_questions.push_back("q1".to_string());
        state.unanswered_questions.push_back("q2".to_string());

        let mock = MockProvider::new();
        assert_eq!(
            clarification_question(&mut state, "help", Some(&mock), "generic?"),
            "q1"
        );
        assert_eq!(
            clarification_question(&mut state, "help", Some(&mock), "generic?"),
            "q2"
        );
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_new_question_recorded_on_queue() {
        let mut state = state_with_dataset();
        let mock =
            MockProvider::new().with_reply("Which metric matters most?\nJust checking.");

        let question = clarification_question(&mut state, "help", Some(&mock), "generic?");
        assert_eq!(question, "Which metric matters most?");
        assert_eq!(state.unanswered_questions.len(), 1);
        assert_eq!(state.unanswered_questions[0], question);
    }

    #[test]
    fn test_failure_returns_generic_without_queue_mutation() {
        let mut state = state_with_dataset();
        let mock = MockProvider::new().with_failure("down");

        let question = clarification_question(&mut state, "help", Some(&mock), "generic?");
        assert_eq!(question, "generic?");
        assert!(state.unanswered_questions.is_empty());
    }

    #[test]
    fn test_blank_response_is_failure() {
        let mut state = state_with_dataset();
        let mock = MockProvider::new().with_reply("   \n\n  ");

        let question = clarification_question(&mut state, "help", Some(&mock), "generic?");
        assert_eq!(question, "generic?");
        assert!(state.unanswered_questions.is_empty());
    }

    #[test]
    fn test_no_dataset_is_failure() {
        let mut state = AnalystState::new();
        let mock = MockProvider::new().with_reply("unused");

        let question = clarification_question(&mut state, "help", Some(&mock), "generic?");
        assert_eq!(question, "generic?");
        assert_eq!(mock.calls(), 0);
    }
}
