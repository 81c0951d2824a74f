use std::sync::Arc;

use log::debug;

use crate::quiz::bank::QuestionBank;
use crate::quiz::{Answer, ChoiceKey, Question};

pub const SELECT_AN_OPTION: &str = "Please select an option";

/// Transitions that only a programming mistake can trigger; the front end
/// routes input by phase so a user never reaches them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("cannot select a choice once results are shown")]
    SelectAfterResults,

    #[error("cannot advance once results are shown")]
    AdvanceAfterResults,

    #[error("restart is only available from the results view")]
    RestartBeforeResults,

    #[error("question {question_id} has no choice '{key}'")]
    UnknownChoice { question_id: u32, key: ChoiceKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectChoice(ChoiceKey),
    Advance,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering(usize),
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    questions: Arc<QuestionBank>,
    current_index: usize,
    pending_selection: Option<ChoiceKey>,
    answers: Vec<Answer>,
    results_visible: bool,
    error_message: Option<String>,
}

impl QuizState {
    pub fn new(questions: Arc<QuestionBank>) -> Self {
        Self {
            questions,
            current_index: 0,
            pending_selection: None,
            answers: Vec::new(),
            results_visible: false,
            error_message: None,
        }
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn pending_selection(&self) -> Option<ChoiceKey> {
        self.pending_selection
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.results_visible {
            Phase::Results
        } else {
            Phase::Answering(self.current_index)
        }
    }

    /// `None` once results are shown.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            Phase::Answering(index) => self.questions.get(index),
            Phase::Results => None,
        }
    }

    pub fn apply(&self, action: Action) -> Result<QuizState, UsageError> {
        debug!("applying {:?} in {:?}", action, self.phase());
        match action {
            Action::SelectChoice(key) => self.select_choice(key),
            Action::Advance => self.advance(),
            Action::Restart => self.restart(),
        }
    }

    pub fn select_choice(&self, key: ChoiceKey) -> Result<QuizState, UsageError> {
        let question = self
            .current_question()
            .ok_or(UsageError::SelectAfterResults)?;
        if !question.has_choice(key) {
            return Err(UsageError::UnknownChoice {
                question_id: question.id,
                key,
            });
        }

        Ok(QuizState {
            pending_selection: Some(key),
            error_message: None,
            ..self.clone()
        })
    }

    pub fn advance(&self) -> Result<QuizState, UsageError> {
        let question = self
            .current_question()
            .ok_or(UsageError::AdvanceAfterResults)?;

        let selected_key = match self.pending_selection {
            Some(key) => key,
            None => {
                debug!("advance rejected on question {}: nothing selected", question.id);
                return Ok(QuizState {
                    error_message: Some(SELECT_AN_OPTION.to_string()),
                    ..self.clone()
                });
            }
        };

        let mut answers = self.answers.clone();
        answers.push(Answer::new(question.id, selected_key));

        let (current_index, results_visible) = if self.current_index + 1 < self.questions.len() {
            (self.current_index + 1, false)
        } else {
            (self.current_index, true)
        };

        Ok(QuizState {
            questions: self.questions.clone(),
            current_index,
            pending_selection: None,
            answers,
            results_visible,
            error_message: None,
        })
    }

    pub fn restart(&self) -> Result<QuizState, UsageError> {
        if !self.results_visible {
            return Err(UsageError::RestartBeforeResults);
        }
        Ok(QuizState::new(self.questions.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> QuizState {
        QuizState::new(Arc::new(QuestionBank::bundled()))
    }

    fn answer_all(keys: &[ChoiceKey]) -> QuizState {
        keys.iter().fold(initial(), |state, key| {
            state.select_choice(*key).unwrap().advance().unwrap()
        })
    }

    #[test]
    fn answering_every_question_reaches_results() {
        let state = answer_all(&[ChoiceKey::A, ChoiceKey::B, ChoiceKey::D]);

        assert!(state.results_visible());
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.answers().len(), 3);
        assert_eq!(state.current_index(), 2);
        assert!(state.current_question().is_none());
    }

    #[test]
    fn answer_log_tracks_position_while_answering() {
        let mut state = initial();
        for (i, key) in [ChoiceKey::D, ChoiceKey::C].into_iter().enumerate() {
            assert_eq!(state.answers().len(), state.current_index());
            state = state.select_choice(key).unwrap().advance().unwrap();
            assert_eq!(state.current_index(), i + 1);
            assert_eq!(state.answers().len(), i + 1);
            assert!(!state.results_visible());
        }
        assert_eq!(
            state.answers(),
            &[Answer::new(1, ChoiceKey::D), Answer::new(2, ChoiceKey::C)]
        );
    }

    #[test]
    fn advance_without_selection_only_sets_the_error() {
        let state = initial();
        let next = state.advance().unwrap();

        assert_eq!(next.error_message(), Some("Please select an option"));
        assert_eq!(next.current_index(), 0);
        assert!(next.answers().is_empty());
        assert_eq!(
            QuizState {
                error_message: None,
                ..next.clone()
            },
            state
        );

        // Retrying keeps the same state and never appends.
        let again = next.advance().unwrap();
        assert_eq!(again, next);
    }

    #[test]
    fn selecting_clears_the_error_and_advance_clears_it_too() {
        let rejected = initial().advance().unwrap();
        let selected = rejected.select_choice(ChoiceKey::B).unwrap();
        assert_eq!(selected.error_message(), None);
        assert_eq!(selected.pending_selection(), Some(ChoiceKey::B));

        let advanced = selected.advance().unwrap();
        assert_eq!(advanced.error_message(), None);
        assert_eq!(advanced.pending_selection(), None);
    }

    #[test]
    fn selecting_the_same_key_twice_is_idempotent() {
        let once = initial().select_choice(ChoiceKey::B).unwrap();
        let twice = once.select_choice(ChoiceKey::B).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn later_selection_replaces_earlier_one() {
        let state = initial()
            .select_choice(ChoiceKey::A)
            .unwrap()
            .select_choice(ChoiceKey::D)
            .unwrap()
            .advance()
            .unwrap();
        assert_eq!(state.answers(), &[Answer::new(1, ChoiceKey::D)]);
    }

    #[test]
    fn transitions_do_not_touch_the_input_state() {
        let state = initial().select_choice(ChoiceKey::C).unwrap();
        let snapshot = state.clone();
        let _ = state.advance().unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn restart_from_results_equals_initial_state() {
        let finished = answer_all(&[ChoiceKey::D, ChoiceKey::C, ChoiceKey::C]);
        assert_eq!(finished.restart().unwrap(), initial());
    }

    #[test]
    fn usage_errors_outside_their_phase() {
        assert_eq!(initial().restart(), Err(UsageError::RestartBeforeResults));

        let finished = answer_all(&[ChoiceKey::D, ChoiceKey::C, ChoiceKey::C]);
        assert_eq!(
            finished.select_choice(ChoiceKey::A),
            Err(UsageError::SelectAfterResults)
        );
        assert_eq!(finished.advance(), Err(UsageError::AdvanceAfterResults));
    }

    #[test]
    fn rejects_a_key_the_question_does_not_offer() {
        let bank = QuestionBank::new(vec![Question::new(
            9,
            "Yes or no?",
            vec![
                (ChoiceKey::A, "yes".to_string()),
                (ChoiceKey::B, "no".to_string()),
            ],
            ChoiceKey::A,
        )])
        .unwrap();
        let state = QuizState::new(Arc::new(bank));

        assert_eq!(
            state.select_choice(ChoiceKey::C),
            Err(UsageError::UnknownChoice {
                question_id: 9,
                key: ChoiceKey::C
            })
        );
    }

    #[test]
    fn apply_dispatches_actions() {
        let state = initial()
            .apply(Action::SelectChoice(ChoiceKey::D))
            .and_then(|s| s.apply(Action::Advance))
            .unwrap();
        assert_eq!(state.phase(), Phase::Answering(1));
        assert_eq!(
            state.apply(Action::Restart),
            Err(UsageError::RestartBeforeResults)
        );
    }
}
