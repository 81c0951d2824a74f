//! Text screens for the terminal front end. Everything here reads state and
//! formats it; no transitions happen in this module.

use crate::quiz::progress::Progress;
use crate::quiz::results::Scorecard;
use crate::quiz::state::QuizState;

pub const CONFIRM_AND_CONTINUE: &str = "Confirm and Continue";

pub fn question(state: &QuizState) -> String {
    let question = match state.current_question() {
        Some(question) => question,
        None => return String::new(),
    };

    let mut screen = String::new();
    if let Some(progress) = Progress::of(state) {
        screen.push_str(&format!("{}\n", progress));
    }
    screen.push_str(&format!("\n{}\n\n", question.prompt));

    for (key, text) in &question.choices {
        let marker = if state.pending_selection() == Some(*key) {
            "(*)"
        } else {
            "( )"
        };
        screen.push_str(&format!("  {} {}. {}\n", marker, key, text));
    }

    if let Some(error) = state.error_message() {
        screen.push_str(&format!("\n! {}\n", error));
    }

    let keys = question
        .choices
        .keys()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join("/");
    screen.push_str(&format!(
        "\n[{}] choose, [Enter] {}, [q] quit\n",
        keys, CONFIRM_AND_CONTINUE
    ));
    screen
}

pub fn results(card: &Scorecard) -> String {
    let mut screen = String::from("Results\n\n");
    for line in &card.lines {
        screen.push_str(&format!("  {} - {}\n", line.prompt, line.mark()));
    }
    screen.push_str(&format!("\nScore: {}/{}\n", card.correct, card.total));
    screen.push_str("\n[r] Restart, [q] quit\n");
    screen
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::quiz::bank::QuestionBank;
    use crate::quiz::ChoiceKey;

    fn initial() -> QuizState {
        QuizState::new(Arc::new(QuestionBank::bundled()))
    }

    #[test]
    fn question_screen_shows_progress_choices_and_selection() {
        let state = initial().select_choice(ChoiceKey::B).unwrap();
        let screen = question(&state);

        assert!(screen.starts_with("Question 1 of 3\n"));
        assert!(screen.contains("  ( ) a. "));
        assert!(screen.contains("  (*) b. "));
        assert!(screen.contains("[a/b/c/d] choose"));
        assert!(!screen.contains("Please select an option"));
    }

    #[test]
    fn question_screen_shows_inline_error() {
        let state = initial().advance().unwrap();
        assert!(question(&state).contains("! Please select an option\n"));
    }

    #[test]
    fn results_screen_lists_marks_and_score() {
        let state = [ChoiceKey::A, ChoiceKey::C, ChoiceKey::C]
            .into_iter()
            .fold(initial(), |s, k| s.select_choice(k).unwrap().advance().unwrap());
        let card = Scorecard::tally(state.questions(), state.answers());
        let screen = results(&card);

        assert!(screen.starts_with("Results\n"));
        assert_eq!(screen.matches(" - Failed").count(), 1);
        assert_eq!(screen.matches(" - Correct").count(), 2);
        assert!(screen.contains("Score: 2/3"));
        assert_eq!(question(&state), "");
    }
}
