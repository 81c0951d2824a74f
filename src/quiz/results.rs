use std::fmt;

use log::warn;

use crate::quiz::bank::QuestionBank;
use crate::quiz::{Answer, ChoiceKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Failed,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Correct => f.write_str("Correct"),
            Mark::Failed => f.write_str("Failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub question_id: u32,
    pub prompt: String,
    pub selected: ChoiceKey,
    pub is_correct: bool,
}

impl ResultLine {
    pub fn mark(&self) -> Mark {
        if self.is_correct {
            Mark::Correct
        } else {
            Mark::Failed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub lines: Vec<ResultLine>,
    pub correct: usize,
    pub total: usize,
}

impl Scorecard {
    /// One line per answer, in submission order.
    pub fn tally(bank: &QuestionBank, answers: &[Answer]) -> Self {
        let lines: Vec<ResultLine> = answers
            .iter()
            .filter_map(|answer| {
                let question = bank.find(answer.question_id);
                if question.is_none() {
                    warn!("answer refers to unknown question {}", answer.question_id);
                }
                question.map(|question| ResultLine {
                    question_id: question.id,
                    prompt: question.prompt.clone(),
                    selected: answer.selected_key,
                    is_correct: question.is_correct(answer.selected_key),
                })
            })
            .collect();

        let correct = lines.iter().filter(|line| line.is_correct).count();
        Self {
            total: bank.len(),
            correct,
            lines,
        }
    }
}
