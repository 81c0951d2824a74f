use std::fmt;

use crate::quiz::state::{Phase, QuizState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn of(state: &QuizState) -> Option<Self> {
        match state.phase() {
            Phase::Answering(index) => Some(Self::new(index + 1, state.questions().len())),
            Phase::Results => None,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {} of {}", self.current, self.total)
    }
}
