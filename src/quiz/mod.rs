pub mod bank;
pub mod progress;
pub mod results;
pub mod state;

use std::collections::BTreeMap;
use std::fmt;

/// Letter identifying one of the options of a question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKey {
    A,
    B,
    C,
    D,
}

impl ChoiceKey {
    pub const ALL: [ChoiceKey; 4] = [ChoiceKey::A, ChoiceKey::B, ChoiceKey::C, ChoiceKey::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(ChoiceKey::A),
            'b' => Some(ChoiceKey::B),
            'c' => Some(ChoiceKey::C),
            'd' => Some(ChoiceKey::D),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ChoiceKey::A => 'a',
            ChoiceKey::B => 'b',
            ChoiceKey::C => 'c',
            ChoiceKey::D => 'd',
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub choices: BTreeMap<ChoiceKey, String>,
    pub correct_answer: ChoiceKey,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = (ChoiceKey, String)>,
        correct_answer: ChoiceKey,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            choices: choices.into_iter().collect(),
            correct_answer,
        }
    }

    pub fn has_choice(&self, key: ChoiceKey) -> bool {
        self.choices.contains_key(&key)
    }

    pub fn is_correct(&self, key: ChoiceKey) -> bool {
        self.correct_answer == key
    }
}

/// One submitted answer. Lives in the append-only answer log of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub selected_key: ChoiceKey,
}

impl Answer {
    pub fn new(question_id: u32, selected_key: ChoiceKey) -> Self {
        Self {
            question_id,
            selected_key,
        }
    }
}
