use std::path::PathBuf;

pub const QUESTIONS_ENV: &str = "QUIZ_QUESTIONS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON question bank to use instead of the bundled questions.
    pub questions_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let questions_path = lookup(QUESTIONS_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { questions_path }
    }
}
