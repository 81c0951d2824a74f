use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::quiz::{ChoiceKey, Question};

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("question bank is empty")]
    Empty,

    #[error("question id {0} is used more than once")]
    DuplicateId(u32),

    #[error("question {id} has no choices")]
    NoChoices { id: u32 },

    #[error("question {id} marks '{key}' as correct but has no such choice")]
    MissingCorrectChoice { id: u32, key: ChoiceKey },
}

/// Ordered, read-only set of questions for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
            if question.choices.is_empty() {
                return Err(BankError::NoChoices { id: question.id });
            }
            if !question.has_choice(question.correct_answer) {
                return Err(BankError::MissingCorrectChoice {
                    id: question.id,
                    key: question.correct_answer,
                });
            }
        }

        Ok(Self { questions })
    }

    /// Expects a JSON array of questions.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn bundled() -> Self {
        let questions = vec![
            Question::new(
                1,
                "인포스틸러 악성코드에 대해 알맞지 않은 내용을 고르세요",
                choices([
                    "인포스틸러는 Information stealer의 줄임말로 말 그대로 정보 유출형 악성코드를 말합니다.",
                    "인포스틸러는 견적 서류, 내부 메일 또는 파일 사칭과 같은 스팸메일이나 불법 다운로드 창 등을 통해 유포됩니다.",
                    "정품 소프트웨어 사용, 불분명한 이메일 주의, 최신 버전 백신 사용, 자동 로그인 자제 등을 통해 감염을 예방합니다.",
                    "재택근무 시 사용하는 개인 PC는 감염되어도 회사에 피해가 없으므로 예방수칙 준수를 소홀히 합니다.",
                ]),
                ChoiceKey::D,
            ),
            Question::new(
                2,
                "다음 중 사무환경 점검 항목에 대해 올바르게 설명하지 않은 것은 무엇일까요?",
                choices([
                    "중요문서 노출 : 중요문서(고객사 정보, 대외비, 비밀번호 등 포함된 문서)는 시건장치가 있는 안전한 곳에 보관해야 합니다.",
                    "PC 잠금 : 부재 시 PC 화면잠금(화면보호기)을 설정하고 PC 비밀번호 설정합니다.",
                    "공용장소 내 문서방치 : 회의실 안은 안전한 장소이므로 중요문서를 두고와도 됩니다.",
                    "정보자산 방치 : 회사에서 지급한 정보자산은 관리 담당자를 지정하고 안전한 곳(시건장치가 있는 곳)에 보관해야 합니다.",
                ]),
                ChoiceKey::C,
            ),
            Question::new(
                3,
                "다음 중 애플리케이션을 안전하게 이용하지 않는 사용자는 누구일까요?",
                choices([
                    "메리: 애플리케이션에서 신규 보안패치가 이루어졌다고? 최신 버전으로 업데이트 해야겠다!",
                    "가영 : 안전하게 애플리케이션을 이용하려면 이중 인증 설정해야겠다!",
                    "존: 이중 인증은 귀찮아! 이중 인증 설정안하고 애플리케이션 이용할래!",
                    "원빈 : 다크웹에서 애플리케이션 內 개인정보를 판다고? 불법이니 이용하지 말아야겠다!",
                ]),
                ChoiceKey::C,
            ),
        ];

        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn choices(texts: [&str; 4]) -> Vec<(ChoiceKey, String)> {
    ChoiceKey::ALL
        .into_iter()
        .zip(texts)
        .map(|(key, text)| (key, text.to_string()))
        .collect()
}
