use std::sync::Arc;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::quiz::bank::QuestionBank;
use crate::quiz::results::Scorecard;
use crate::quiz::state::{Action, Phase, QuizState};
use crate::quiz::ChoiceKey;
use crate::view;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type TransitionResult = Result<QuizState, Box<dyn std::error::Error + Send + Sync>>;

const ANSWERING_HINT: &str = "Type one of the listed letters to choose, press Enter to continue";
const RESULTS_HINT: &str = "Type r to restart or q to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select(ChoiceKey),
    Next,
    Restart,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "" | "n" | "next" => Some(Command::Next),
            "r" | "restart" => Some(Command::Restart),
            "q" | "quit" => Some(Command::Quit),
            _ => {
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ChoiceKey::from_char(c).map(Command::Select),
                    _ => None,
                }
            }
        }
    }
}

pub struct Screen<W> {
    out: W,
}

impl<W: AsyncWrite + Unpin> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub async fn send_message(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n").await?;
        }
        self.out.flush().await
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Drives one quiz session until the input ends or the user quits.
pub async fn run<R, W>(bank: Arc<QuestionBank>, input: R, screen: &mut Screen<W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = QuizState::new(bank);
    info!("starting quiz with {} questions", state.questions().len());
    screen.send_message(&view::question(&state)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => command,
            None => {
                debug!("unrecognized input {:?}", line);
                let hint = match state.phase() {
                    Phase::Answering(_) => ANSWERING_HINT,
                    Phase::Results => RESULTS_HINT,
                };
                screen.send_message(hint).await?;
                continue;
            }
        };

        state = match state.phase() {
            Phase::Answering(_) => answering(screen, &state, command).await?,
            Phase::Results => results(screen, &state, command).await?,
        };
    }

    info!(
        "leaving quiz with {} of {} questions answered",
        state.answers().len(),
        state.questions().len()
    );
    Ok(())
}

async fn answering<W: AsyncWrite + Unpin>(
    screen: &mut Screen<W>,
    state: &QuizState,
    command: Command,
) -> TransitionResult {
    let action = match command {
        Command::Select(key) => {
            let offered = state
                .current_question()
                .map(|q| q.has_choice(key))
                .unwrap_or(false);
            if !offered {
                screen.send_message(ANSWERING_HINT).await?;
                return Ok(state.clone());
            }
            Action::SelectChoice(key)
        }
        Command::Next => Action::Advance,
        _ => {
            screen.send_message(ANSWERING_HINT).await?;
            return Ok(state.clone());
        }
    };

    let next = state.apply(action)?;
    if next.results_visible() {
        let card = Scorecard::tally(next.questions(), next.answers());
        info!("quiz finished: {}/{} correct", card.correct, card.total);
        screen.send_message(&view::results(&card)).await?;
    } else {
        screen.send_message(&view::question(&next)).await?;
    }
    Ok(next)
}

async fn results<W: AsyncWrite + Unpin>(
    screen: &mut Screen<W>,
    state: &QuizState,
    command: Command,
) -> TransitionResult {
    match command {
        Command::Restart => {
            let next = state.apply(Action::Restart)?;
            info!("restarting quiz");
            screen.send_message(&view::question(&next)).await?;
            Ok(next)
        }
        _ => {
            screen.send_message(RESULTS_HINT).await?;
            Ok(state.clone())
        }
    }
}
