mod config;
mod quiz;
mod terminal;
mod view;

use std::sync::Arc;

use dotenv::dotenv;
use quiz::bank::QuestionBank;
use terminal::{HandlerResult, Screen};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> HandlerResult {
    // A missing .env file is fine, everything has a default
    dotenv().ok();
    pretty_env_logger::init();

    let config = config::Config::from_env();
    let bank = match &config.questions_path {
        Some(path) => {
            log::info!("Loading questions from {}", path.display());
            QuestionBank::from_path(path).map_err(|err| {
                log::error!("Unable to load questions from {}: {}", path.display(), err);
                err
            })?
        }
        None => QuestionBank::bundled(),
    };
    log::debug!("Question bank ready: {} questions", bank.len());

    let mut screen = Screen::new(tokio::io::stdout());
    terminal::run(Arc::new(bank), BufReader::new(tokio::io::stdin()), &mut screen).await
}
