//! # fan-quiz
//!
//! A terminal promotion quiz: every correct answer takes €15 off a shirt,
//! and the result screen shows the final offer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fan_quiz::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::builtin(&Config::default())?;
//!     quiz.run().await
//! }
//! ```

mod config;
mod controller;
mod data;
mod logging;
mod models;
mod notification;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use log::{debug, info};
use thiserror::Error;

pub use config::{Args, Config};
pub use controller::{QuizController, SessionSnapshot, TransitionError};
pub use data::{BankError, QuestionBank};
pub use logging::{LoggingError, init_file_logger};
pub use models::{
    BASE_PRICE, Cents, FLOOR_PRICE, MAX_DISCOUNT, PER_QUESTION_REWARD, Phase, QUESTION_COUNT,
    Question, QuizSession,
};
pub use notification::{
    Chime, DISMISS_DELAY, Expiry, ExpiryReceiver, ExpirySender, NoRuntime, NotificationScheduler,
    Silent, TerminalBell, expiry_channel,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Bank(#[from] BankError),

    #[error("Failed to set up logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start notifications: {0}")]
    Runtime(#[from] NoRuntime),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    controller: QuizController,
    expiries: ExpiryReceiver,
}

impl Quiz {
    /// Create a quiz over the given bank.
    ///
    /// Fails with [`QuizError::Runtime`] when called outside a tokio runtime.
    pub fn new(bank: QuestionBank, chime: Box<dyn Chime>) -> Result<Self, QuizError> {
        let (tx, rx) = expiry_channel();
        Ok(Self {
            controller: QuizController::new(bank, tx, chime)?,
            expiries: rx,
        })
    }

    /// Create a quiz over the question table shipped with the binary.
    pub fn builtin(config: &Config) -> Result<Self, QuizError> {
        let bank = QuestionBank::builtin()?;
        let chime: Box<dyn Chime> = if config.chime {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        };
        Self::new(bank, chime)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::acquire()?;
        info!("Quiz UI started");
        let result = run_event_loop(&mut term, &mut self.controller, &mut self.expiries).await;
        drop(term);
        info!("Quiz UI stopped");
        result
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut QuizController {
        &mut self.controller
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    quiz: &mut QuizController,
    expiries: &mut ExpiryReceiver,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, quiz))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_input(quiz, key.code) {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(expiry) = expiries.recv() => {
                quiz.handle_expiry(expiry);
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(quiz: &mut QuizController, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    let outcome = match quiz.phase() {
        Phase::NotStarted => handle_intro_input(quiz, key),
        Phase::Answering => handle_answering_input(quiz, key),
        Phase::Revealed => handle_revealed_input(quiz, key),
        Phase::Completed => handle_result_input(quiz, key),
    };

    if let Err(err) = outcome {
        debug!("Ignored key {:?}: {}", key, err);
    }
    false
}

fn handle_intro_input(quiz: &mut QuizController, key: KeyCode) -> Result<(), TransitionError> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => quiz.start(),
        _ => Ok(()),
    }
}

fn handle_answering_input(quiz: &mut QuizController, key: KeyCode) -> Result<(), TransitionError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => quiz.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => quiz.select_next_option(),
        KeyCode::Char(c @ '1'..='4') => quiz.select_option(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='d') => quiz.select_option(c as usize - 'a' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Submitting is disabled until an option is picked.
            if quiz.session().selected_option().is_some() {
                quiz.submit().map(|_| ())
            } else {
                Ok(())
            }
        }
        KeyCode::Esc | KeyCode::Char('x') => {
            quiz.dismiss_notification();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn handle_revealed_input(quiz: &mut QuizController, key: KeyCode) -> Result<(), TransitionError> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => quiz.advance(),
        KeyCode::Esc | KeyCode::Char('x') => {
            quiz.dismiss_notification();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn handle_result_input(quiz: &mut QuizController, key: KeyCode) -> Result<(), TransitionError> {
    match key {
        KeyCode::Char('b') | KeyCode::Char('B') => quiz.buy_now(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            quiz.restart();
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> (QuizController, ExpiryReceiver) {
        let (tx, rx) = expiry_channel();
        let bank = QuestionBank::builtin().unwrap();
        (QuizController::new(bank, tx, Box::new(Silent)).unwrap(), rx)
    }

    fn press(quiz: &mut QuizController, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| handle_input(quiz, key))
    }

    #[tokio::test]
    async fn test_keyboard_play_through() {
        let (mut quiz, _rx) = quiz();
        let quit = press(
            &mut quiz,
            &[
                KeyCode::Enter,
                KeyCode::Char('4'),
                KeyCode::Enter,
                KeyCode::Enter,
                KeyCode::Char('b'),
                KeyCode::Enter,
                KeyCode::Enter,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Enter,
                KeyCode::Enter,
                KeyCode::Up,
                KeyCode::Up,
            ],
        );
        assert!(!quit);
        // Up from no selection lands on the last option, the second Up moves to C.
        assert_eq!(quiz.session().current_index(), 3);
        assert_eq!(quiz.session().selected_option(), Some(2));

        press(&mut quiz, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(quiz.phase(), Phase::Completed);
        // Q2 answered with 'b', Q3 with two moves down (index 1), Q4 wrong with C.
        assert_eq!(quiz.session().correct_count(), 3);
        assert_eq!(quiz.final_price(), Cents(4499));
    }

    #[tokio::test]
    async fn test_enter_without_selection_does_nothing() {
        let (mut quiz, _rx) = quiz();
        press(&mut quiz, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(quiz.phase(), Phase::Answering);
        assert_eq!(quiz.session().selected_option(), None);
    }

    #[tokio::test]
    async fn test_dismiss_key_hides_toast() {
        let (mut quiz, _rx) = quiz();
        press(&mut quiz, &[KeyCode::Enter, KeyCode::Char('d'), KeyCode::Enter]);
        assert!(quiz.notification_visible());
        press(&mut quiz, &[KeyCode::Char('x')]);
        assert!(!quiz.notification_visible());
        assert_eq!(quiz.phase(), Phase::Revealed);
    }

    #[tokio::test]
    async fn test_try_again_resets() {
        let (mut quiz, _rx) = quiz();
        for _ in 0..QUESTION_COUNT {
            press(&mut quiz, &[KeyCode::Enter, KeyCode::Char('1'), KeyCode::Enter]);
        }
        press(&mut quiz, &[KeyCode::Enter]);
        assert_eq!(quiz.phase(), Phase::Completed);
        press(&mut quiz, &[KeyCode::Char('r')]);
        assert_eq!(quiz.phase(), Phase::NotStarted);
        assert_eq!(quiz.session(), &QuizSession::new());
    }

    #[tokio::test]
    async fn test_q_quits() {
        let (mut quiz, _rx) = quiz();
        assert!(handle_input(&mut quiz, KeyCode::Char('q')));
    }

    #[tokio::test]
    async fn test_quiz_exposes_its_controller() {
        let bank = QuestionBank::builtin().unwrap();
        let mut game = Quiz::new(bank, Box::new(Silent)).unwrap();
        game.controller_mut().start().unwrap();
        game.controller_mut().select_option(3).unwrap();
        assert_eq!(game.controller_mut().submit(), Ok(true));
        assert_eq!(game.controller().session().correct_count(), 1);
        assert!(game.controller().notification_visible());
    }

    #[test]
    fn test_quiz_outside_runtime_is_an_error() {
        let bank = QuestionBank::builtin().unwrap();
        let result = Quiz::new(bank, Box::new(Silent));
        assert!(matches!(result, Err(QuizError::Runtime(_))));
    }
}
