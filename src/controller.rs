//! Quiz state machine.
//!
//! `NotStarted -> Answering <-> Revealed -> Completed`, with `restart`
//! returning to a fresh `NotStarted` session from anywhere.

use log::{debug, info};
use thiserror::Error;

use crate::data::QuestionBank;
use crate::models::{self, Cents, MAX_DISCOUNT, OPTION_COUNT, Phase, Question, QuizSession};
use crate::notification::{Chime, Expiry, ExpirySender, NoRuntime, NotificationScheduler};

/// An action that does not apply to the current state. The state is left
/// untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} while {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("no option selected")]
    NothingSelected,

    #[error("option {0} does not exist")]
    NoSuchOption(usize),
}

/// Everything the screens observe, derived values included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub current_index: usize,
    pub selected_option: Option<usize>,
    pub correct_count: usize,
    pub notification_visible: bool,
    pub discount: Cents,
    pub final_price: Cents,
}

pub struct QuizController {
    bank: QuestionBank,
    session: QuizSession,
    notifications: NotificationScheduler,
}

impl QuizController {
    /// Create a controller in `NotStarted`.
    ///
    /// Must be called inside a tokio runtime: the notification timers are
    /// spawned on it. Outside one this returns [`NoRuntime`].
    pub fn new(
        bank: QuestionBank,
        expiries: ExpirySender,
        chime: Box<dyn Chime>,
    ) -> Result<Self, NoRuntime> {
        Ok(Self {
            bank,
            session: QuizSession::new(),
            notifications: NotificationScheduler::new(expiries, chime)?,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.session.phase() {
            Phase::Answering | Phase::Revealed => self.bank.get(self.session.current_index()),
            Phase::NotStarted | Phase::Completed => None,
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.session.current_index() + 1 >= self.bank.len()
    }

    pub fn notification_visible(&self) -> bool {
        self.notifications.is_visible()
    }

    pub fn discount(&self) -> Cents {
        models::discount(self.session.correct_count())
    }

    pub fn final_price(&self) -> Cents {
        models::final_price(self.session.correct_count())
    }

    pub fn is_perfect_score(&self) -> bool {
        models::is_perfect_score(self.session.correct_count())
    }

    /// Share of questions already behind the user, in `[0, 1]`.
    pub fn question_progress(&self) -> f64 {
        if self.bank.is_empty() {
            return 0.0;
        }
        let done = match self.session.phase() {
            Phase::NotStarted => 0,
            Phase::Answering | Phase::Revealed => self.session.current_index(),
            Phase::Completed => self.bank.len(),
        };
        done as f64 / self.bank.len() as f64
    }

    /// Share of the maximum discount earned so far, in `[0, 1]`.
    pub fn reward_progress(&self) -> f64 {
        self.discount().get() as f64 / MAX_DISCOUNT.get() as f64
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.session.phase(),
            current_index: self.session.current_index(),
            selected_option: self.session.selected_option(),
            correct_count: self.session.correct_count(),
            notification_visible: self.notifications.is_visible(),
            discount: self.discount(),
            final_price: self.final_price(),
        }
    }

    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.expect_phase("start", Phase::NotStarted)?;
        self.session.begin();
        info!("Quiz started");
        Ok(())
    }

    pub fn select_option(&mut self, option: usize) -> Result<(), TransitionError> {
        self.expect_phase("select an option", Phase::Answering)?;
        if option >= OPTION_COUNT {
            return Err(TransitionError::NoSuchOption(option));
        }
        self.session.select(option);
        Ok(())
    }

    /// Move the selection down, selecting the first option if none is chosen.
    pub fn select_next_option(&mut self) -> Result<(), TransitionError> {
        let next = match self.session.selected_option() {
            Some(selected) => (selected + 1) % OPTION_COUNT,
            None => 0,
        };
        self.select_option(next)
    }

    /// Move the selection up, selecting the last option if none is chosen.
    pub fn select_previous_option(&mut self) -> Result<(), TransitionError> {
        let previous = match self.session.selected_option() {
            Some(selected) => (selected + OPTION_COUNT - 1) % OPTION_COUNT,
            None => OPTION_COUNT - 1,
        };
        self.select_option(previous)
    }

    /// Judge the selected option. Returns whether it was correct.
    pub fn submit(&mut self) -> Result<bool, TransitionError> {
        self.expect_phase("submit", Phase::Answering)?;
        let selected = self
            .session
            .selected_option()
            .ok_or(TransitionError::NothingSelected)?;

        let index = self.session.current_index();
        let correct = self
            .bank
            .get(index)
            .is_some_and(|question| question.is_correct(selected));

        self.session.reveal(correct);
        info!(
            "Question {} answered {} ({} correct so far)",
            index + 1,
            if correct { "correctly" } else { "incorrectly" },
            self.session.correct_count()
        );

        if correct {
            self.notifications.trigger();
        }
        Ok(correct)
    }

    pub fn advance(&mut self) -> Result<(), TransitionError> {
        self.expect_phase("advance", Phase::Revealed)?;

        if self.is_last_question() {
            self.session.complete();
            // The quiz screen hosting the toast goes away here.
            self.notifications.dismiss();
            info!(
                "Quiz completed: {}/{} correct, final price {}",
                self.session.correct_count(),
                self.bank.len(),
                self.final_price()
            );
        } else {
            self.session.next_question();
        }
        Ok(())
    }

    /// Throw the play-through away and start over from the intro screen.
    pub fn restart(&mut self) {
        self.notifications.dismiss();
        self.session = QuizSession::new();
        info!("Quiz restarted");
    }

    pub fn dismiss_notification(&mut self) -> bool {
        self.notifications.dismiss()
    }

    pub fn handle_expiry(&mut self, expiry: Expiry) -> bool {
        self.notifications.handle_expiry(expiry)
    }

    /// Placeholder purchase action.
    pub fn buy_now(&self) -> Result<(), TransitionError> {
        self.expect_phase("buy", Phase::Completed)?;
        info!("Buy now requested at {}", self.final_price());
        Ok(())
    }

    fn expect_phase(&self, action: &'static str, expected: Phase) -> Result<(), TransitionError> {
        let phase = self.session.phase();
        if phase == expected {
            Ok(())
        } else {
            debug!("Rejected {} in {:?}", action, phase);
            Err(TransitionError::WrongPhase { action, phase })
        }
    }
}
