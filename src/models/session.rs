/// Stage of a play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Intro screen, quiz not started yet.
    #[default]
    NotStarted,
    /// A question is shown and can be answered.
    Answering,
    /// The answer to the current question has been judged.
    Revealed,
    /// All questions answered; the offer is shown.
    Completed,
}

/// Mutable state of one play-through.
///
/// Fields are only written through the controller's transitions; everything
/// else reads them through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    phase: Phase,
    current_index: usize,
    selected_option: Option<usize>,
    correct_count: usize,
    last_answer_correct: Option<bool>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Whether the answer judged in `Revealed` was correct.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    pub(crate) fn begin(&mut self) {
        self.phase = Phase::Answering;
        self.current_index = 0;
        self.selected_option = None;
    }

    pub(crate) fn select(&mut self, option: usize) {
        self.selected_option = Some(option);
    }

    pub(crate) fn reveal(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        }
        self.last_answer_correct = Some(correct);
        self.phase = Phase::Revealed;
    }

    pub(crate) fn next_question(&mut self) {
        self.current_index += 1;
        self.selected_option = None;
        self.last_answer_correct = None;
        self.phase = Phase::Answering;
    }

    pub(crate) fn complete(&mut self) {
        self.selected_option = None;
        self.last_answer_correct = None;
        self.phase = Phase::Completed;
    }
}
