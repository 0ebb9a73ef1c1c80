mod intro;
mod quiz;
mod result;
mod toast;

use ratatui::{prelude::*, widgets::Block};

use crate::controller::QuizController;
use crate::models::Phase;

pub fn render(frame: &mut Frame, quiz: &QuizController) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match quiz.phase() {
        Phase::NotStarted => intro::render(frame, area),
        Phase::Answering | Phase::Revealed => {
            quiz::render(frame, area, quiz);
            if quiz.notification_visible() {
                toast::render(frame, area);
            }
        }
        Phase::Completed => result::render(frame, area, quiz),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Cell};

    use super::*;
    use crate::data::QuestionBank;
    use crate::notification::{ExpiryReceiver, Silent, expiry_channel};

    fn quiz() -> (QuizController, ExpiryReceiver) {
        let (tx, rx) = expiry_channel();
        let bank = QuestionBank::builtin().unwrap();
        (QuizController::new(bank, tx, Box::new(Silent)).unwrap(), rx)
    }

    fn screen(quiz: &QuizController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, quiz)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_intro_screen() {
        let (quiz, _rx) = quiz();
        let text = screen(&quiz);
        assert!(text.contains("A MESSAGE FROM THE CLUB PRESIDENT"));
        assert!(text.contains("Max discount: €60"));
        assert!(text.contains("Final price: €29.99"));
    }

    #[tokio::test]
    async fn test_question_screen() {
        let (mut quiz, _rx) = quiz();
        quiz.start().unwrap();
        quiz.select_option(1).unwrap();
        let text = screen(&quiz);
        assert!(text.contains("Question 1 of 4"));
        assert!(text.contains("Vinicius Jr"));
        assert!(text.contains("(•) B. Neymar"));
        assert!(text.contains("Discount progress: €0 / €60"));
        assert!(!text.contains("Congratulations!"));
    }

    #[tokio::test]
    async fn test_revealed_screen_with_toast() {
        let (mut quiz, _rx) = quiz();
        quiz.start().unwrap();
        quiz.select_option(3).unwrap();
        quiz.submit().unwrap();
        let text = screen(&quiz);
        assert!(text.contains("Correct! +€15 discount"));
        assert!(text.contains("Correct answer: Vinicius Jr"));
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("You earned €15 off!"));
        assert!(text.contains("Discount progress: €15 / €60"));

        quiz.dismiss_notification();
        assert!(!screen(&quiz).contains("Congratulations!"));
    }

    #[tokio::test]
    async fn test_incorrect_reveal() {
        let (mut quiz, _rx) = quiz();
        quiz.start().unwrap();
        quiz.select_option(0).unwrap();
        quiz.submit().unwrap();
        let text = screen(&quiz);
        assert!(text.contains("Incorrect"));
        assert!(text.contains("Correct answer: Vinicius Jr"));
        assert!(!text.contains("Congratulations!"));
    }

    #[tokio::test]
    async fn test_result_screen() {
        let (mut quiz, _rx) = quiz();
        quiz.start().unwrap();
        for option in [3, 1, 1, 1] {
            quiz.select_option(option).unwrap();
            quiz.submit().unwrap();
            quiz.advance().unwrap();
        }
        let text = screen(&quiz);
        assert!(text.contains("You got 4 of 4 questions right"));
        assert!(text.contains("-€60"));
        assert!(text.contains("€29.99"));
        assert!(text.contains("PERFECT!"));
    }

    #[tokio::test]
    async fn test_result_screen_without_perfect_score() {
        let (mut quiz, _rx) = quiz();
        quiz.start().unwrap();
        for option in [0, 0, 0, 0] {
            quiz.select_option(option).unwrap();
            quiz.submit().unwrap();
            quiz.advance().unwrap();
        }
        let text = screen(&quiz);
        assert!(text.contains("You got 0 of 4 questions right"));
        assert!(text.contains("€89.99"));
        assert!(!text.contains("PERFECT!"));
    }
}
