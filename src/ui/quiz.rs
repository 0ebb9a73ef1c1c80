use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::controller::QuizController;
use crate::models::{MAX_DISCOUNT, PER_QUESTION_REWARD, Phase, Question};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let Some(question) = quiz.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], quiz);
    render_question_progress(frame, chunks[1], quiz);
    render_question_text(frame, chunks[3], &question.prompt);

    if quiz.phase() == Phase::Revealed {
        render_reveal(frame, chunks[4], quiz, question);
    } else {
        render_options(frame, chunks[4], &question.options, quiz.session().selected_option());
    }

    render_reward_progress(frame, chunks[5], quiz);
    render_controls(frame, chunks[6], quiz);
}

fn render_header(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).split(area);

    let title = vec![
        Line::from(Span::styled(
            "TRUE FAN QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Question {} of {}",
                quiz.current_question_number(),
                quiz.total_questions()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(title), columns[0]);

    let discount = vec![
        Line::from("Current discount".fg(Color::DarkGray)),
        Line::from(Span::styled(
            quiz.discount().to_string(),
            Style::default().fg(Color::Green).bold(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(discount).alignment(Alignment::Right),
        columns[1],
    );
}

fn render_question_progress(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let widget = Gauge::default()
        .ratio(quiz.question_progress())
        .label("")
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String; 4], selected: Option<usize>) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_reveal(frame: &mut Frame, area: Rect, quiz: &QuizController, question: &Question) {
    let correct = quiz.session().last_answer_correct().unwrap_or(false);
    let (verdict, color) = if correct {
        (format!("✓ Correct! +{} discount", PER_QUESTION_REWARD), Color::Green)
    } else {
        ("✗ Incorrect".to_string(), Color::Red)
    };

    let content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct answer: ", Style::default().bold()),
            Span::raw(question.correct_option()),
        ]),
        Line::from(""),
        Line::from(question.explanation.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}

fn render_reward_progress(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let label = format!("Discount progress: {} / {}", quiz.discount(), MAX_DISCOUNT);
    let widget = Gauge::default()
        .block(Block::default().borders(Borders::TOP).border_style(Color::DarkGray))
        .ratio(quiz.reward_progress())
        .label(label)
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let hint = match quiz.phase() {
        Phase::Revealed if quiz.is_last_question() => "enter see final result  ·  q quit",
        Phase::Revealed => "enter next question  ·  q quit",
        _ if quiz.session().selected_option().is_some() => {
            "j/k or 1-4 choose  ·  enter confirm answer  ·  q quit"
        }
        _ => "j/k or 1-4 choose  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
