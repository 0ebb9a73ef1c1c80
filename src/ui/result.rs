use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::controller::QuizController;
use crate::models::{BASE_PRICE, FLOOR_PRICE};

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(24),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(64),
        Constraint::Fill(1),
    ])
    .split(rows[1]);

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .split(columns[1]);

    render_score_summary(frame, chunks[0], quiz);
    render_offer(frame, chunks[1], quiz);
    render_actions(frame, chunks[2]);
    render_footnotes(frame, chunks[3]);
    render_controls(frame, chunks[5]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CONGRATULATIONS, TRUE FAN!",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You got {} of {} questions right",
                quiz.session().correct_count(),
                quiz.total_questions()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_offer(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let mut lines = vec![
        price_line(
            "Original price",
            Span::styled(
                BASE_PRICE.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
        ),
        price_line(
            "Discount earned",
            Span::styled(
                format!("-{}", quiz.discount()),
                Style::default().fg(Color::Green).bold(),
            ),
        ),
        price_line(
            "Your final price",
            Span::styled(
                quiz.final_price().to_string(),
                Style::default().fg(Color::Cyan).bold(),
            ),
        ),
    ];

    if quiz.is_perfect_score() {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "PERFECT! You are a true supporter!",
                Style::default().fg(Color::Green).bold(),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from("Your shirt is practically at cost price!".fg(Color::Green))
                .alignment(Alignment::Center),
        );
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Blue)
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, area);
}

fn price_line<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
        value,
    ])
}

fn render_actions(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let buy = Paragraph::new(Line::from(vec![
        Span::styled("[b] ", Style::default().fg(Color::DarkGray)),
        Span::styled("Buy now", Style::default().fg(Color::White).bold()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Blue),
    );
    let retry = Paragraph::new(Line::from(vec![
        Span::styled("[r] ", Style::default().fg(Color::DarkGray)),
        Span::styled("Try again", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(buy, columns[0]);
    frame.render_widget(retry, columns[1]);
}

fn render_footnotes(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("* Offer valid for true fans only"),
        Line::from(format!(
            "** Cost price: {} (maximum discount applied)",
            FLOOR_PRICE
        )),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("b buy now  ·  r try again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
