use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{FLOOR_PRICE, MAX_DISCOUNT, PER_QUESTION_REWARD, QUESTION_COUNT};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(22),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(76),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    let accent = Style::default().fg(Color::White).bold();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A MESSAGE FROM THE CLUB PRESIDENT",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Loyal supporters!".italic()),
        Line::from(""),
        Line::from(vec![
            "We have just won our ".italic(),
            Span::styled("first Champions League", accent),
            ", and this".italic(),
        ]),
        Line::from("historic moment deserves to be celebrated with you.".italic()),
        Line::from(""),
        Line::from(vec![
            "So I am unlocking a ".italic(),
            Span::styled("progressive discount", accent),
            " on the official shirt,".italic(),
        ]),
        Line::from(vec![
            "but only for ".italic(),
            Span::styled("true fans", accent),
            " who really know our club.".italic(),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("Answer the {} questions and earn up to ", QUESTION_COUNT)).italic(),
            Span::styled(format!("{} off", MAX_DISCOUNT), accent),
        ]),
        Line::from(Span::raw(format!("({} per correct answer).", PER_QUESTION_REWARD)).italic()),
        Line::from(""),
        Line::from("Allez Paris!".bold()),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Max discount: {}  ·  Final price: {}",
                MAX_DISCOUNT, FLOOR_PRICE
            ),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start the true fan quiz  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, columns[1]);
}
