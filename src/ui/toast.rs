use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::models::PER_QUESTION_REWARD;

const TOAST_WIDTH: u16 = 34;
const TOAST_HEIGHT: u16 = 5;

/// Draw the "discount earned" toast over the top-right corner.
pub fn render(frame: &mut Frame, area: Rect) {
    let toast = top_right(area, TOAST_WIDTH, TOAST_HEIGHT);

    let content = vec![
        Line::from(Span::styled(
            "Congratulations!",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(format!("You earned {} off!", PER_QUESTION_REWARD)),
        Line::from("x close".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).fg(Color::White).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green).bold())
            .bg(Color::Green)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(Clear, toast);
    frame.render_widget(widget, toast);
}

fn top_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}
