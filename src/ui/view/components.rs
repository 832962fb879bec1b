//! Shared widgets: buttons and input boxes

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [component] Button; `selected` marks the active toggle, `is_focused` the keyboard focus
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: bool,
    is_focused: bool,
    active_color: Color,
) {
    let mut style = if selected {
        Style::default().fg(Color::Black).bg(active_color)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border = if is_focused {
        style = style.add_modifier(Modifier::BOLD);
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

/// [component] Titled input box; required fields get a `*` after the title
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    required: bool,
    is_focused: bool,
) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = if required {
        format!("{title} *")
    } else {
        title.to_string()
    };
    let text = if is_focused {
        format!("{value}_")
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}
