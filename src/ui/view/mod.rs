//! View layer
//!
//! Pure projection of the app state onto the terminal

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::draft::Field;
use crate::models::{Record, RecordKind};
use components::{render_button, render_input_widget};

/// Draws the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // form + records
            Constraint::Length(3), // help
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_title(frame, chunks[0]);
    render_form(frame, app, body[0]);
    render_records(frame, app, body[1]);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Formulario de Brigadas")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Nuevo registro").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // mode toggle
            Constraint::Length(3), // date + time
            Constraint::Length(3), // place
            Constraint::Min(4),    // responsible
            Constraint::Min(4),    // volunteers / notes
            Constraint::Length(3), // submit
        ])
        .split(inner);

    let mode = app.draft.mode;

    let toggle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Length(12)])
        .split(rows[0]);
    for (kind, cell) in [RecordKind::Dispatch, RecordKind::Return]
        .into_iter()
        .zip(toggle.iter())
    {
        render_button(
            frame,
            *cell,
            kind.label(),
            mode == kind,
            app.focus == Focus::ModeButton(kind),
            Color::Blue,
        );
    }

    let date_time = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let slots = [date_time[0], date_time[1], rows[2], rows[3], rows[4]];
    for (field, slot) in Field::visible(mode).into_iter().zip(slots) {
        render_input_widget(
            frame,
            slot,
            field.label(),
            app.draft.value(field),
            field.is_required(mode),
            app.focus == Focus::Field(field),
        );
    }

    let submit = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20)])
        .split(rows[5]);
    render_button(
        frame,
        submit[0],
        "Guardar Registro",
        true,
        app.focus == Focus::SubmitButton,
        Color::Green,
    );
}

/// Display lines for one record
pub fn record_lines(record: &Record) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            record.kind().label(),
            bold.fg(Color::Cyan),
        )),
        Line::from(format!("Fecha: {}", record.date)),
        Line::from(format!("Hora: {}", record.time)),
        Line::from(format!("Lugar: {}", record.place)),
        Line::from(Span::styled("Responsables:", bold)),
    ];
    lines.extend(
        record
            .responsible_parties
            .iter()
            .map(|name| Line::from(format!("  • {name}"))),
    );

    if let Some(volunteers) = record.volunteers() {
        lines.push(Line::from(Span::styled("Voluntarios:", bold)));
        lines.extend(volunteers.iter().map(|name| Line::from(format!("  • {name}"))));
    }

    if let Some(notes) = record.notes().filter(|n| !n.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("Novedades: ", bold),
            Span::raw(notes.to_string()),
        ]));
    }

    lines
}

/// All lines of the record pane, blank-separated, oldest first
pub fn record_list_lines(records: &[Record]) -> Vec<Line<'static>> {
    if records.is_empty() {
        return vec![Line::from(Span::styled(
            "Sin registros todavía",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(record_lines(record));
    }
    lines
}

fn render_records(frame: &mut Frame, app: &App, area: Rect) {
    let records = app.store.records();
    let lines = record_list_lines(records);

    let title = format!("Registros ({})", records.len());
    let list = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((app.list_scroll, 0));
    frame.render_widget(list, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::ModeButton(_) => "[Enter/Espacio] Elegir  [Tab] Siguiente  [F2/F3] Salida/Retorno  [Esc] Salir",
        Focus::SubmitButton => "[Enter] Guardar  [Tab] Siguiente  [Esc] Salir",
        Focus::Field(Field::Date | Field::Time) => {
            "[Ctrl+T] Ahora  [Tab] Siguiente  [Ctrl+S] Guardar  [Esc] Salir"
        }
        Focus::Field(field) if field.is_multiline() => {
            "[Enter] Nueva línea  [Tab] Siguiente  [Ctrl+S] Guardar  [Esc] Salir"
        }
        Focus::Field(_) => "[Enter] Guardar  [Tab] Siguiente  [F2/F3] Salida/Retorno  [Esc] Salir",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
