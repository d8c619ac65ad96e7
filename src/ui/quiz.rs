use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::tier::Theme;

use super::switch::{SWITCH_HEIGHT, SwitchWidget};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let snapshot = app.snapshot();
    let theme = snapshot.tier.theme();

    paint_background(frame.buffer_mut(), area, &theme);

    let rows = engine.row_count();
    let constraints = [Constraint::Length(3)]
        .into_iter()
        .chain((0..rows).map(|_| Constraint::Length(SWITCH_HEIGHT)))
        .chain([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
    let chunks = Layout::vertical(constraints)
        .horizontal_margin(4)
        .vertical_margin(1)
        .split(area);

    render_question(frame, chunks[0], engine.question());

    for (row, control) in engine.controls().iter().enumerate() {
        let widget = SwitchWidget::new(control, theme.accent).focused(row == app.focused_row());
        frame.render_widget(widget, chunks[1 + row]);
    }

    render_verdict(frame, chunks[1 + rows], snapshot.locked);
    render_controls(frame, chunks[3 + rows], snapshot.locked);
}

/// Fill `area` with a vertical gradient between the theme's two background colours.
fn paint_background(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let span = area.height.saturating_sub(1).max(1);
    for offset in 0..area.height {
        let color = blend(
            theme.background_top,
            theme.background_bottom,
            f64::from(offset) / f64::from(span),
        );
        let line = Rect::new(area.x, area.y + offset, area.width, 1);
        buf.set_style(line, Style::default().bg(color));
    }
}

fn blend(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

fn render_question(frame: &mut Frame, area: Rect, question: &str) {
    let widget = Paragraph::new(question)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn verdict(locked: bool) -> &'static str {
    if locked {
        "The answer is correct!"
    } else {
        "The answer is incorrect."
    }
}

fn render_verdict(frame: &mut Frame, area: Rect, locked: bool) {
    let mut widget = Paragraph::new(verdict(locked))
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    if locked {
        widget = widget.underlined();
    }
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, locked: bool) {
    let hint = if locked {
        "q quit"
    } else {
        "j/k row  ·  h/l or 1-9 option  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::White);
    frame.render_widget(widget, area);
}
