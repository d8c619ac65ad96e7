//! Terminal rendering of a [`SwitchControl`].

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::switch::SwitchControl;

/// Rows needed to draw one switch (border, labels, border).
pub const SWITCH_HEIGHT: u16 = 3;

/// One switch drawn as a rounded track with an equal-width segment per option.
pub struct SwitchWidget<'a> {
    control: &'a SwitchControl,
    accent: Color,
    focused: bool,
}

impl<'a> SwitchWidget<'a> {
    pub fn new(control: &'a SwitchControl, accent: Color) -> Self {
        Self {
            control,
            accent,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SwitchWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut base = Style::default().fg(Color::White);
        if self.control.is_disabled() {
            base = base.add_modifier(Modifier::DIM);
        }

        let border_style = if self.focused && !self.control.is_disabled() {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        buf.set_style(indicator_area(self.control, inner), Style::default().bg(Color::White));

        let segments = Layout::horizontal(
            self.control
                .options()
                .iter()
                .map(|_| Constraint::Ratio(1, self.control.len() as u32)),
        )
        .split(inner);

        for (index, (option, segment)) in self
            .control
            .options()
            .iter()
            .zip(segments.iter())
            .enumerate()
        {
            let style = if index == self.control.selected_index() {
                base.fg(self.accent).add_modifier(Modifier::BOLD)
            } else {
                base.add_modifier(Modifier::BOLD)
            };

            Paragraph::new(option.label.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .render(*segment, buf);
        }
    }
}

/// Cells covered by the selection indicator inside the track.
fn indicator_area(control: &SwitchControl, track: Rect) -> Rect {
    let width = f64::from(track.width);
    let x = (control.indicator_offset() * width).round() as u16;
    let indicator_width = (control.indicator_width() * width).round() as u16;

    Rect {
        x: track.x + x.min(track.width),
        y: track.y,
        width: indicator_width.min(track.width.saturating_sub(x)),
        height: track.height,
    }
}
