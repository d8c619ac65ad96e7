mod quiz;
mod switch;

use ratatui::prelude::*;

use crate::app::App;

pub use switch::{SWITCH_HEIGHT, SwitchWidget};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    quiz::render(frame, area, app);
}
