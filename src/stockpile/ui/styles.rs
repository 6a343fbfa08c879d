use crate::commands::{CmdMessage, MessageLevel};
use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub banner: Style,
    pub heading: Style,
    pub danger_heading: Style,
    pub label: Style,
    pub selected: Style,
    pub table_header: Style,
    pub border: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Theme {
    pub fn message(&self, message: &CmdMessage) -> String {
        let style = match message.level {
            MessageLevel::Info => &self.info,
            MessageLevel::Success => &self.success,
            MessageLevel::Warning => &self.warning,
            MessageLevel::Error => &self.error,
        };
        style.apply_to(&message.content).to_string()
    }
}

pub static STOCK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().bold().cyan(),
    heading: Style::new().bold(),
    danger_heading: Style::new().bold().red(),
    label: Style::new().bold(),
    selected: Style::new().cyan(),
    table_header: Style::new().bold(),
    border: Style::new().dim(),
    info: Style::new().dim(),
    success: Style::new().bold().green(),
    warning: Style::new().bold().yellow(),
    error: Style::new().bold().red(),
});
