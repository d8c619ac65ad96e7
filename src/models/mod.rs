mod config;
mod option;

pub use config::QuizConfig;
pub use option::{OptionGroup, SwitchOption};
