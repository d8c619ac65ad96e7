mod loader;

pub use loader::{LoadError, load_quiz_config, parse_quiz_config};
