use serde::Deserialize;

use super::{OptionGroup, SwitchOption};

/// Everything a quiz screen needs, supplied once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    pub question: String,
    /// One option group per row.
    pub options: Vec<OptionGroup>,
    /// Expected value for each row, in row order.
    pub answers: Vec<String>,
}

impl QuizConfig {
    /// The built-in demo: four rows about the animal cell.
    pub fn animal_cell() -> Self {
        let row = |pairs: [(&str, &str); 3]| -> OptionGroup {
            pairs
                .into_iter()
                .map(|(label, value)| SwitchOption::new(label, value))
                .collect()
        };

        Self {
            question: "The animal cell contains".to_string(),
            options: vec![
                row([
                    ("Cell wall", "cell_wall"),
                    ("Ribosomes", "ribosomes"),
                    ("Option 3", "option_3"),
                ]),
                row([
                    ("Cytoplasm", "cytoplasm"),
                    ("Chloroplast", "chloroplast"),
                    ("Option 3", "option_3"),
                ]),
                row([
                    ("Partially permeable membrane", "partially_permeable_membrane"),
                    ("Impermeable membrane", "impermeable_membrane"),
                    ("Option 3", "option_3"),
                ]),
                row([
                    ("Cellulose", "cellulose"),
                    ("Mitochondria", "mitochondria"),
                    ("Option 3", "option_3"),
                ]),
            ],
            answers: vec![
                "ribosomes".to_string(),
                "cytoplasm".to_string(),
                "partially_permeable_membrane".to_string(),
                "mitochondria".to_string(),
            ],
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::animal_cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_cell_shape() {
        let config = QuizConfig::animal_cell();
        assert_eq!(config.options.len(), 4);
        assert_eq!(config.answers.len(), 4);
        assert!(config.options.iter().all(|group| group.len() == 3));

        // Every answer is one of its row's values.
        for (group, answer) in config.options.iter().zip(&config.answers) {
            assert!(group.iter().any(|option| &option.value == answer));
        }
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "question": "Pick",
            "options": [[{"label": "A", "value": "a"}, {"label": "B", "value": "b"}]],
            "answers": ["b"]
        }"#;
        let config: QuizConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.question, "Pick");
        assert_eq!(config.options[0][1], SwitchOption::new("B", "b"));
        assert_eq!(config.answers, vec!["b".to_string()]);
    }
}
