use serde::Deserialize;

/// One selectable choice within a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SwitchOption {
    /// Text shown on the switch segment.
    pub label: String,
    /// Identifier compared against the answer key; unique within its group.
    pub value: String,
}

impl SwitchOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered, mutually exclusive options forming one row.
pub type OptionGroup = Vec<SwitchOption>;
