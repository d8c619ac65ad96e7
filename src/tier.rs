use ratatui::style::Color;

/// How close the current selection is to the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// Fewer than half of the rows match.
    Baseline,
    /// At least half of the rows match.
    Majority,
    /// Every row matches. Terminal: the quiz locks.
    AllCorrect,
}

/// Colours used to paint the quiz for a given tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background_top: Color,
    pub background_bottom: Color,
    /// Text colour of the selected option.
    pub accent: Color,
}

const BASELINE: Theme = Theme {
    background_top: Color::Rgb(0xF1, 0xB4, 0x96),
    background_bottom: Color::Rgb(0xEA, 0x80, 0x6A),
    accent: Color::Rgb(0xE4, 0x79, 0x58),
};

const MAJORITY: Theme = Theme {
    background_top: Color::Rgb(0xF6, 0xB8, 0x68),
    background_bottom: Color::Rgb(0xEE, 0x6B, 0x2D),
    accent: Color::Rgb(0x9F, 0x93, 0x8B),
};

const ALL_CORRECT: Theme = Theme {
    background_top: Color::Rgb(0x76, 0xE0, 0xC2),
    background_bottom: Color::Rgb(0x59, 0xCA, 0xDA),
    accent: Color::Rgb(0x4C, 0xAD, 0x94),
};

impl ScoreTier {
    /// Derive the tier from the number of matching rows.
    ///
    /// `AllCorrect` takes precedence over `Majority`.
    pub fn from_matches(matches: usize, total: usize) -> Self {
        if matches == total {
            Self::AllCorrect
        } else if matches as f64 / total as f64 >= 0.5 {
            Self::Majority
        } else {
            Self::Baseline
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Baseline => BASELINE,
            Self::Majority => MAJORITY,
            Self::AllCorrect => ALL_CORRECT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_matches() {
        assert_eq!(ScoreTier::from_matches(4, 4), ScoreTier::AllCorrect);
        assert_eq!(ScoreTier::from_matches(3, 4), ScoreTier::Majority);
        assert_eq!(ScoreTier::from_matches(2, 4), ScoreTier::Majority);
        assert_eq!(ScoreTier::from_matches(1, 4), ScoreTier::Baseline);
        assert_eq!(ScoreTier::from_matches(0, 4), ScoreTier::Baseline);
        assert_eq!(ScoreTier::from_matches(1, 3), ScoreTier::Baseline);
        assert_eq!(ScoreTier::from_matches(1, 1), ScoreTier::AllCorrect);
    }

    #[test]
    fn test_themes_are_distinct() {
        let themes = [
            ScoreTier::Baseline.theme(),
            ScoreTier::Majority.theme(),
            ScoreTier::AllCorrect.theme(),
        ];
        assert_ne!(themes[0], themes[1]);
        assert_ne!(themes[1], themes[2]);
        assert_eq!(themes[2].accent, Color::Rgb(0x4C, 0xAD, 0x94));
    }
}
