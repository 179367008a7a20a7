use std::fmt;

/// A theme the settings screen offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl ThemeChoice {
    /// Every choice, in the order the selector lists them.
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        }
    }

    /// Value of the `<option>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::System => "system",
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_light_dark_system() {
        let labels: Vec<_> = ThemeChoice::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Light", "Dark", "System"]);
    }

    #[test]
    fn option_values_are_lowercase_labels() {
        for choice in ThemeChoice::ALL {
            assert_eq!(choice.as_str(), choice.label().to_ascii_lowercase());
        }
    }
}
