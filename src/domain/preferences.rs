use serde::{Deserialize, Serialize};

use super::locale::Locale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// User choices that survive restarts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// `None` until the user picks a language explicitly.
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn locale_serializes_as_code() {
        let prefs = Preferences {
            locale: Some(Locale::Es),
            theme: Theme::Light,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"locale":"es","theme":"Light"}"#);
    }
}
