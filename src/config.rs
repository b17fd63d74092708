//! UI Configuration
//!
//! Defaults, overridable from the page query string:
//! `?variant=inline|split&log=debug&title=My%20list`.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

/// Which renderer draws the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Input and rows split into keyed sub-views
    #[default]
    Split,
    /// One component, draft text in the shared store
    Inline,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Split, Variant::Inline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Split => "split",
            Variant::Inline => "inline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Split => "Split views",
            Variant::Inline => "Single component",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub title: String,
    pub placeholder: String,
    pub variant: Variant,
    pub log_level: LevelFilter,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
            placeholder: "What needs to be done?".to_string(),
            variant: Variant::default(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

impl UiConfig {
    /// Read overrides from `window.location.search`
    pub fn from_location() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&query)
    }

    /// Apply known `key=value` pairs; anything unrecognised keeps the default
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&raw.replace('+', " ")).decode_utf8_lossy().into_owned();
            match key {
                "variant" => {
                    if let Some(variant) = Variant::parse(&value) {
                        config.variant = variant;
                    }
                }
                "log" => {
                    if let Ok(level) = value.parse::<LevelFilter>() {
                        config.log_level = level;
                    }
                }
                "title" if !value.trim().is_empty() => config.title = value,
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(UiConfig::from_query(""), UiConfig::default());
        assert_eq!(UiConfig::from_query("?"), UiConfig::default());
    }

    #[test]
    fn test_query_overrides() {
        let config = UiConfig::from_query("?variant=inline&log=trace&title=My%20list");
        assert_eq!(config.variant, Variant::Inline);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.title, "My list");
    }

    #[test]
    fn test_unknown_values_ignored() {
        let config = UiConfig::from_query("variant=grid&log=loud&title=&color=red");
        let defaults = UiConfig::default();
        assert_eq!(config.variant, defaults.variant);
        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.title, defaults.title);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(Variant::parse("SPLIT"), Some(Variant::Split));
        assert_eq!(Variant::parse("inline"), Some(Variant::Inline));
        assert_eq!(Variant::parse("memo"), None);
    }
}
