//! Runtime configuration supplied by the embedding application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::TextDirection;

/// Languages whose content is laid out right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ug", "ur"];

/// Process-level settings consulted by widgets at build and reload time.
///
/// ```
/// use swiper_indicator_core::RuntimeConfig;
///
/// let config = RuntimeConfig::from_toml_str(r#"
///     config_change_perform = true
///     language = "ar"
/// "#).unwrap();
/// assert!(config.config_change_perform);
/// assert_eq!(config.density, 1.0);
/// assert!(config.text_direction().is_rtl());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Whether style setters register live resource reload bindings.
    pub config_change_perform: bool,
    /// Display density, pixels per vp.
    pub density: f32,
    /// User font scale applied on top of density for fp units.
    pub font_scale: f32,
    /// Content language tag, e.g. `"en"` or `"ar-EG"`.
    pub language: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            config_change_perform: false,
            density: 1.0,
            font_scale: 1.0,
            language: "en".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Whether the configured language is written right-to-left.
    pub fn is_rtl_language(&self) -> bool {
        let primary = self
            .language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        RTL_LANGUAGES.contains(&primary.as_str())
    }

    /// Layout direction implied by the configured language.
    pub fn text_direction(&self) -> TextDirection {
        if self.is_rtl_language() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}
