use std::{fs, path::Path};

use anyhow::Context as _;
use gpui::App;
use serde::{Deserialize, Serialize};

use crate::theme::{ColorSchemePreference, FontOverride, Mode, ThemeError, ThemeExt, ThemeOverride};

/// Theme settings a host application ships or lets users edit.
///
/// ```json
/// {
///     "colorScheme": "dark",
///     "light": { "textPrimary": "#000000" },
///     "dark": { "textPrimary": "#ffffff" },
///     "fonts": { "semiBold": { "family": "Inter", "weight": "600" } }
/// }
/// ```
///
/// Every section is optional. Token names, font roles and values are checked
/// while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    pub color_scheme: ColorSchemePreference,
    pub light: ThemeOverride,
    pub dark: ThemeOverride,
    pub fonts: FontOverride,
}

impl ThemeConfig {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read theme config {}", path.display()))?;

        Self::from_json(contents)
            .with_context(|| format!("invalid theme config {}", path.display()))
    }

    pub fn theme_override(&self, mode: Mode) -> &ThemeOverride {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Replaces every override and the color scheme. Sections missing from
    /// the config reset what they would have set.
    pub fn apply(self, cx: &mut App) {
        tracing::debug!(
            color_scheme = ?self.color_scheme,
            light = self.light.len(),
            dark = self.dark.len(),
            fonts = self.fonts.len(),
            "applying theme config"
        );

        cx.set_color_scheme(self.color_scheme);
        cx.set_theme_override(Mode::Light, self.light);
        cx.set_theme_override(Mode::Dark, self.dark);
        cx.set_font_override(self.fonts);
    }
}
