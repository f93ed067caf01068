use std::sync::Arc;

use gpui::{Global, Rgba, SharedString};

use super::deserializers::parse_color;
use crate::{
    BASE_DARK, BASE_FONTS, BASE_LIGHT, ColorToken, FontDescriptor, FontOverride, FontRole,
    FontTable, Mode, ModeDetector, ThemeError, ThemeOverride, ThemeTable,
};

#[derive(Debug, Clone, Default)]
struct PerMode<T> {
    light: T,
    dark: T,
}

impl<T> PerMode<T> {
    fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    fn get_mut(&mut self, mode: Mode) -> &mut T {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}

/// Base tables plus the host's overrides, for both modes and for fonts.
///
/// Overrides are only ever replaced as a whole; each setter call discards
/// whatever the previous call installed.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    base: PerMode<Arc<ThemeTable>>,
    overrides: PerMode<Arc<ThemeOverride>>,
    fonts: Arc<FontTable>,
    font_overrides: Arc<FontOverride>,
}

impl Global for ThemeStore {}

impl Default for ThemeStore {
    /// A store over the compiled-in design tokens.
    fn default() -> Self {
        Self::new(
            (*BASE_LIGHT).clone(),
            (*BASE_DARK).clone(),
            (*BASE_FONTS).clone(),
        )
    }
}

impl ThemeStore {
    pub fn new(light: ThemeTable, dark: ThemeTable, fonts: FontTable) -> Self {
        Self {
            base: PerMode {
                light: Arc::new(light),
                dark: Arc::new(dark),
            },
            overrides: PerMode::default(),
            fonts: Arc::new(fonts),
            font_overrides: Arc::default(),
        }
    }

    pub fn set_theme_override(&mut self, mode: Mode, table: ThemeOverride) {
        tracing::debug!(%mode, tokens = table.len(), "replacing theme override");
        *self.overrides.get_mut(mode) = Arc::new(table);
    }

    pub fn set_font_override(&mut self, table: FontOverride) {
        tracing::debug!(roles = table.len(), "replacing font override");
        self.font_overrides = Arc::new(table);
    }

    pub fn reset_theme(&mut self, mode: Mode) {
        self.set_theme_override(mode, ThemeOverride::default());
    }

    pub fn reset_fonts(&mut self) {
        self.set_font_override(FontOverride::default());
    }

    pub fn base_table(&self, mode: Mode) -> &ThemeTable {
        self.base.get(mode)
    }

    pub fn theme_override(&self, mode: Mode) -> &ThemeOverride {
        self.overrides.get(mode)
    }

    pub fn base_fonts(&self) -> &FontTable {
        &self.fonts
    }

    pub fn font_override(&self) -> &FontOverride {
        &self.font_overrides
    }

    /// Resolves `token` under an explicit mode: the override wins, then the
    /// base table.
    pub fn color(&self, token: ColorToken, mode: Mode) -> Result<SharedString, ThemeError> {
        self.overrides
            .get(mode)
            .get(token)
            .or_else(|| self.base.get(mode).get(token))
            .cloned()
            .ok_or_else(|| missing_token(token.name().into(), mode))
    }

    /// Resolves `token` under `mode`, or under the host's current mode when
    /// `mode` is `None`.
    pub fn resolve_color<H>(
        &self,
        token: ColorToken,
        mode: Option<Mode>,
        host: &H,
    ) -> Result<SharedString, ThemeError>
    where
        H: ModeDetector + ?Sized,
    {
        self.color(token, mode.unwrap_or_else(|| host.current_mode()))
    }

    /// Like [`ThemeStore::resolve_color`] for a token named at runtime. Names
    /// outside the token set are reported as missing.
    pub fn resolve_color_name<H>(
        &self,
        name: &str,
        mode: Option<Mode>,
        host: &H,
    ) -> Result<SharedString, ThemeError>
    where
        H: ModeDetector + ?Sized,
    {
        let mode = mode.unwrap_or_else(|| host.current_mode());

        match name.parse::<ColorToken>() {
            Ok(token) => self.color(token, mode),
            Err(_) => Err(missing_token(SharedString::from(name.to_owned()), mode)),
        }
    }

    pub fn resolve_rgba<H>(
        &self,
        token: ColorToken,
        mode: Option<Mode>,
        host: &H,
    ) -> Result<Rgba, ThemeError>
    where
        H: ModeDetector + ?Sized,
    {
        let value = self.resolve_color(token, mode, host)?;

        parse_color(&value).ok_or(ThemeError::InvalidColor { token, value })
    }

    /// The override entry for `role` merged over the base descriptor.
    pub fn resolve_font(&self, role: FontRole) -> FontDescriptor {
        let base = self.fonts.get(role);

        match self.font_overrides.get(role) {
            Some(entry) => entry.merge_onto(base),
            None => base.clone(),
        }
    }

    /// Every color that resolves under `mode`.
    pub fn effective_table(&self, mode: Mode) -> ThemeTable {
        let mut table = ThemeTable::clone(self.base.get(mode));

        for (token, value) in self.overrides.get(mode).iter() {
            table.insert(*token, value.clone());
        }

        table
    }
}

fn missing_token(token: SharedString, mode: Mode) -> ThemeError {
    tracing::error!(%token, %mode, "color token is not defined");
    ThemeError::MissingToken { token, mode }
}
