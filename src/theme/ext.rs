use std::sync::LazyLock;

use gpui::{App, Rgba, SharedString};

use crate::theme::{
    ColorSchemePreference, ColorToken, FontDescriptor, FontOverride, FontRole, Mode, ThemeError,
    ThemeOverride, ThemeStore,
};

/// Answers reads made before [`crate::init`] installs a store.
static FALLBACK_STORE: LazyLock<ThemeStore> = LazyLock::new(ThemeStore::default);

/// Extension trait for reading and configuring the global theme store.
pub trait ThemeExt {
    /// Gets an immutable reference to the theme store.
    fn theme_store(&self) -> &ThemeStore;

    /// Replaces the theme store.
    fn set_theme_store(&mut self, store: ThemeStore);

    /// Replaces the color override for `mode`.
    fn set_theme_override(&mut self, mode: Mode, table: ThemeOverride);

    /// Replaces the font override.
    fn set_font_override(&mut self, table: FontOverride);

    fn reset_theme(&mut self, mode: Mode);

    fn reset_fonts(&mut self);

    /// Resolves a color under `mode`, or under the current mode when `None`.
    fn resolve_color(&self, token: ColorToken, mode: Option<Mode>)
    -> Result<SharedString, ThemeError>;

    fn resolve_rgba(&self, token: ColorToken, mode: Option<Mode>) -> Result<Rgba, ThemeError>;

    fn resolve_font(&self, role: FontRole) -> FontDescriptor;

    /// Pins the ambient mode, or hands it back to the platform with
    /// [`ColorSchemePreference::System`].
    fn set_color_scheme(&mut self, preference: ColorSchemePreference);

    fn color_scheme(&self) -> ColorSchemePreference;
}

impl ThemeExt for App {
    fn theme_store(&self) -> &ThemeStore {
        self.try_global::<ThemeStore>().unwrap_or(&*FALLBACK_STORE)
    }

    fn set_theme_store(&mut self, store: ThemeStore) {
        self.set_global(store);
        self.refresh_windows();
    }

    fn set_theme_override(&mut self, mode: Mode, table: ThemeOverride) {
        self.default_global::<ThemeStore>()
            .set_theme_override(mode, table);
        self.refresh_windows();
    }

    fn set_font_override(&mut self, table: FontOverride) {
        self.default_global::<ThemeStore>().set_font_override(table);
        self.refresh_windows();
    }

    fn reset_theme(&mut self, mode: Mode) {
        self.set_theme_override(mode, ThemeOverride::default());
    }

    fn reset_fonts(&mut self) {
        self.set_font_override(FontOverride::default());
    }

    fn resolve_color(
        &self,
        token: ColorToken,
        mode: Option<Mode>,
    ) -> Result<SharedString, ThemeError> {
        self.theme_store().resolve_color(token, mode, self)
    }

    fn resolve_rgba(&self, token: ColorToken, mode: Option<Mode>) -> Result<Rgba, ThemeError> {
        self.theme_store().resolve_rgba(token, mode, self)
    }

    fn resolve_font(&self, role: FontRole) -> FontDescriptor {
        self.theme_store().resolve_font(role)
    }

    fn set_color_scheme(&mut self, preference: ColorSchemePreference) {
        tracing::debug!(?preference, "setting color scheme");
        self.set_global(preference);
        self.refresh_windows();
    }

    fn color_scheme(&self) -> ColorSchemePreference {
        self.try_global::<ColorSchemePreference>()
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{BASE_DARK, BASE_FONTS, BASE_LIGHT, FontDescriptorOverride, ModeDetector};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_reads_before_init_use_builtin_tokens(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert_eq!(
                cx.resolve_color(ColorToken::TextPrimary, Some(Mode::Dark))
                    .unwrap(),
                BASE_DARK.get(ColorToken::TextPrimary).cloned().unwrap()
            );
            assert_eq!(&cx.resolve_font(FontRole::Regular), BASE_FONTS.get(FontRole::Regular));
        });
    }

    #[gpui::test]
    fn test_override_then_reset(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            cx.set_theme_override(
                Mode::Light,
                ThemeOverride::new().color(ColorToken::TextPrimary, "#ff0000"),
            );
            assert_eq!(
                cx.resolve_color(ColorToken::TextPrimary, Some(Mode::Light))
                    .unwrap(),
                SharedString::from("#ff0000")
            );

            cx.reset_theme(Mode::Light);
            assert_eq!(
                cx.resolve_color(ColorToken::TextPrimary, Some(Mode::Light))
                    .unwrap(),
                BASE_LIGHT.get(ColorToken::TextPrimary).cloned().unwrap()
            );
        });
    }

    #[gpui::test]
    fn test_override_before_init_installs_store(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme_override(
                Mode::Dark,
                ThemeOverride::new().color(ColorToken::Focus, "#00ff00"),
            );

            assert!(cx.has_global::<ThemeStore>());
            assert_eq!(cx.theme_store().theme_override(Mode::Dark).len(), 1);
        });
    }

    #[gpui::test]
    fn test_ambient_mode_follows_color_scheme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);
            assert_eq!(cx.color_scheme(), ColorSchemePreference::System);
            assert_eq!(cx.current_mode(), Mode::from(cx.window_appearance()));

            cx.set_color_scheme(ColorSchemePreference::Dark);
            assert_eq!(cx.current_mode(), Mode::Dark);
            assert_eq!(
                cx.resolve_color(ColorToken::Background, None).unwrap(),
                BASE_DARK.get(ColorToken::Background).cloned().unwrap()
            );

            cx.set_color_scheme(ColorSchemePreference::Light);
            assert_eq!(
                cx.resolve_color(ColorToken::Background, None).unwrap(),
                BASE_LIGHT.get(ColorToken::Background).cloned().unwrap()
            );
            assert_eq!(
                cx.resolve_color(ColorToken::Background, Some(Mode::Dark))
                    .unwrap(),
                BASE_DARK.get(ColorToken::Background).cloned().unwrap()
            );
        });
    }

    #[gpui::test]
    fn test_resolve_rgba(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);
            cx.set_theme_override(
                Mode::Light,
                ThemeOverride::new().color(ColorToken::TextInverse, "#ff000080"),
            );

            let rgba = cx
                .resolve_rgba(ColorToken::TextInverse, Some(Mode::Light))
                .unwrap();
            assert_eq!(rgba.r, 1.0);
            assert_eq!(rgba.g, 0.0);
            assert!((rgba.a - 128.0 / 255.0).abs() < f32::EPSILON);
        });
    }

    #[gpui::test]
    fn test_font_override_and_reset(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);
            cx.set_font_override(FontOverride::new().font(
                FontRole::SemiBold,
                FontDescriptorOverride::default().family("X").weight("600"),
            ));

            assert_eq!(
                cx.resolve_font(FontRole::SemiBold),
                FontDescriptor::new("X", "600")
            );
            assert_eq!(&cx.resolve_font(FontRole::Light), BASE_FONTS.get(FontRole::Light));

            cx.reset_fonts();
            assert_eq!(
                &cx.resolve_font(FontRole::SemiBold),
                BASE_FONTS.get(FontRole::SemiBold)
            );
        });
    }

    #[gpui::test]
    fn test_custom_store_reports_missing_tokens(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init_with_store(
                cx,
                ThemeStore::new(
                    crate::theme::ThemeTable::new().with(ColorToken::TextPrimary, "#000000"),
                    crate::theme::ThemeTable::new(),
                    (*BASE_FONTS).clone(),
                ),
            );

            assert!(
                cx.resolve_color(ColorToken::TextPrimary, Some(Mode::Light))
                    .is_ok()
            );
            assert!(matches!(
                cx.resolve_color(ColorToken::TextPrimary, Some(Mode::Dark)),
                Err(ThemeError::MissingToken {
                    mode: Mode::Dark,
                    ..
                })
            ));
        });
    }
}
