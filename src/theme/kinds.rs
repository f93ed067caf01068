#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Rgba};

use crate::theme::{ColorToken, FontDescriptor, FontRole, Mode, ThemeError, ThemeExt};

macro_rules! impl_color_kind {
    ( $( $kind:ty ),+ $(,)? ) => {
        $(
            impl $kind {
                /// Resolves the color under the current mode.
                pub fn resolve(&self, cx: &App) -> Result<Rgba, ThemeError> {
                    cx.resolve_rgba(self.token(), None)
                }

                /// Resolves the color under `mode`, whatever the current mode is.
                pub fn resolve_in(&self, mode: Mode, cx: &App) -> Result<Rgba, ThemeError> {
                    cx.resolve_rgba(self.token(), Some(mode))
                }
            }
        )+
    };
}

/// Text color roles.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
pub enum ThemeTextKind {
    #[assoc(token = ColorToken::TextPrimary)]
    Primary,
    #[assoc(token = ColorToken::TextSecondary)]
    Secondary,
    #[assoc(token = ColorToken::TextPlaceholder)]
    Placeholder,
    #[assoc(token = ColorToken::TextHelper)]
    Helper,
    #[assoc(token = ColorToken::TextError)]
    Error,
    /// Text on inverse backgrounds, e.g. tooltips.
    #[assoc(token = ColorToken::TextInverse)]
    Inverse,
    /// Text on brand or status colors, e.g. primary buttons.
    #[assoc(token = ColorToken::TextOnColor)]
    OnColor,
    #[assoc(token = ColorToken::TextDisabled)]
    Disabled,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
pub enum ThemeIconKind {
    #[assoc(token = ColorToken::IconPrimary)]
    Primary,
    #[assoc(token = ColorToken::IconSecondary)]
    Secondary,
    #[assoc(token = ColorToken::IconInverse)]
    Inverse,
    #[assoc(token = ColorToken::IconOnColor)]
    OnColor,
    #[assoc(token = ColorToken::IconDisabled)]
    Disabled,
}

/// Surfaces for stacking containers.
///
/// `next()` gives the layer to paint a nested container with. Past
/// `Layer02` the stack alternates back to `Layer01`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
#[func(pub fn hover_token(&self) -> ColorToken)]
#[func(pub fn next(&self) -> ThemeLayerKind)]
pub enum ThemeLayerKind {
    #[assoc(token = ColorToken::Background)]
    #[assoc(hover_token = ColorToken::BackgroundHover)]
    #[assoc(next = ThemeLayerKind::Layer01)]
    Background,
    #[assoc(token = ColorToken::Layer01)]
    #[assoc(hover_token = ColorToken::LayerHover01)]
    #[assoc(next = ThemeLayerKind::Layer02)]
    Layer01,
    #[assoc(token = ColorToken::Layer02)]
    #[assoc(hover_token = ColorToken::LayerHover01)]
    #[assoc(next = ThemeLayerKind::Layer01)]
    Layer02,
}

impl ThemeLayerKind {
    pub fn resolve_hover(&self, cx: &App) -> Result<Rgba, ThemeError> {
        cx.resolve_rgba(self.hover_token(), None)
    }
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
pub enum ThemeBorderKind {
    #[assoc(token = ColorToken::BorderSubtle00)]
    Subtle00,
    #[assoc(token = ColorToken::BorderSubtle01)]
    Subtle01,
    #[assoc(token = ColorToken::BorderStrong01)]
    Strong,
    #[assoc(token = ColorToken::BorderInteractive)]
    Interactive,
    #[assoc(token = ColorToken::BorderDisabled)]
    Disabled,
}

/// Status colors for notifications, validation and tags.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
pub enum ThemeSupportKind {
    #[assoc(token = ColorToken::SupportError)]
    Error,
    #[assoc(token = ColorToken::SupportSuccess)]
    Success,
    #[assoc(token = ColorToken::SupportWarning)]
    Warning,
    #[assoc(token = ColorToken::SupportInfo)]
    Info,
}

/// Button fills. Every kind paints its label with [`ThemeTextKind::OnColor`]
/// except `Tertiary`, which is an outline and uses its own fill for text.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> ColorToken)]
#[func(pub fn label_token(&self) -> ColorToken)]
pub enum ThemeButtonKind {
    #[assoc(token = ColorToken::ButtonPrimary)]
    #[assoc(label_token = ColorToken::TextOnColor)]
    Primary,
    #[assoc(token = ColorToken::ButtonSecondary)]
    #[assoc(label_token = ColorToken::TextOnColor)]
    Secondary,
    #[assoc(token = ColorToken::ButtonTertiary)]
    #[assoc(label_token = ColorToken::ButtonTertiary)]
    Tertiary,
    #[assoc(token = ColorToken::ButtonDanger)]
    #[assoc(label_token = ColorToken::TextOnColor)]
    Danger,
    #[assoc(token = ColorToken::ButtonDisabled)]
    #[assoc(label_token = ColorToken::TextOnColor)]
    Disabled,
}

impl ThemeButtonKind {
    pub fn resolve_label(&self, cx: &App) -> Result<Rgba, ThemeError> {
        cx.resolve_rgba(self.label_token(), None)
    }
}

impl_color_kind!(
    ThemeTextKind,
    ThemeIconKind,
    ThemeLayerKind,
    ThemeBorderKind,
    ThemeSupportKind,
    ThemeButtonKind,
);

/// Type styles and the font role each one is set in.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn role(&self) -> FontRole)]
pub enum ThemeTypeKind {
    #[assoc(role = FontRole::SemiBold)]
    Heading,
    #[assoc(role = FontRole::Regular)]
    Body,
    #[assoc(role = FontRole::SemiBold)]
    Label,
    #[assoc(role = FontRole::Light)]
    Caption,
    #[assoc(role = FontRole::MonoRegular)]
    Code,
}

impl ThemeTypeKind {
    pub fn resolve(&self, cx: &App) -> FontDescriptor {
        cx.resolve_font(self.role())
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{
        BASE_DARK, BASE_FONTS, BASE_LIGHT, ColorSchemePreference, FontDescriptorOverride,
        FontOverride, ThemeOverride, parse_color,
    };
    use gpui::TestAppContext;

    fn base(mode: Mode, token: ColorToken) -> Rgba {
        let table = match mode {
            Mode::Light => &*BASE_LIGHT,
            Mode::Dark => &*BASE_DARK,
        };
        parse_color(table.get(token).unwrap()).unwrap()
    }

    #[gpui::test]
    fn test_theme_text_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            for kind in [
                ThemeTextKind::Primary,
                ThemeTextKind::Secondary,
                ThemeTextKind::Placeholder,
                ThemeTextKind::Helper,
                ThemeTextKind::Error,
                ThemeTextKind::Inverse,
                ThemeTextKind::OnColor,
                ThemeTextKind::Disabled,
            ] {
                assert!(kind.resolve(cx).is_ok());
            }
        });
    }

    #[gpui::test]
    fn test_theme_color_kinds_resolve_in_both_modes(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            let tokens = [
                ThemeIconKind::Primary.token(),
                ThemeIconKind::Disabled.token(),
                ThemeBorderKind::Subtle00.token(),
                ThemeBorderKind::Interactive.token(),
                ThemeSupportKind::Warning.token(),
                ThemeButtonKind::Danger.token(),
            ];

            for mode in Mode::ALL {
                for token in tokens {
                    assert_eq!(cx.resolve_rgba(token, Some(mode)).unwrap(), base(mode, token));
                }
            }
        });
    }

    #[gpui::test]
    fn test_theme_kind_follows_pinned_mode(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            cx.set_color_scheme(ColorSchemePreference::Dark);
            assert_eq!(
                ThemeTextKind::Primary.resolve(cx).unwrap(),
                base(Mode::Dark, ColorToken::TextPrimary)
            );
            assert_eq!(
                ThemeTextKind::Primary.resolve_in(Mode::Light, cx).unwrap(),
                base(Mode::Light, ColorToken::TextPrimary)
            );
        });
    }

    #[gpui::test]
    fn test_theme_kind_sees_overrides(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);
            cx.set_theme_override(
                Mode::Light,
                ThemeOverride::new().color(ColorToken::BorderSubtle00, "#ff0000"),
            );

            assert_eq!(
                ThemeBorderKind::Subtle00.resolve_in(Mode::Light, cx).unwrap(),
                parse_color("#ff0000").unwrap()
            );
            assert_eq!(
                ThemeBorderKind::Subtle00.resolve_in(Mode::Dark, cx).unwrap(),
                base(Mode::Dark, ColorToken::BorderSubtle00)
            );
        });
    }

    #[gpui::test]
    fn test_theme_layer_kind_next(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            assert_eq!(ThemeLayerKind::Background.next(), ThemeLayerKind::Layer01);
            assert_eq!(ThemeLayerKind::Layer01.next(), ThemeLayerKind::Layer02);
            assert_eq!(ThemeLayerKind::Layer02.next(), ThemeLayerKind::Layer01);

            assert!(ThemeLayerKind::Layer01.resolve_hover(cx).is_ok());
        });
    }

    #[gpui::test]
    fn test_theme_button_kind_labels(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);
            cx.set_color_scheme(ColorSchemePreference::Light);

            assert_eq!(
                ThemeButtonKind::Primary.resolve_label(cx).unwrap(),
                base(Mode::Light, ColorToken::TextOnColor)
            );
            assert_eq!(
                ThemeButtonKind::Tertiary.resolve_label(cx).unwrap(),
                ThemeButtonKind::Tertiary.resolve(cx).unwrap()
            );
        });
    }

    #[gpui::test]
    fn test_theme_type_kind(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::init(cx);

            assert_eq!(&ThemeTypeKind::Body.resolve(cx), BASE_FONTS.get(FontRole::Regular));
            assert_eq!(
                &ThemeTypeKind::Code.resolve(cx),
                BASE_FONTS.get(FontRole::MonoRegular)
            );

            cx.set_font_override(FontOverride::new().font(
                FontRole::SemiBold,
                FontDescriptorOverride::default().weight("700"),
            ));
            let heading = ThemeTypeKind::Heading.resolve(cx);
            assert_eq!(heading.family, BASE_FONTS.semi_bold.family);
            assert_eq!(heading.font_weight(), Some(gpui::FontWeight::BOLD));
        });
    }
}
