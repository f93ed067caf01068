#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use enum_assoc::Assoc;
use gpui::{FontWeight, SharedString};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::deserializers::{color_entries, de_font_weight, de_non_empty, parse_font_weight};
use crate::ThemeError;

macro_rules! color_tokens {
    ( $( $(#[$meta:meta])* $variant:ident => $name:literal ),+ $(,)? ) => {
        /// Semantic color roles of the design system.
        ///
        /// The set is closed: components can only ask for colors the base
        /// themes define, and names coming from data are checked with
        /// [`str::parse`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ColorToken {
            $(
                $(#[$meta])*
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl ColorToken {
            pub const ALL: &'static [ColorToken] = &[$(ColorToken::$variant),+];

            /// The token's name as it appears in theme data.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorToken::$variant => $name,)+
                }
            }
        }
    };
}

color_tokens! {
    /// Default page background.
    Background => "background",
    BackgroundHover => "backgroundHover",
    BackgroundActive => "backgroundActive",
    BackgroundSelected => "backgroundSelected",
    BackgroundInverse => "backgroundInverse",
    BackgroundBrand => "backgroundBrand",
    /// First container layer on top of `background`.
    Layer01 => "layer01",
    Layer02 => "layer02",
    LayerHover01 => "layerHover01",
    LayerSelected01 => "layerSelected01",
    Field01 => "field01",
    Field02 => "field02",
    /// Subtle dividers on the base background.
    BorderSubtle00 => "borderSubtle00",
    BorderSubtle01 => "borderSubtle01",
    BorderStrong01 => "borderStrong01",
    BorderInteractive => "borderInteractive",
    BorderDisabled => "borderDisabled",
    TextPrimary => "textPrimary",
    TextSecondary => "textSecondary",
    TextPlaceholder => "textPlaceholder",
    TextHelper => "textHelper",
    TextError => "textError",
    /// Text drawn on `backgroundInverse`.
    TextInverse => "textInverse",
    TextOnColor => "textOnColor",
    TextDisabled => "textDisabled",
    LinkPrimary => "linkPrimary",
    IconPrimary => "iconPrimary",
    IconSecondary => "iconSecondary",
    IconInverse => "iconInverse",
    IconOnColor => "iconOnColor",
    IconDisabled => "iconDisabled",
    SupportError => "supportError",
    SupportSuccess => "supportSuccess",
    SupportWarning => "supportWarning",
    SupportInfo => "supportInfo",
    Focus => "focus",
    FocusInverse => "focusInverse",
    Interactive => "interactive",
    ButtonPrimary => "buttonPrimary",
    ButtonPrimaryHover => "buttonPrimaryHover",
    ButtonPrimaryActive => "buttonPrimaryActive",
    ButtonSecondary => "buttonSecondary",
    ButtonTertiary => "buttonTertiary",
    ButtonDanger => "buttonDanger",
    ButtonDisabled => "buttonDisabled",
    /// Scrim behind modals.
    Overlay => "overlay",
    ToggleOff => "toggleOff",
    SkeletonBackground => "skeletonBackground",
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|token| token.name() == s)
            .ok_or_else(|| ThemeError::UnknownToken(SharedString::from(s.to_owned())))
    }
}

/// Font usage categories.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
    #[assoc(name = "light")]
    Light,
    #[assoc(name = "regular")]
    Regular,
    #[assoc(name = "semiBold")]
    SemiBold,
    #[assoc(name = "monoRegular")]
    MonoRegular,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [
        FontRole::Light,
        FontRole::Regular,
        FontRole::SemiBold,
        FontRole::MonoRegular,
    ];
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| ThemeError::UnknownFontRole(SharedString::from(s.to_owned())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    #[serde(deserialize_with = "de_non_empty")]
    pub family: SharedString,
    /// CSS weight, e.g. `"600"` or `"bold"`.
    #[serde(deserialize_with = "de_font_weight")]
    pub weight: SharedString,
}

impl FontDescriptor {
    pub fn new(family: impl Into<SharedString>, weight: impl Into<SharedString>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }

    /// The weight as a gpui [`FontWeight`], or `None` if it isn't a CSS weight.
    pub fn font_weight(&self) -> Option<FontWeight> {
        parse_font_weight(&self.weight)
    }
}

/// The base font for every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FontTable {
    pub light: FontDescriptor,
    pub regular: FontDescriptor,
    pub semi_bold: FontDescriptor,
    pub mono_regular: FontDescriptor,
}

impl FontTable {
    pub fn get(&self, role: FontRole) -> &FontDescriptor {
        match role {
            FontRole::Light => &self.light,
            FontRole::Regular => &self.regular,
            FontRole::SemiBold => &self.semi_bold,
            FontRole::MonoRegular => &self.mono_regular,
        }
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }
}

/// Colors for one mode, keyed by token.
///
/// Tables built from data have every value checked to be a hex color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, String>")]
pub struct ThemeTable(IndexMap<ColorToken, SharedString>);

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Adds or replaces a color. Values aren't checked here; see [`ThemeTable::try_from`].
    pub fn with(mut self, token: ColorToken, value: impl Into<SharedString>) -> Self {
        self.0.insert(token, value.into());
        self
    }

    pub fn get(&self, token: ColorToken) -> Option<&SharedString> {
        self.0.get(&token)
    }

    pub fn contains(&self, token: ColorToken) -> bool {
        self.0.contains_key(&token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColorToken, &SharedString)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, token: ColorToken, value: SharedString) {
        self.0.insert(token, value);
    }
}

impl TryFrom<IndexMap<String, String>> for ThemeTable {
    type Error = ThemeError;

    fn try_from(entries: IndexMap<String, String>) -> Result<Self, Self::Error> {
        color_entries(entries).map(Self)
    }
}

impl FromIterator<(ColorToken, SharedString)> for ThemeTable {
    fn from_iter<T: IntoIterator<Item = (ColorToken, SharedString)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

macro_rules! generate_builtin_tables {
    ( $( [$path:literal, $name:ident : $ty:ty] ),+ $(,)? ) => {
        $(
            pub static $name: Builtin<$ty> =
                Builtin::new(|| <$ty>::from_json(include_str!($path)).unwrap());
        )+
    };
}

/// Compiled-in design tokens, parsed on first access.
pub struct Builtin<T: 'static>(LazyLock<T>);

impl<T> Builtin<T> {
    #[inline(always)]
    const fn new(f: fn() -> T) -> Self {
        Self(LazyLock::new(f))
    }
}

impl<T> Deref for Builtin<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AsRef<T> for Builtin<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

generate_builtin_tables!(
    ["../themes/light.json", BASE_LIGHT: ThemeTable],
    ["../themes/dark.json", BASE_DARK: ThemeTable],
    ["../themes/fonts.json", BASE_FONTS: FontTable],
);
