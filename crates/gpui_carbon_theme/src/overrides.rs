use gpui::SharedString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::deserializers::{
    color_entries, de_optional_font_weight, de_optional_non_empty, parse_color, parse_font_weight,
};
use crate::{ColorToken, FontDescriptor, FontRole, ThemeError};

/// Host-supplied colors laid over a base table.
///
/// Sparse: any subset of tokens. Keyed by [`ColorToken`], so names that the
/// design system doesn't define are rejected when the override is built from
/// strings or JSON rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, String>")]
pub struct ThemeOverride(IndexMap<ColorToken, SharedString>);

impl ThemeOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, token: ColorToken, value: impl Into<SharedString>) -> Self {
        self.0.insert(token, value.into());
        self
    }

    /// Builds an override from untyped pairs, checking token names and colors.
    pub fn try_from_pairs<K, V, I>(pairs: I) -> Result<Self, ThemeError>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect::<IndexMap<String, String>>();

        Self::try_from(entries)
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Checks every value parses as a color.
    pub fn validate(&self) -> Result<(), ThemeError> {
        match self.0.iter().find(|(_, value)| parse_color(value).is_none()) {
            Some((token, value)) => Err(ThemeError::InvalidColor {
                token: *token,
                value: value.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, token: ColorToken) -> Option<&SharedString> {
        self.0.get(&token)
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
}

impl TryFrom<IndexMap<String, String>> for ThemeOverride {
    type Error = ThemeError;

    fn try_from(entries: IndexMap<String, String>) -> Result<Self, Self::Error> {
        color_entries(entries).map(Self)
    }
}

impl FromIterator<(ColorToken, SharedString)> for ThemeOverride {
    fn from_iter<T: IntoIterator<Item = (ColorToken, SharedString)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A font override entry. Unset fields keep the base descriptor's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontDescriptorOverride {
    #[serde(
        default,
        deserialize_with = "de_optional_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub family: Option<SharedString>,
    #[serde(
        default,
        deserialize_with = "de_optional_font_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<SharedString>,
}

impl FontDescriptorOverride {
    pub fn family(mut self, family: impl Into<SharedString>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<SharedString>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Lays this entry over `base` field by field.
    pub fn merge_onto(&self, base: &FontDescriptor) -> FontDescriptor {
        FontDescriptor {
            family: self.family.clone().unwrap_or_else(|| base.family.clone()),
            weight: self.weight.clone().unwrap_or_else(|| base.weight.clone()),
        }
    }
}

impl From<FontDescriptor> for FontDescriptorOverride {
    fn from(descriptor: FontDescriptor) -> Self {
        Self {
            family: Some(descriptor.family),
            weight: Some(descriptor.weight),
        }
    }
}

/// Host-supplied fonts laid over the base font table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, FontDescriptorOverride>")]
pub struct FontOverride(IndexMap<FontRole, FontDescriptorOverride>);

impl FontOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, role: FontRole, descriptor: impl Into<FontDescriptorOverride>) -> Self {
        self.0.insert(role, descriptor.into());
        self
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Checks every weight that is set is a CSS weight.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (role, entry) in &self.0 {
            if let Some(weight) = &entry.weight
                && parse_font_weight(weight).is_none()
            {
                return Err(ThemeError::InvalidFontWeight {
                    role: *role,
                    value: weight.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn get(&self, role: FontRole) -> Option<&FontDescriptorOverride> {
        self.0.get(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FontRole, &FontDescriptorOverride)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<IndexMap<String, FontDescriptorOverride>> for FontOverride {
    type Error = ThemeError;

    fn try_from(entries: IndexMap<String, FontDescriptorOverride>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .map(|(name, entry)| Ok((name.parse::<FontRole>()?, entry)))
            .collect::<Result<_, ThemeError>>()
            .map(Self)
    }
}
