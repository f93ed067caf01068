use gpui::{FontWeight, Rgba, SharedString};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::{ColorToken, ThemeError};

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(value: &str) -> Option<Rgba> {
    if !value.starts_with('#') {
        return None;
    }

    Rgba::try_from(value).ok()
}

/// Parses a CSS font weight: `"normal"`, `"bold"` or a number from 1 to 1000.
pub fn parse_font_weight(value: &str) -> Option<FontWeight> {
    match value {
        "normal" => Some(FontWeight::NORMAL),
        "bold" => Some(FontWeight::BOLD),
        _ => match value.parse::<f32>() {
            Ok(weight) if (1.0..=1000.0).contains(&weight) => Some(FontWeight(weight)),
            _ => None,
        },
    }
}

pub(crate) fn color_entries(
    entries: IndexMap<String, String>,
) -> Result<IndexMap<ColorToken, SharedString>, ThemeError> {
    entries
        .into_iter()
        .map(|(name, value)| {
            let token = name.parse::<ColorToken>()?;

            if parse_color(&value).is_none() {
                return Err(ThemeError::InvalidColor {
                    token,
                    value: value.into(),
                });
            }

            Ok((token, SharedString::from(value)))
        })
        .collect()
}

pub fn de_non_empty<'de, D>(deserializer: D) -> Result<SharedString, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim().is_empty() {
        return Err(D::Error::custom("string can't be empty."));
    }

    Ok(value.into())
}

pub fn de_font_weight<'de, D>(deserializer: D) -> Result<SharedString, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => match parse_font_weight(&string) {
            Some(_) => Ok(string.into()),
            None => Err(D::Error::custom(format!(
                "`{string}` is not a font weight, expected 'normal', 'bold' or 1-1000"
            ))),
        },

        StringOrFloat::Float(weight) => match parse_font_weight(&weight.to_string()) {
            Some(_) => Ok(weight.to_string().into()),
            None => Err(D::Error::custom("font weight must be between 1 and 1000")),
        },
    }
}

pub fn de_optional_non_empty<'de, D>(deserializer: D) -> Result<Option<SharedString>, D::Error>
where
    D: Deserializer<'de>,
{
    de_non_empty(deserializer).map(Some)
}

pub fn de_optional_font_weight<'de, D>(deserializer: D) -> Result<Option<SharedString>, D::Error>
where
    D: Deserializer<'de>,
{
    de_font_weight(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
