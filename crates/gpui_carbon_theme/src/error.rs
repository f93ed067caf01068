use gpui::SharedString;
use thiserror::Error;

use crate::{ColorToken, FontRole, Mode};

#[derive(Error, Debug)]
pub enum ThemeError {
    /// The token is defined by neither the override nor the base table for
    /// the mode. Always a bug in the caller or in the token tables.
    #[error("Color token `{token}` is not defined for the {mode} theme.")]
    MissingToken { token: SharedString, mode: Mode },
    #[error("`{0}` is not a known color token.")]
    UnknownToken(SharedString),
    #[error("`{0}` is not a known font role.")]
    UnknownFontRole(SharedString),
    #[error("`{0}` is not a known mode, expected `light` or `dark`.")]
    UnknownMode(SharedString),
    #[error("`{value}` is not a valid color for `{token}`.")]
    InvalidColor {
        token: ColorToken,
        value: SharedString,
    },
    #[error("`{value}` is not a valid font weight for `{role}`.")]
    InvalidFontWeight { role: FontRole, value: SharedString },
    #[error("Theme data could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}
