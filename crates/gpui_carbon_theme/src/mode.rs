use std::{fmt, str::FromStr};

use gpui::{App, Global, SharedString, WindowAppearance};
use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// The appearance colors resolve under.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(ThemeError::UnknownMode(SharedString::from(s.to_owned()))),
        }
    }
}

impl From<WindowAppearance> for Mode {
    fn from(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Mode::Light,
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Mode::Dark,
        }
    }
}

/// Reports the ambient mode.
pub trait ModeDetector {
    fn current_mode(&self) -> Mode;
}

/// A fixed mode.
impl ModeDetector for Mode {
    fn current_mode(&self) -> Mode {
        *self
    }
}

/// What a host reported about its appearance. `None` means the host can't
/// tell, which resolves to [`Mode::Light`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostAppearance(pub Option<Mode>);

impl ModeDetector for HostAppearance {
    fn current_mode(&self) -> Mode {
        self.0.unwrap_or_default()
    }
}

/// App-wide pin of the ambient mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemePreference {
    /// Follow the platform appearance.
    #[default]
    System,
    Light,
    Dark,
}

impl ColorSchemePreference {
    pub fn pinned(self) -> Option<Mode> {
        match self {
            Self::System => None,
            Self::Light => Some(Mode::Light),
            Self::Dark => Some(Mode::Dark),
        }
    }
}

impl From<Mode> for ColorSchemePreference {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::Light,
            Mode::Dark => Self::Dark,
        }
    }
}

impl Global for ColorSchemePreference {}

impl ModeDetector for App {
    fn current_mode(&self) -> Mode {
        self.try_global::<ColorSchemePreference>()
            .and_then(|preference| preference.pinned())
            .unwrap_or_else(|| Mode::from(self.window_appearance()))
    }
}
