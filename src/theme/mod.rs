//! Theme system providing semantic colors and fonts.
//!
//! Colors resolve per mode (light or dark) from the host's overrides first
//! and the compiled-in design tokens second. The store itself lives in
//! [`gpui_carbon_theme`]; this module wires it into gpui's [`gpui::App`].

pub use gpui_carbon_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
