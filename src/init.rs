use gpui::App;

use crate::theme::{ThemeExt, ThemeStore};

/// Installs a theme store over the compiled-in design tokens.
pub fn init(cx: &mut App) {
    init_with_store(cx, ThemeStore::default());
}

/// Installs `store`, replacing any store and overrides already installed.
pub fn init_with_store(cx: &mut App, store: ThemeStore) {
    tracing::debug!("installing theme store");
    cx.set_theme_store(store);
}
