//! Design tokens and the theme store.
//!
//! Colors are looked up by [`ColorToken`] in a per-mode override table first
//! and the compiled-in base table second. Fonts are looked up by
//! [`FontRole`] the same way, merging partial overrides over the base entry.

mod deserializers;
pub use deserializers::{parse_color, parse_font_weight};

mod error;
pub use error::*;

mod mode;
pub use mode::*;

mod overrides;
pub use overrides::*;

mod schema;
pub use schema::*;

mod store;
pub use store::*;
