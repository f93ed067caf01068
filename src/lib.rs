pub mod theme;

mod config;
pub use config::*;

mod init;
pub use init::*;
