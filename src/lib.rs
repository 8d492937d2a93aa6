#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod caller;
pub mod level;
pub mod logger;
mod macros;

pub use bridge::try_install;
pub use caller::SOURCE_ROOT_ENV;
pub use level::Level;
pub use logger::{Builder, Logger};
