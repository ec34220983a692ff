pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod fragment;
pub mod loader;
pub mod overlay;
pub mod visibility;

pub use config::*;
pub use error::*;
pub use fetch::*;
pub use fragment::*;
pub use loader::*;
pub use overlay::*;
pub use visibility::*;
