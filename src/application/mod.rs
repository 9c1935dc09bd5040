pub mod accounts;
pub mod dto;
pub mod ext;
pub mod services;

pub use ext::{OptionExt, RequireExt};
