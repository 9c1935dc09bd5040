pub mod account;
pub mod errors;
pub mod field_errors;
pub mod naming;
pub mod outcome;

pub use errors::{DomainError, DomainResult, ErrorKind, classify};
pub use field_errors::FieldErrors;
pub use naming::NamingConvention;
pub use outcome::Outcome;
