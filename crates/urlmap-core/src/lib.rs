pub mod builtin;
pub mod config;
pub mod logging;
pub mod registry;
pub mod source;

pub use builtin::Builtin;
pub use registry::{Entry, LookupError, RegistryError, UrlMap};
pub use source::{MapFormat, SourceError};
