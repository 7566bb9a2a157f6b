pub mod contact;
mod service;
pub(crate) mod template;

pub use contact::*;
pub use service::*;
