mod controller;
mod form;
mod status;
mod submitter;

pub use controller::*;
pub use form::*;
pub use status::*;
pub use submitter::*;
