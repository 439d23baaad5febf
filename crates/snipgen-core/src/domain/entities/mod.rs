pub mod form;
pub mod snippet;

pub use form::*;
pub use snippet::*;
