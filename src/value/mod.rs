pub mod builtin;
pub mod inspect;
pub mod types;

pub use builtin::*;
pub use inspect::*;
pub use types::*;
