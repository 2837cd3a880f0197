pub mod classify;
pub mod components;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use classify::*;
pub use components::*;
pub use renderer::*;
pub use renders::*;
pub use traits::*;
