pub mod menu;
pub mod state;
pub mod transition;
pub mod types;

pub use state::NavState;
pub use transition::StackTransform;
pub use types::Route;
