// App module for user_manager-tui
// Holds the controller state, the actions it understands and key handling

pub mod actions;
pub mod input;
pub mod state;

pub use actions::Action;
pub use input::handle_input;
pub use state::{App, Dialog, Focus, FormFocus, Notice, NoticeKind};
