pub mod form_state;
pub mod ui_state;

pub use form_state::FormState;
pub use ui_state::{StatusMessage, UIState};
