//! Best-effort local storage of the week being edited.

mod week_state;

pub use week_state::WeekState;
