//! Headless reader core (state/action/effect).

pub mod action;
pub mod debounce;
pub mod effect;
pub mod keymap;
pub mod navigation;
pub mod notification;
pub mod state;
pub mod store;

pub use action::Action;
pub use debounce::{Debouncer, PendingQuery};
pub use effect::Effect;
pub use keymap::Keymap;
pub use notification::{Notification, NotificationKind};
pub use state::{AppState, SearchPhase, SearchUiState, UiState};
pub use store::{DispatchResult, Store};
