// ABOUTME: Toast alert provider: active alert list, auto-close timers and the handle given to components
// The provider lives at the root of the UI; everything below talks to it through an AlertHandle

pub mod context;
pub mod provider;
pub mod store;
pub mod timer;

pub use context::AlertHandle;
pub use provider::{AlertChange, AlertEvent, AlertProvider, AlertSettings};
pub use store::AlertStore;
pub use timer::{AlertTimerManager, AUTO_CLOSE_DELAY};
