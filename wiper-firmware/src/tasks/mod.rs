//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod event_log;
pub mod wiper;

pub use event_log::event_log_task;
pub use wiper::wiper_task;
