pub mod dom;
pub mod logging;
pub mod scroll_lock;

pub use scroll_lock::ScrollLock;
