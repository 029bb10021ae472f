pub mod use_dialog_keys;
pub mod use_modal;
pub mod use_scroll_lock;

pub use use_dialog_keys::{use_dialog_keys, DialogKeysConfig};
pub use use_modal::{use_try_modal, use_modal, ModalHandle};
pub use use_scroll_lock::use_scroll_lock;
