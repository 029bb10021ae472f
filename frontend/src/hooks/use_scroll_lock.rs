use yew::prelude::*;
use crate::services::{logging::Logger, ScrollLock};

/// Hold a `ScrollLock` for as long as the calling component is mounted and `enabled`
#[hook]
pub fn use_scroll_lock(enabled: bool) {
    use_effect_with(enabled, |enabled| {
        let lock = if *enabled {
            match ScrollLock::acquire() {
                Ok(lock) => Some(lock),
                Err(e) => {
                    Logger::warn_with_component("scroll-lock", &format!("could not lock scroll: {:?}", e));
                    None
                }
            }
        } else {
            None
        };

        move || drop(lock)
    });
}
