/// Where keyboard focus currently sits relative to the dialog's focusable elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPosition {
    /// Focus is on none of the focusable elements (e.g. the heading)
    Outside,
    First,
    Last,
    /// The only focusable element
    Only,
    Inner,
}

impl FocusPosition {
    /// Locate `active` among `focusables`
    pub fn locate<T: PartialEq>(focusables: &[T], active: Option<&T>) -> FocusPosition {
        let index = match active.and_then(|active| focusables.iter().position(|f| f == active)) {
            Some(index) => index,
            None => return FocusPosition::Outside,
        };

        match (index == 0, index + 1 == focusables.len()) {
            (true, true) => FocusPosition::Only,
            (true, false) => FocusPosition::First,
            (false, true) => FocusPosition::Last,
            (false, false) => FocusPosition::Inner,
        }
    }
}

/// What the dialog should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Dismiss the dialog
    Cancel,
    /// Prevent the default and focus the first focusable element
    FocusFirst,
    /// Prevent the default and focus the last focusable element
    FocusLast,
    /// Let the browser handle it
    Ignore,
}

/// Map a keydown to an action, closing the Tab cycle at both ends
pub fn resolve_key(key: &str, shift: bool, position: FocusPosition) -> KeyAction {
    match key {
        "Escape" | "Esc" => KeyAction::Cancel,
        "Tab" => match (shift, position) {
            (true, FocusPosition::First | FocusPosition::Only | FocusPosition::Outside) => {
                KeyAction::FocusLast
            }
            (false, FocusPosition::Last | FocusPosition::Only | FocusPosition::Outside) => {
                KeyAction::FocusFirst
            }
            _ => KeyAction::Ignore,
        },
        _ => KeyAction::Ignore,
    }
}
