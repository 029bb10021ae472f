/// Behaviour switches for the form modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    /// Delay before the entry transition classes are applied
    pub entry_delay_ms: u32,
    pub close_on_escape: bool,
    pub close_on_backdrop: bool,
    pub trap_focus: bool,
    pub lock_scroll: bool,
    /// Paragraphs of filler copy inside the panel; 0 renders none
    pub filler_paragraphs: usize,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            entry_delay_ms: 10,
            close_on_escape: true,
            close_on_backdrop: true,
            trap_focus: true,
            lock_scroll: true,
            filler_paragraphs: 5,
        }
    }
}

impl ModalConfig {
    /// No filler copy and no entry delay, for embedding in dense layouts
    pub fn compact() -> Self {
        Self {
            entry_delay_ms: 0,
            filler_paragraphs: 0,
            ..Self::default()
        }
    }
}

/// Padding that keeps the page from shifting once its scroll bar is hidden
pub fn scrollbar_compensation(inner_width: f64, client_width: f64) -> f64 {
    (inner_width - client_width).max(0.0)
}
