use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew::functional::UseStateSetter;
use web_sys::HtmlElement;
use shared::{ModalError, ModalResult, ModalSession, PendingForm};
use crate::services::{dom, logging::Logger};

/// Handle to the application form modal, provided by `ModalProvider`
#[derive(Clone)]
pub struct ModalHandle {
    session: Rc<RefCell<ModalSession<HtmlElement>>>,
    is_open: UseStateSetter<bool>,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl ModalHandle {
    pub fn new(session: Rc<RefCell<ModalSession<HtmlElement>>>, is_open: UseStateSetter<bool>) -> Self {
        Self { session, is_open }
    }

    /// Open the form and get a future for its outcome.
    ///
    /// `trigger` regains focus when the dialog closes. Fails with
    /// `ModalError::AlreadyOpen` while a previous request is unresolved.
    pub fn open_form_modal(&self, trigger: Option<HtmlElement>) -> Result<PendingForm, ModalError> {
        let (pending, generation) = {
            let mut session = self.session.borrow_mut();
            let pending = session.open(trigger)?;
            (pending, session.generation())
        };
        self.is_open.set(true);
        Logger::info_with_component("modal", &format!("form modal opened (request #{})", generation));
        Ok(pending)
    }

    /// Resolve the pending request and return focus to the trigger
    pub fn close(&self, result: ModalResult) {
        let submitted = result.is_some();
        let (trigger, generation) = {
            let mut session = self.session.borrow_mut();
            (session.close(result), session.generation())
        };
        self.is_open.set(false);

        if let Some(trigger) = trigger {
            dom::focus(&trigger);
        }

        let outcome = if submitted { "submitted" } else { "cancelled" };
        Logger::info_with_component("modal", &format!("form modal {} (request #{})", outcome, generation));
    }
}

/// The enclosing provider's handle, or `ModalError::MissingProvider`
#[hook]
pub fn use_try_modal() -> Result<ModalHandle, ModalError> {
    use_context::<ModalHandle>().ok_or(ModalError::MissingProvider)
}

/// The enclosing provider's handle.
///
/// # Panics
/// When no `ModalProvider` encloses the calling component; the caller would
/// otherwise never receive the form result.
#[hook]
pub fn use_modal() -> ModalHandle {
    match use_try_modal() {
        Ok(handle) => handle,
        Err(e) => panic!("{}", e),
    }
}
