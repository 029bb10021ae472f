pub mod apply_page;
pub mod form_modal;
pub mod modal_provider;

pub use apply_page::ApplyPage;
pub use form_modal::FormModal;
pub use modal_provider::ModalProvider;
