mod alert_modal;
pub use alert_modal::AlertModal;
