pub mod form;
pub mod messages;
pub mod router;
