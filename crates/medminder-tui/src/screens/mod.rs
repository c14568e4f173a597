pub mod form;
pub mod list;

pub use form::{FormField, FormScreen};
pub use list::ListScreen;
