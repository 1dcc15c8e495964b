mod json_contact_repository;
mod traits;

pub use json_contact_repository::JsonContactRepository;
pub use traits::ContactRepository;
