pub mod error;
pub mod lenient;
pub mod media;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod validation;
