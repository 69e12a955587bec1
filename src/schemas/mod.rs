pub mod contact_schema;

pub use crate::schemas::contact_schema::{ContactSubmission, ValidatedSubmission};
