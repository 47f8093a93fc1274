mod extract;
mod health;
pub mod responses;
mod submission_form;

pub use extract::{extract_bank_statement_handler, extract_handler, extract_invoice_handler};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use submission_form::{FormError, SubmissionForm};
