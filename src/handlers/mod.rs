pub mod contact;
pub mod health;
pub mod project;
pub mod schema;

pub use contact::{submit_message, ContactRequest, ContactResponse};
pub use health::{read_root, test_database, DiagnosticsResponse, LivenessResponse};
pub use project::{list_projects, ProjectResponse};
pub use schema::get_schema;
