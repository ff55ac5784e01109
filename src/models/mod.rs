pub mod document;
pub mod message;
pub mod project;

pub use document::serialize_doc;
pub use message::ContactMessage;
pub use project::{seed_projects, NewProject, Project};
