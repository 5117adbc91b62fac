pub mod json;
pub mod path;
pub mod session;

pub use json::ValidJson;
pub use path::RecordId;
pub use session::DbSession;
