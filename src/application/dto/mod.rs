pub mod context;
pub mod pagination;

pub use context::RequestContext;
pub use pagination::CursorPage;
