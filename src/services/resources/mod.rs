pub mod postgres;
pub mod store;
pub mod types;

pub use postgres::PgResourceStore;
pub use store::ResourceStore;
pub use types::{Resource, ResourceKind};
