pub mod authorizer;
pub mod postgres;
pub mod role;

pub use authorizer::Authorizer;
pub use postgres::RoleAuthorizer;
pub use role::Role;
