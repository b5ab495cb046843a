pub mod basic;
pub mod factory;
pub mod policy;

pub use basic::{BasicAuth, UserStore};
pub use factory::build_auth_policy;
pub use policy::AuthPolicy;
