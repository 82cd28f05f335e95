pub mod jwt;
pub mod session;
pub mod validate;

pub use self::jwt::auth_middleware;
pub use self::session::session_middleware;
pub use self::validate::SimpleValidatedJson;
