// Service exports
pub mod postgres;
pub mod session;

pub use postgres::{PostgresClient, PostgresError};
pub use session::{SessionClaims, SessionError, SessionUser, SessionVerifier};
