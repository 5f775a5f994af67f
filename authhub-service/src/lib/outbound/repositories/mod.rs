pub mod user;

pub use user::PostgresCredentialRepository;
