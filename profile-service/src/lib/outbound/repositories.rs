pub mod profile;
pub mod user;

pub use profile::PostgresProfileRepository;
pub use user::PostgresUserRepository;
