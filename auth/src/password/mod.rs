pub mod argon2;
pub mod errors;
pub mod settings;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use settings::HashingSettings;
