pub mod backends;
pub mod cleanup;
