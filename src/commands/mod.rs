pub mod backends;
pub mod cleanup;
pub mod scan;
