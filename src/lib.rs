//! organize-root library exports for testing

pub mod core;

#[cfg(test)]
pub mod test_support;
