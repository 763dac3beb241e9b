//! EduApp library exports for the binary and the integration tests

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
