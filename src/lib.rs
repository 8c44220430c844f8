//! Promptgen binary-side library: the interactive session loop, exposed
//! so integration tests can drive it with a mocked generator.

pub mod session;
