// Invocation wrappers around the core adapter: plain HTTP and Lambda.

#[cfg(feature = "cli")]
pub mod http;
pub mod lambda;
