pub mod config;
pub mod dispatcher;
pub mod error;
pub mod kernel;
pub mod outputs;
pub mod services;

// Re-exports for convenient access
pub use config::Config;
pub use kernel::reactor::Reactor;
