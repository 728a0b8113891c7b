pub mod async_dispatcher;
pub mod request_path;
pub mod types;
