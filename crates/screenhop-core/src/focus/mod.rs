pub mod handler;

pub use handler::focus_application;
