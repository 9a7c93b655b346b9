//src/common.rs

pub mod error;

pub use error::AppError;
