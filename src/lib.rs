// Declare all modules that are part of this library
pub mod alignment;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod parsing {
    pub mod usfm;
}
pub mod preprocess;
pub mod render;
pub mod types {
    pub mod scripture;
}
