pub mod binary_reader;
pub mod constants;
pub mod error;
pub mod scanner;
pub mod utils;
