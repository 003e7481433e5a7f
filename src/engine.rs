//! Token scanning and option resolution

pub mod resolver;
pub mod scanner;
pub mod token;

pub use resolver::{Resolution, coerce, resolve};
pub use scanner::ArgumentScanner;
pub use token::Token;
