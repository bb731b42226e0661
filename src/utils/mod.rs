// Utils compartidos

pub mod storage;
pub mod token;
pub mod validation;

pub use storage::*;
pub use token::*;
pub use validation::*;
