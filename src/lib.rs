pub mod analysis;
pub mod ast;
pub mod driver;
pub mod errors;
pub mod position;
pub mod symbol;
