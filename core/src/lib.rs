pub mod catalog;
pub mod navigate;
pub mod parse;
pub mod resolve;
pub mod token;
