mod cli;
mod config;
mod docs;
mod entry;
mod handlers;
mod semantic;
mod state;
mod symbols;
mod text;

pub use entry::run;

pub(crate) const MAX_SEMANTIC_TOKENS: usize = 8000;
