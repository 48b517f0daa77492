mod error;
mod models;
