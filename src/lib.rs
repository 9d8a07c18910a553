extern crate anyhow;
extern crate reqwest;
extern crate serde_derive;

pub mod config;
pub mod console;
pub mod github;
