//! Domain vocabulary and the pure view-state controller of the portal shell.

pub mod activity;
pub mod archive;
pub mod nav;
pub mod page;
pub mod resource;
pub mod route;
pub mod session;
pub mod state;
pub mod types;
pub mod user;
