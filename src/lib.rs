#![doc = "The `todovault` library crate."]
#![doc = ""]
#![doc = "A token-gated todo list API: one fixed account logs in to obtain a"]
#![doc = "24-hour bearer token, which then gates CRUD access to a todo"]
#![doc = "collection in Postgres. This crate holds the credential issuer, the"]
#![doc = "authorization middleware, the repository, the route handlers, and"]
#![doc = "the error taxonomy; the binary (`main.rs`) wires them together."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
