pub mod catalog;
pub mod chat;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod viewer;
