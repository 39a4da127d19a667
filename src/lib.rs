//! BloggerBox - a small REST backend for a blog platform
//!
//! This library provides the core functionality for the BloggerBox backend:
//! categories, posts, and the HTTP API over them.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
