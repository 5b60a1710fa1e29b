//! HTTP route handlers

pub mod index;
