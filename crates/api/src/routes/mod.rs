//! Route Handlers

pub mod webhook;
