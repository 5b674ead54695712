//! Shared test helpers.

#![allow(dead_code)]

pub mod cache_helpers;
