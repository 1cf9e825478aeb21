//! Collection of general utility functions.

pub mod jwt;
