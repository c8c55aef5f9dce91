//! Basedirs - XDG base directory resolution.
//!
//! This crate resolves the user's data, config and cache directories, searches them for
//! existing resources, and creates resources in them with owner-only permissions.

pub mod config_files;
pub mod fs;
pub mod os;
