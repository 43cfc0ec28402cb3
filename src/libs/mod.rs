//! Core library modules.
//!
//! - Report text: [`classify`], [`segment`], [`export`]
//! - Report data: [`dates`], [`clock`], [`report`], [`prompt`]
//! - Application plumbing: [`config`], [`data_storage`], [`messages`], [`view`]

pub mod classify;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod export;
pub mod messages;
pub mod prompt;
pub mod report;
pub mod segment;
pub mod view;
