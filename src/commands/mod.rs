//! Command implementations for the react-starter CLI.
//!
//! - [`create`] - the scaffolding flow (the default command)
//! - [`info`] - the `--info` environment report

pub mod create;
pub mod info;
