#![forbid(unsafe_code)]

pub mod compare_cli;
