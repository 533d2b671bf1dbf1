//! # SPLICE Tools
//!
//! The SPLICE drum machine stores its patterns as small binary `.splice` files. Handy for the hardware, less so
//! for humans: you need tools to see which version saved a file, what tempo it plays at and which steps trigger
//! which instrument. This crate provides a command-line utility that does exactly that.
//!
//! ## Inspect
//!
//! ```console
//! splice-tools-inspect 0.1.0
//! Stijn Frishert <info@stijnfrishert.com>
//! Inspect SPLICE pattern files, or even entire directories for their contents
//!
//! USAGE:
//!     splice-tools inspect [OPTIONS] [PATH]...
//!
//! ARGS:
//!     <PATH>...    The path(s) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -r, --recursive    Search folders recursively
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > splice-tools inspect late-night.splice
//! late-night.splice
//! Saved with HW Version: 0.808-alpha
//! Tempo: 98.4
//! (0) kick        |x---|x---|x---|x---|
//! (1) snare       |----|x---|----|x---|
//! (2) clap        |----|x-x-|----|----|
//! ```

pub mod inspect;
