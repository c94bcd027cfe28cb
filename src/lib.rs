//! A tiny interpreter for shell-style text pipelines over an in-memory
//! buffer.
//!
//! This crate emulates a subset of the common line-oriented text utilities
//! (`grep`, `sort`, `cut`, `tr`, `sed`, …) as pure functions and threads a
//! string buffer through a `|`-separated pipeline of them. There is no
//! process model, no file system access and no environment: the whole core
//! is a pure function of the initial buffer and the command line, so
//! pipelines can run concurrently from independent call sites without any
//! synchronization.
//!
//! The main entry point is [`Interpreter`], which resolves command names
//! in a flat registry and executes pipelines. The [`command`] module
//! exposes the function contract for registering your own commands, and
//! [`lexer`] and [`ranges`] expose the parsing helpers the builtins are
//! made of.

pub mod builtin;
pub mod command;
mod interpreter;
pub mod lexer;
pub mod ranges;

/// Re-export of the pipeline executor.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
