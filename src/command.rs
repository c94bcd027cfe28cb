//! The contract shared by every command in the interpreter's registry.

/// A command is a pure function from an input buffer and an argument list
/// to an output buffer.
///
/// Commands never fail: malformed flags, missing operands, out-of-range
/// positions and unparsable patterns all degrade to a documented fallback,
/// usually returning the input unchanged. The only fatal condition in the
/// whole interpreter is an unknown command name, and that is raised by the
/// dispatcher, not by a command.
///
/// Commands keep no state between invocations and never mutate their
/// input; each stage of a pipeline receives the previous stage's return
/// value as a fresh buffer.
pub type CommandFn = fn(&str, &[String]) -> String;
