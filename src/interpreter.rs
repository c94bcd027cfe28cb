use crate::builtin;
use crate::command::CommandFn;
use crate::lexer::tokenize;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashMap;

/// Executes pipelines of registered text commands against an in-memory
/// buffer.
///
/// The interpreter is a flat dispatch table from command name to a pure
/// [`CommandFn`]; see [`Default`] for the builtins registered out of the
/// box. It holds no other state, so one instance can serve any number of
/// independent pipelines.
///
/// Example
/// ```
/// use pipemill::Interpreter;
/// let interp = Interpreter::default();
/// let out = interp.run("30\n2\n100\n4", "sort -n | head -2").unwrap();
/// assert_eq!(out, "2\n4");
/// ```
pub struct Interpreter {
    commands: HashMap<&'static str, CommandFn>,
}

impl Interpreter {
    /// Create an interpreter with an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under a name, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, command: CommandFn) {
        self.commands.insert(name, command);
    }

    /// Run the already-split stages of a pipeline over `input`.
    ///
    /// Each segment is trimmed, tokenized and resolved in the registry;
    /// the output of stage `i` is the exact input of stage `i + 1`. An
    /// unknown command name aborts the whole pipeline with an error naming
    /// it, and no partial output survives. An empty segment list returns
    /// the input unchanged.
    pub fn execute(&self, input: &str, segments: &[&str]) -> Result<String> {
        let mut buffer = input.to_string();
        for segment in segments {
            let parsed = tokenize(segment.trim());
            let command = self
                .commands
                .get(parsed.name.as_str())
                .ok_or_else(|| anyhow::anyhow!("unknown command: {}", parsed.name))?;
            buffer = command(&buffer, &parsed.args);
        }
        Ok(buffer)
    }

    /// Split a raw command line on `|` and execute it over `input`.
    ///
    /// A blank line is the empty pipeline and returns the input unchanged.
    pub fn run(&self, input: &str, command_line: &str) -> Result<String> {
        if command_line.trim().is_empty() {
            return Ok(input.to_string());
        }
        let segments: Vec<&str> = command_line.split('|').collect();
        self.execute(input, &segments)
    }

    /// Interactive prompt: every entered line is a pipeline applied to
    /// `buffer`, and the result is printed. The buffer itself is never
    /// mutated between lines.
    pub fn repl(&self, buffer: &str) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("pipemill> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    match self.run(buffer, &line) {
                        Ok(result) => println!("{}", result),
                        Err(e) => eprintln!("{}", e),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the full builtin command library:
    /// `cat`, `grep`, `head`, `tail`, `wc`, `sort`, `uniq`, `cut`, `tr`,
    /// `rev`, `tac` and `sed`.
    fn default() -> Self {
        let mut interp = Self::new();
        interp.register("cat", builtin::cat);
        interp.register("grep", builtin::grep);
        interp.register("head", builtin::head);
        interp.register("tail", builtin::tail);
        interp.register("wc", builtin::wc);
        interp.register("sort", builtin::sort);
        interp.register("uniq", builtin::uniq);
        interp.register("cut", builtin::cut);
        interp.register("tr", builtin::tr);
        interp.register("rev", builtin::rev);
        interp.register("tac", builtin::tac);
        interp.register("sed", builtin::sed);
        interp
    }
}
