use anyhow::{Context, Result};
use argh::FromArgs;
use pipemill::Interpreter;
use std::io::Read;

#[derive(FromArgs)]
/// Apply pipelines of emulated text utilities to an in-memory buffer.
struct Cli {
    /// file to load as the initial buffer; with -c and no file, the buffer
    /// is read from stdin
    #[argh(option, short = 'f')]
    file: Option<String>,

    /// pipeline to run once, e.g. "grep -i error | head -3"; without it an
    /// interactive prompt starts
    #[argh(option, short = 'c')]
    command: Option<String>,
}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    let buffer = match &cli.file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("can't read {}", path))?
        }
        None if cli.command.is_some() => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        None => String::new(),
    };

    let interp = Interpreter::default();
    match cli.command {
        Some(command_line) => {
            let result = interp.run(&buffer, &command_line)?;
            println!("{}", result);
        }
        None => interp.repl(&buffer)?,
    }

    Ok(())
}
