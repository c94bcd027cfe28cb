//! Tokenization of a single pipeline stage into a command name and its
//! arguments.

/// One tokenized pipeline stage: the command name followed by its
/// arguments in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token of the stage; empty when the stage itself was empty.
    pub name: String,
    /// Remaining tokens, order preserved.
    pub args: Vec<String>,
}

/// Splits one raw command segment on unquoted spaces.
///
/// A token may contain spaces when they fall inside a pair of single or
/// double quotes; the quote characters are stripped and the quote kind is
/// not recoverable from the result. Quotes do not nest and there is no
/// escape mechanism. An unterminated quote is tolerated: everything up to
/// the end of the input becomes part of the final token. Tokenization
/// never fails.
pub fn tokenize(line: &str) -> ParsedCommand {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quote: Option<char> = None;

    for ch in line.chars() {
        match in_quote {
            Some(quote) => {
                if ch == quote {
                    in_quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => in_quote = Some(ch),
                ' ' => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            },
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    let mut tokens = tokens.into_iter();
    ParsedCommand {
        name: tokens.next().unwrap_or_default(),
        args: tokens.collect(),
    }
}
