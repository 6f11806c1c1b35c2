//! Command-line (`:`) and search (`/`, `?`) lines.

use super::error::CommandError;
use super::request::Verb;

/// Parses a full line typed after entering command or search mode.
///
/// The line includes its leading `:`, `/` or `?`.
pub fn parse_line(line: &str) -> Result<Verb, CommandError> {
    let mut chars = line.chars();
    let verb = match chars.next() {
        Some('/') => Verb::Search {
            pattern: chars.as_str().to_owned(),
            backwards: false,
        },
        Some('?') => Verb::Search {
            pattern: chars.as_str().to_owned(),
            backwards: true,
        },
        Some(':') => colon(chars.as_str()).ok_or_else(|| CommandError::NotAnEditorCommand {
            text: chars.as_str().to_owned(),
        })?,
        _ => {
            return Err(CommandError::NotAnEditorCommand {
                text: line.to_owned(),
            });
        }
    };
    Ok(verb)
}

fn colon(command: &str) -> Option<Verb> {
    let verb = match command {
        "reg" | "registers" => Verb::ShowInventory,
        "w" | "write" => Verb::Save,
        "q" | "quit" => Verb::Quit { force: false },
        "q!" | "quit!" => Verb::Quit { force: true },
        "wq" | "x" => Verb::SaveAndQuit,
        "h" | "help" => Verb::Help(None),
        _ => {
            if let Some(args) = command.strip_prefix("swap ") {
                return swap(args);
            }
            let topic = command
                .strip_prefix("help ")
                .or_else(|| command.strip_prefix("h "))?;
            Verb::Help(Some(topic.to_owned()))
        }
    };
    Some(verb)
}

/// `:swap a b`, one character per register.
fn swap(args: &str) -> Option<Verb> {
    match args.chars().collect::<Vec<_>>().as_slice() {
        [first, ' ', second] => Some(Verb::SwapRegisters(*first, *second)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_colon_commands() {
        assert_eq!(parse_line(":reg"), Ok(Verb::ShowInventory));
        assert_eq!(parse_line(":q!"), Ok(Verb::Quit { force: true }));
        assert_eq!(parse_line(":x"), Ok(Verb::SaveAndQuit));
        assert_eq!(parse_line(":swap a 1"), Ok(Verb::SwapRegisters('a', '1')));
        assert_eq!(
            parse_line(":h turns"),
            Ok(Verb::Help(Some("turns".to_owned())))
        );
    }

    #[test]
    fn search_lines_keep_their_pattern() {
        assert_eq!(
            parse_line("?wall"),
            Ok(Verb::Search {
                pattern: "wall".to_owned(),
                backwards: true
            })
        );
    }

    #[test]
    fn unknown_commands_echo_text_without_colon() {
        let err = parse_line(":frobnicate").expect_err("unknown command");
        assert_eq!(err.to_string(), "E492: Not an editor command: frobnicate");
        assert!(parse_line(":swap ab").is_err());
    }
}
