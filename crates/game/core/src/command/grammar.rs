//! Recursive-descent recognizer for the keystroke command language.
//!
//! The recognizer always classifies the whole buffer. Digits are read
//! greedily and never backtracked, so a buffer is either a complete command,
//! a prefix of one, or garbage.

use crate::movement::{CardinalDirection, Edge, FindSpec, Motion, MovementSpec};

/// Classification of a whole buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parse<T> {
    Complete(T),
    Incomplete,
    Invalid,
}

impl<T> Parse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parse<U> {
        match self {
            Parse::Complete(value) => Parse::Complete(f(value)),
            Parse::Incomplete => Parse::Incomplete,
            Parse::Invalid => Parse::Invalid,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Parse::Invalid)
    }
}

/// What a `d`/`y` verb operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Cells covered by a movement.
    Along(MovementSpec),
    /// Doubled verb: `dd` takes whole rows, `yy` the actor's own cell.
    Line { count: Option<u32> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollKind {
    /// `gj`
    Down,
    /// `gk`
    Up,
    /// `G`
    Bottom,
}

/// A complete command as recognized from keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedCommand {
    Move(MovementSpec),
    Delete {
        register: Option<char>,
        operand: Operand,
    },
    Yank {
        register: Option<char>,
        operand: Operand,
    },
    Put {
        register: Option<char>,
    },
    SetMark(char),
    Undo,
    UseItem(char),
    Stairs {
        up: bool,
    },
    /// `:`, `/` or `?`.
    EnterMode(char),
    Scroll(ScrollKind),
    ShowInventory,
    Observe,
    SaveAndQuit,
    Wait,
}

/// Classifies a full keystroke buffer.
///
/// `buffer` is everything typed since the last completed or rejected
/// command, the newest key included.
pub fn parse_command(buffer: &[char]) -> Parse<ParsedCommand> {
    match buffer {
        [] => Parse::Incomplete,
        [' '] => Parse::Complete(ParsedCommand::Wait),
        [first, ..] => match singleton(buffer, *first) {
            Some(parsed) => parsed,
            None => compound(buffer),
        },
    }
}

/// Classifies a buffer that may only hold a movement.
pub fn parse_movement(buffer: &[char]) -> Parse<MovementSpec> {
    match buffer {
        [] => Parse::Incomplete,
        ['0'] => Parse::Complete(MovementSpec::new(Motion::Edge(Edge::Left))),
        ['0', ..] => Parse::Invalid,
        _ => {
            let (count, rest) = split_count(buffer);
            base_motion(rest).map(|motion| MovementSpec::new(motion).with_count(count))
        }
    }
}

fn singleton(buffer: &[char], first: char) -> Option<Parse<ParsedCommand>> {
    let parsed = match (first, &buffer[1..]) {
        ('m', []) | ('@', []) | ('g', []) | ('Z', []) => Parse::Incomplete,
        ('m', [name]) => Parse::Complete(ParsedCommand::SetMark(*name)),
        ('@', [register]) => Parse::Complete(ParsedCommand::UseItem(*register)),
        ('g', ['j']) => Parse::Complete(ParsedCommand::Scroll(ScrollKind::Down)),
        ('g', ['k']) => Parse::Complete(ParsedCommand::Scroll(ScrollKind::Up)),
        ('Z', ['Z']) => Parse::Complete(ParsedCommand::SaveAndQuit),
        ('m' | '@' | 'g' | 'Z', _) => Parse::Invalid,
        ('u', []) => Parse::Complete(ParsedCommand::Undo),
        ('>', []) => Parse::Complete(ParsedCommand::Stairs { up: false }),
        ('<', []) => Parse::Complete(ParsedCommand::Stairs { up: true }),
        (':' | '/' | '?', []) => Parse::Complete(ParsedCommand::EnterMode(first)),
        ('G', []) => Parse::Complete(ParsedCommand::Scroll(ScrollKind::Bottom)),
        ('i', []) => Parse::Complete(ParsedCommand::ShowInventory),
        ('o', []) => Parse::Complete(ParsedCommand::Observe),
        _ => return None,
    };
    Some(parsed)
}

/// `[count]["<reg>][count](d|y)(d|y|<movement>)`, `[count]["<reg>][count]p`
/// or a bare movement.
fn compound(buffer: &[char]) -> Parse<ParsedCommand> {
    if buffer[0] == '0' {
        return parse_movement(buffer).map(ParsedCommand::Move);
    }

    let (count1, rest) = split_count(buffer);
    let (register, rest) = match rest {
        ['"'] => return Parse::Incomplete,
        ['"', register, rest @ ..] => (Some(*register), rest),
        _ => (None, rest),
    };
    let (count2, rest) = match (register, rest) {
        (Some(_), ['0', ..]) => return Parse::Invalid,
        (Some(_), _) => split_count(rest),
        (None, _) => (None, rest),
    };
    if count1.is_some() && count2.is_some() {
        return Parse::Invalid;
    }
    let count = count1.or(count2);

    match rest {
        [] => Parse::Incomplete,
        ['p'] => Parse::Complete(ParsedCommand::Put { register }),
        ['p', ..] => Parse::Invalid,
        [verb @ ('d' | 'y'), operand @ ..] => match verb_operand(*verb, operand, count) {
            Parse::Complete(operand) => Parse::Complete(match *verb {
                'd' => ParsedCommand::Delete { register, operand },
                _ => ParsedCommand::Yank { register, operand },
            }),
            Parse::Incomplete => Parse::Incomplete,
            Parse::Invalid => Parse::Invalid,
        },
        // A register selects an inventory slot; it cannot prefix a plain movement.
        _ if register.is_some() => Parse::Invalid,
        _ => parse_movement(buffer).map(ParsedCommand::Move),
    }
}

fn verb_operand(verb: char, operand: &[char], count: Option<u32>) -> Parse<Operand> {
    match operand {
        [] => Parse::Incomplete,
        [doubled] if *doubled == verb => Parse::Complete(Operand::Line { count }),
        _ => match parse_movement(operand) {
            Parse::Complete(spec) if spec.count.is_some() && count.is_some() => Parse::Invalid,
            Parse::Complete(spec) => Parse::Complete(Operand::Along(match spec.motion {
                Motion::Edge(Edge::Left) => spec,
                _ => spec.with_count(spec.count.or(count)),
            })),
            Parse::Incomplete if count.is_some() && operand[0].is_ascii_digit() => Parse::Invalid,
            other => other.map(Operand::Along),
        },
    }
}

/// Splits leading digits off. The first digit is never `0`.
fn split_count(buffer: &[char]) -> (Option<u32>, &[char]) {
    if buffer.first().is_none_or(|c| *c == '0') {
        return (None, buffer);
    }
    let digits = buffer.iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return (None, buffer);
    }
    let count = buffer[..digits].iter().fold(0u32, |acc, c| {
        acc.saturating_mul(10)
            .saturating_add(c.to_digit(10).unwrap_or(0))
    });
    (Some(count), &buffer[digits..])
}

fn base_motion(rest: &[char]) -> Parse<Motion> {
    match rest {
        [] => Parse::Incomplete,
        [key] => match *key {
            'h' | 'j' | 'k' | 'l' => CardinalDirection::from_key(*key)
                .map_or(Parse::Invalid, |direction| Parse::Complete(Motion::Step(direction))),
            '$' => Parse::Complete(Motion::Edge(Edge::Right)),
            'H' => Parse::Complete(Motion::Edge(Edge::Top)),
            'L' => Parse::Complete(Motion::Edge(Edge::Bottom)),
            'M' => Parse::Complete(Motion::Center),
            ';' => Parse::Complete(Motion::RepeatFind),
            'w' | 'e' => FindSpec::new(*key, None)
                .map_or(Parse::Invalid, |find| Parse::Complete(Motion::Find(find))),
            't' | 'f' | '`' | '\'' => Parse::Incomplete,
            _ => Parse::Invalid,
        },
        [key @ ('t' | 'f'), target] => FindSpec::new(*key, Some(*target))
            .map_or(Parse::Invalid, |find| Parse::Complete(Motion::Find(find))),
        [key @ ('`' | '\''), name] => Parse::Complete(Motion::Mark {
            key: *key,
            name: *name,
        }),
        _ => Parse::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Parse<ParsedCommand> {
        parse_command(&text.chars().collect::<Vec<_>>())
    }

    fn step(key: char, count: Option<u32>) -> MovementSpec {
        let direction = CardinalDirection::from_key(key).expect("step key");
        MovementSpec::new(Motion::Step(direction)).with_count(count)
    }

    #[test]
    fn movements_with_and_without_counts() {
        assert_eq!(parse("l"), Parse::Complete(ParsedCommand::Move(step('l', None))));
        assert_eq!(parse("12"), Parse::Incomplete);
        assert_eq!(parse("12j"), Parse::Complete(ParsedCommand::Move(step('j', Some(12)))));
        assert_eq!(parse("f"), Parse::Incomplete);
        assert!(matches!(parse("fx"), Parse::Complete(ParsedCommand::Move(_))));
        assert_eq!(parse("x"), Parse::Invalid);
    }

    #[test]
    fn leading_zero_is_the_left_edge() {
        let left = MovementSpec::new(Motion::Edge(Edge::Left));
        assert_eq!(parse("0"), Parse::Complete(ParsedCommand::Move(left)));
        assert_eq!(parse("10l"), Parse::Complete(ParsedCommand::Move(step('l', Some(10)))));
    }

    #[test]
    fn compound_counts_fold_into_the_movement() {
        let expected = ParsedCommand::Delete {
            register: None,
            operand: Operand::Along(step('l', Some(3))),
        };
        assert_eq!(parse("3dl"), Parse::Complete(expected));
        assert_eq!(parse("d3l"), Parse::Complete(expected));
    }

    #[test]
    fn two_counts_are_rejected() {
        assert_eq!(parse("2d3l"), Parse::Invalid);
        assert_eq!(parse("2\"a3dl"), Parse::Invalid);
        assert_eq!(parse("2d3"), Parse::Invalid);
    }

    #[test]
    fn registers_prefix_verbs_only() {
        assert_eq!(parse("\""), Parse::Incomplete);
        assert_eq!(parse("\"a"), Parse::Incomplete);
        assert_eq!(parse("\"a2"), Parse::Incomplete);
        assert_eq!(
            parse("\"ayy"),
            Parse::Complete(ParsedCommand::Yank {
                register: Some('a'),
                operand: Operand::Line { count: None },
            })
        );
        assert_eq!(
            parse("\"bp"),
            Parse::Complete(ParsedCommand::Put { register: Some('b') })
        );
        assert_eq!(parse("\"al"), Parse::Invalid);
    }

    #[test]
    fn doubled_verbs_take_the_line() {
        assert_eq!(
            parse("2dd"),
            Parse::Complete(ParsedCommand::Delete {
                register: None,
                operand: Operand::Line { count: Some(2) },
            })
        );
        assert_eq!(parse("dy"), Parse::Invalid);
    }

    #[test]
    fn singletons() {
        assert_eq!(parse("u"), Parse::Complete(ParsedCommand::Undo));
        assert_eq!(parse("m"), Parse::Incomplete);
        assert_eq!(parse("ma"), Parse::Complete(ParsedCommand::SetMark('a')));
        assert_eq!(parse("@1"), Parse::Complete(ParsedCommand::UseItem('1')));
        assert_eq!(parse("g"), Parse::Incomplete);
        assert_eq!(parse("gj"), Parse::Complete(ParsedCommand::Scroll(ScrollKind::Down)));
        assert_eq!(parse("gx"), Parse::Invalid);
        assert_eq!(parse("ZZ"), Parse::Complete(ParsedCommand::SaveAndQuit));
        assert_eq!(parse(">"), Parse::Complete(ParsedCommand::Stairs { up: false }));
        assert_eq!(parse(":"), Parse::Complete(ParsedCommand::EnterMode(':')));
        assert_eq!(parse(" "), Parse::Complete(ParsedCommand::Wait));
    }

    #[test]
    fn movement_only_parser_rejects_verbs() {
        let buffer: Vec<char> = "dl".chars().collect();
        assert_eq!(parse_movement(&buffer), Parse::Invalid);
        let buffer: Vec<char> = "3t".chars().collect();
        assert_eq!(parse_movement(&buffer), Parse::Incomplete);
    }
}
