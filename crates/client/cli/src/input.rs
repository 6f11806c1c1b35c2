//! Keyboard normalization.
//!
//! The interpreter only understands plain characters. This module maps
//! `crossterm` key events onto them: arrow keys become `hjkl` and backspace
//! becomes `h` while typing commands. In the `:`/`/`/`?` line editor the same
//! keys edit the line instead.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key event after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// A keystroke for the interpreter or the line editor.
    Key(char),
    /// Deletes the last character of the command line.
    Erase,
    /// Finishes the command line.
    Submit,
    /// Abandons the command line or the pending command.
    Cancel,
    /// Ctrl-C.
    Interrupt,
    None,
}

/// Maps a key event in normal (command) mode.
pub fn normalize(key: KeyEvent) -> KeyInput {
    if key.kind == KeyEventKind::Release {
        return KeyInput::None;
    }
    if is_interrupt(&key) {
        return KeyInput::Interrupt;
    }
    match key.code {
        KeyCode::Left | KeyCode::Backspace => KeyInput::Key('h'),
        KeyCode::Down => KeyInput::Key('j'),
        KeyCode::Up => KeyInput::Key('k'),
        KeyCode::Right => KeyInput::Key('l'),
        KeyCode::Esc => KeyInput::Cancel,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Key(c),
        _ => KeyInput::None,
    }
}

/// Maps a key event while a command line is being typed.
pub fn normalize_line(key: KeyEvent) -> KeyInput {
    if key.kind == KeyEventKind::Release {
        return KeyInput::None;
    }
    if is_interrupt(&key) {
        return KeyInput::Interrupt;
    }
    match key.code {
        KeyCode::Backspace => KeyInput::Erase,
        KeyCode::Enter => KeyInput::Submit,
        KeyCode::Esc => KeyInput::Cancel,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Key(c),
        _ => KeyInput::None,
    }
}

/// Decodes a scripted key string: `\n` submits and `\x1b` cancels.
pub fn script(keys: &str) -> impl Iterator<Item = KeyInput> + '_ {
    keys.chars().map(|c| match c {
        '\n' | '\r' => KeyInput::Submit,
        '\x1b' => KeyInput::Cancel,
        '\x08' | '\x7f' => KeyInput::Erase,
        c => KeyInput::Key(c),
    })
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_backspace_become_vim_keys() {
        assert_eq!(normalize(press(KeyCode::Left)), KeyInput::Key('h'));
        assert_eq!(normalize(press(KeyCode::Down)), KeyInput::Key('j'));
        assert_eq!(normalize(press(KeyCode::Up)), KeyInput::Key('k'));
        assert_eq!(normalize(press(KeyCode::Right)), KeyInput::Key('l'));
        assert_eq!(normalize(press(KeyCode::Backspace)), KeyInput::Key('h'));
        assert_eq!(normalize(press(KeyCode::Char('"'))), KeyInput::Key('"'));
    }

    #[test]
    fn line_editor_keeps_backspace_and_enter() {
        assert_eq!(normalize_line(press(KeyCode::Backspace)), KeyInput::Erase);
        assert_eq!(normalize_line(press(KeyCode::Enter)), KeyInput::Submit);
        assert_eq!(normalize_line(press(KeyCode::Left)), KeyInput::None);
        assert_eq!(normalize_line(press(KeyCode::Char('q'))), KeyInput::Key('q'));
    }

    #[test]
    fn ctrl_c_interrupts_in_every_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(normalize(ctrl_c), KeyInput::Interrupt);
        assert_eq!(normalize_line(ctrl_c), KeyInput::Interrupt);
    }

    #[test]
    fn scripts_decode_control_characters() {
        let keys: Vec<_> = script(":q\n\x1b").collect();
        assert_eq!(
            keys,
            vec![
                KeyInput::Key(':'),
                KeyInput::Key('q'),
                KeyInput::Submit,
                KeyInput::Cancel
            ]
        );
    }
}
