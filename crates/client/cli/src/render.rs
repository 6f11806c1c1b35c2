//! Plain-text frame: map, status line, message log and command line.
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::app::{App, Mode};

/// Message lines shown under the map.
const MESSAGE_LINES: usize = 6;

pub fn frame_lines(app: &App) -> Vec<String> {
    let mut lines = app.view().render_rows();

    let player = app.state().player();
    let hp = player.stats.hp;
    lines.push(format!(
        "HP {}/{}  Turn {}  {}",
        hp.current,
        hp.maximum,
        app.state().turn.clock,
        app.pending()
    ));
    lines.extend(app.visible_messages(MESSAGE_LINES).iter().cloned());
    if let Mode::Line(line) = app.mode() {
        lines.push(line.clone());
    }
    lines
}

/// Redraws the whole screen.
pub fn draw(out: &mut impl Write, app: &App) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in frame_lines(app).iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimrogue_core::{GameConfig, ItemCatalog, Level};

    #[test]
    fn frame_has_map_status_and_line_editor() {
        let items = ItemCatalog::standard();
        let config = GameConfig::default();
        let level = Level::from_text("#####\n#@.!#\n#####\n", &items, &config).expect("level");
        let mut app = App::new(level, items, config);
        app.handle(crate::input::KeyInput::Key(':'));

        let lines = frame_lines(&app);
        assert_eq!(&lines[..3], &["#####", "#@.!#", "#####"]);
        assert_eq!(lines[3], "HP 20/20  Turn 0  ");
        assert_eq!(lines.last().map(String::as_str), Some(":"));
    }
}
