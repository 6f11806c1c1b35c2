//! Game driver: feeds keys to the interpreter and executes what resolves.
use tracing::{debug, info};
use vimrogue_core::action::WaitAction;
use vimrogue_core::command::ScrollKind;
use vimrogue_core::nav::MatchCriterion;
use vimrogue_core::{
    ActionCommand, ActionKind, ActionRequest, CommandContext, EntityId, Env, ExecutableAction,
    GameConfig, GameEngine, GameState, GridMap, InterpreterResult, InterpreterSession, ItemCatalog,
    ItemOracle, Level, NavigationOracle, Signal, WorldView,
};

use crate::input::KeyInput;

/// Message log lines kept for scrolling.
const MESSAGE_CAPACITY: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Keystrokes go to the interpreter.
    Normal,
    /// A `:`, `/` or `?` line is being typed; holds the line so far.
    Line(String),
}

pub struct App {
    map: GridMap,
    items: ItemCatalog,
    state: GameState,
    config: GameConfig,
    session: InterpreterSession,
    mode: Mode,
    messages: Vec<String>,
    /// Lines scrolled back from the newest message.
    scroll: usize,
    running: bool,
}

impl App {
    pub fn new(level: Level, items: ItemCatalog, config: GameConfig) -> Self {
        let session = InterpreterSession::new(&config);
        Self {
            map: level.map,
            items,
            state: level.state,
            config,
            session,
            mode: Mode::Normal,
            messages: vec!["Welcome. Type :help for a list of commands.".to_owned()],
            scroll: 0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The partially typed command.
    pub fn pending(&self) -> String {
        self.session.buffer()
    }

    pub fn view(&self) -> WorldView<'_, GridMap, ItemCatalog> {
        WorldView::new(&self.state, &self.map, &self.items)
    }

    /// Up to `count` messages ending `scroll` lines before the newest.
    pub fn visible_messages(&self, count: usize) -> &[String] {
        let end = self.messages.len().saturating_sub(self.scroll);
        let start = end.saturating_sub(count);
        &self.messages[start..end]
    }

    pub fn handle(&mut self, input: KeyInput) {
        if input == KeyInput::Interrupt {
            self.running = false;
            return;
        }
        match self.mode {
            Mode::Normal => self.handle_normal(input),
            Mode::Line(_) => self.handle_line(input),
        }
    }

    fn handle_normal(&mut self, input: KeyInput) {
        let key = match input {
            KeyInput::Key(key) => key,
            KeyInput::Cancel => {
                self.session.reset();
                return;
            }
            _ => return,
        };

        if !self.state.player().is_alive() {
            self.notice("You are dead. Type :q to leave.");
            self.session.reset();
            if key == ':' {
                self.mode = Mode::Line(":".to_owned());
            }
            return;
        }

        match self.session.feed(key, &self.state.entities.player) {
            InterpreterResult::Pending {
                buffer,
                consumes_turn,
            } => {
                if consumes_turn {
                    self.execute(&keystroke_turn(buffer));
                }
            }
            InterpreterResult::Resolved(request) => self.perform(request),
            InterpreterResult::Rejected(error) => self.notice(error.to_string()),
        }
    }

    fn handle_line(&mut self, input: KeyInput) {
        let Mode::Line(line) = &mut self.mode else {
            return;
        };
        match input {
            KeyInput::Key(c) => line.push(c),
            KeyInput::Erase if line.len() > 1 => {
                line.pop();
            }
            KeyInput::Erase | KeyInput::Cancel => self.mode = Mode::Normal,
            KeyInput::Submit => {
                let line = std::mem::take(line);
                self.mode = Mode::Normal;
                match self
                    .session
                    .colon_command(&line, &self.state.entities.player)
                {
                    Ok(request) => self.perform(request),
                    Err(error) => self.notice(error.to_string()),
                }
            }
            KeyInput::Interrupt | KeyInput::None => {}
        }
    }

    fn perform(&mut self, request: ActionRequest) {
        let env = Env::with_all(&self.map, &self.items);
        let ctx = CommandContext::new(&self.state, &env, &self.config);
        match request.into_action(EntityId::PLAYER, ctx) {
            Ok(action) => self.execute(&action),
            Err(error) => self.notice(error.to_string()),
        }
    }

    fn execute(&mut self, action: &ExecutableAction) {
        let env = Env::with_all(&self.map, &self.items).into_game_env();
        let result = GameEngine::new(&mut self.state).execute(env, action);
        match result {
            Ok(outcome) => {
                for message in outcome.messages {
                    self.notice(message);
                }
                if let Some(signal) = outcome.signal {
                    self.apply_signal(signal);
                }
            }
            Err(error) => {
                debug!(text = %action.text, %error, "action refused");
                self.notice(error.action_error().to_string());
            }
        }
    }

    fn apply_signal(&mut self, signal: Signal) {
        match signal {
            Signal::EnterMode(leader) => self.mode = Mode::Line(leader.to_string()),
            Signal::ShowInventory(lines) | Signal::Help(lines) => {
                for line in lines {
                    self.notice(line);
                }
            }
            Signal::Observe => self.observe(),
            Signal::Scroll(kind) => self.scroll(kind),
            Signal::Save => self.notice("This client cannot save games."),
            Signal::SaveAndQuit => {
                self.notice("This client cannot save games.");
                self.running = false;
            }
            Signal::Quit { force } => {
                info!(force, "quit");
                self.running = false;
            }
            Signal::Stairs { up } => {
                let direction = if up { "up" } else { "down" };
                self.notice(format!("You take the stairs {direction}. The level ends here."));
                self.running = false;
            }
            Signal::Search { pattern, backwards } => self.search(&pattern, backwards),
        }
    }

    fn observe(&mut self) {
        let position = self.state.player().position;
        let names: Vec<String> = self
            .state
            .entities
            .items_at(position)
            .filter_map(|item| self.items.definition(item.handle))
            .map(|definition| definition.name.clone())
            .collect();
        if names.is_empty() {
            self.notice("There is nothing here.");
        } else {
            self.notice(format!("You see: {}.", names.join(", ")));
        }
    }

    fn scroll(&mut self, kind: ScrollKind) {
        let oldest = self.messages.len().saturating_sub(1);
        self.scroll = match kind {
            ScrollKind::Up => (self.scroll + 1).min(oldest),
            ScrollKind::Down => self.scroll.saturating_sub(1),
            ScrollKind::Bottom => 0,
        };
    }

    /// Counts cells drawn with the first character of `pattern`.
    fn search(&mut self, pattern: &str, backwards: bool) {
        let Some(glyph) = pattern.chars().next() else {
            self.notice("E35: No previous regular expression");
            return;
        };
        let origin = self.state.player().position;
        let view = self.view();
        let dims = view.dimensions();
        let limit = (dims.width * dims.height) as usize;
        let found = view
            .nearest_matches(origin, MatchCriterion::Glyph(glyph), limit, false)
            .len();
        let leader = if backwards { '?' } else { '/' };
        self.notice(format!("{leader}{pattern}: {found} match(es)"));
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        if self.messages.len() > MESSAGE_CAPACITY {
            let excess = self.messages.len() - MESSAGE_CAPACITY;
            self.messages.drain(..excess);
        }
        self.scroll = 0;
    }
}

/// A pending keystroke that costs a turn on its own.
fn keystroke_turn(buffer: String) -> ExecutableAction {
    ExecutableAction {
        actor: EntityId::PLAYER,
        kind: ActionKind::Wait(WaitAction {
            actor: EntityId::PLAYER,
        }),
        requirements: Vec::new(),
        consumes_turn: true,
        text: buffer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::script;

    fn app(rows: &str, config: GameConfig) -> App {
        let items = ItemCatalog::standard();
        let mut level = Level::from_text(rows, &items, &config).expect("valid level");
        level
            .state
            .entities
            .player
            .abilities
            .push(vimrogue_core::Ability::Omnipotent);
        App::new(level, items, config)
    }

    fn play(app: &mut App, keys: &str) {
        for input in script(keys) {
            app.handle(input);
        }
    }

    #[test]
    fn keys_move_the_player_and_advance_turns() {
        let mut app = app("@....\n", GameConfig::default());
        play(&mut app, "3l");
        assert_eq!(app.state().player().position.x, 3);
        assert_eq!(app.state().turn.clock, 1);
    }

    #[test]
    fn colon_line_quits() {
        let mut app = app("@....\n", GameConfig::default());
        play(&mut app, ":q");
        assert_eq!(app.mode(), &Mode::Line(":q".to_owned()));
        play(&mut app, "\n");
        assert!(!app.is_running());
    }

    #[test]
    fn unknown_line_is_reported() {
        let mut app = app("@....\n", GameConfig::default());
        play(&mut app, ":frob\n");
        assert!(app.is_running());
        assert_eq!(app.mode(), &Mode::Normal);
        let last = app.visible_messages(1);
        assert!(last[0].contains("frob"), "{last:?}");
    }

    #[test]
    fn keystroke_turns_spend_the_clock_on_pending_keys() {
        let mut app = app("@....\n", GameConfig::default().with_keystroke_turns(true));
        play(&mut app, "2l");
        assert_eq!(app.state().turn.clock, 2);
        play(&mut app, "\"al");
        assert_eq!(app.state().turn.clock, 2);
    }

    #[test]
    fn escape_drops_the_pending_command() {
        let mut app = app("@....\n", GameConfig::default());
        play(&mut app, "3d\x1b");
        assert!(app.pending().is_empty());
        play(&mut app, "l");
        assert_eq!(app.state().player().position.x, 1);
    }
}
