use vimrogue_core::{
    Ability, ActionCommand, ActionOutcome, ActionRequest, CommandContext, EntityId, Env,
    ExecutableAction, ExecuteError, GameConfig, GameEngine, GameState, GridMap, InterpreterResult,
    InterpreterSession, ItemCatalog, Level, Position,
};

/// A parsed level plus one interpreter session for the player.
pub struct Harness {
    pub map: GridMap,
    pub items: ItemCatalog,
    pub state: GameState,
    pub config: GameConfig,
    pub session: InterpreterSession,
}

impl Harness {
    pub fn new(rows: &[&str]) -> Self {
        Self::with_config(rows, GameConfig::default())
    }

    pub fn with_config(rows: &[&str], config: GameConfig) -> Self {
        let items = ItemCatalog::standard();
        let Level { map, mut state } =
            Level::parse(rows, &items, &config).expect("level should parse");
        state.entities.player.abilities.push(Ability::Omnipotent);
        let session = InterpreterSession::new(&config);
        Self {
            map,
            items,
            state,
            config,
            session,
        }
    }

    pub fn position(&self) -> Position {
        self.state.player().position
    }

    /// Feeds every key and returns each classification.
    pub fn feed(&mut self, keys: &str) -> Vec<InterpreterResult> {
        keys.chars()
            .map(|key| self.session.feed(key, &self.state.entities.player))
            .collect()
    }

    /// Feeds `keys`, which must end in a resolved command.
    pub fn request(&mut self, keys: &str) -> ActionRequest {
        match self.feed(keys).pop() {
            Some(InterpreterResult::Resolved(request)) => request,
            other => panic!("{keys:?} did not resolve: {other:?}"),
        }
    }

    pub fn bind(&self, request: ActionRequest) -> ExecutableAction {
        let env = Env::with_all(&self.map, &self.items);
        let ctx = CommandContext::new(&self.state, &env, &self.config);
        request
            .into_action(EntityId::PLAYER, ctx)
            .expect("player is bound")
    }

    pub fn execute(&mut self, action: &ExecutableAction) -> Result<ActionOutcome, ExecuteError> {
        let env = Env::with_all(&self.map, &self.items).into_game_env();
        GameEngine::new(&mut self.state).execute(env, action)
    }

    /// Types, binds and executes one command.
    pub fn play(&mut self, keys: &str) -> Result<ActionOutcome, ExecuteError> {
        let request = self.request(keys);
        let action = self.bind(request);
        self.execute(&action)
    }
}
