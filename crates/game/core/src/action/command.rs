use tracing::debug;

use super::kinds::{
    DeleteAction, InterfaceAction, InterfaceRequest, MoveAction, PutAction, SetMarkAction,
    StairsAction, SwapRegistersAction, UseItemAction, WaitAction, YankAction,
};
use super::{ActionKind, BindError, ExecutableAction};
use crate::command::{ActionRequest, Operand, Verb};
use crate::config::GameConfig;
use crate::env::{Env, ItemOracle, MapOracle, MapDimensions};
use crate::movement::PathResolver;
use crate::nav::{Path, WorldView};
use crate::state::{EntityId, GameState, Position};

/// Shared context available when materializing requests into executable actions.
pub struct CommandContext<'a, Env> {
    state: &'a GameState,
    env: &'a Env,
    config: &'a GameConfig,
}

impl<'a, Env> CommandContext<'a, Env> {
    pub fn new(state: &'a GameState, env: &'a Env, config: &'a GameConfig) -> Self {
        Self { state, env, config }
    }

    pub fn state(&self) -> &'a GameState {
        self.state
    }

    pub fn env(&self) -> &'a Env {
        self.env
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

/// Trait for higher-level commands that want to emit [`ExecutableAction`]s.
///
/// Binding only reads the state; [`GameEngine::execute`](crate::GameEngine::execute)
/// is the only place that mutates it.
pub trait ActionCommand<Env> {
    type Error;

    fn into_action(
        self,
        actor: EntityId,
        ctx: CommandContext<'_, Env>,
    ) -> Result<ExecutableAction, Self::Error>;
}

impl<M, I> ActionCommand<Env<'_, M, I>> for ActionRequest
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    type Error = BindError;

    fn into_action(
        self,
        actor: EntityId,
        ctx: CommandContext<'_, Env<'_, M, I>>,
    ) -> Result<ExecutableAction, Self::Error> {
        let state = ctx.state();
        let actor_state = state
            .entities
            .actor(actor)
            .ok_or(BindError::ActorNotFound(actor))?;
        let map = ctx.env().map()?;
        let view = WorldView::new(state, map, ctx.env().items()?);
        let max_range = actor_state.max_range(ctx.config().default_max_range);
        let resolver = PathResolver::new(&view, actor_state, max_range);
        let origin = actor_state.position;
        let consumes_turn = self.consumes_turn();

        let kind = match self.verb {
            Verb::Move(spec) => ActionKind::Move(MoveAction::new(actor, resolver.resolve(&spec))),
            Verb::Delete(Operand::Along(spec)) => {
                ActionKind::Delete(DeleteAction::along(actor, resolver.resolve(&spec)))
            }
            Verb::Delete(Operand::Line { count }) => ActionKind::Delete(DeleteAction::rows(
                actor,
                row_cells(map.dimensions(), origin, count.unwrap_or(1)),
            )),
            Verb::Yank(Operand::Along(spec)) => ActionKind::Yank(YankAction::new(
                actor,
                resolver.resolve(&spec),
                self.register,
            )),
            Verb::Yank(Operand::Line { .. }) => ActionKind::Yank(YankAction::new(
                actor,
                Path::stationary(origin),
                self.register,
            )),
            Verb::Put => ActionKind::Put(PutAction {
                actor,
                register: self.register,
            }),
            Verb::UseItem => ActionKind::UseItem(UseItemAction {
                actor,
                register: self.register,
            }),
            Verb::SetMark(name) => ActionKind::SetMark(SetMarkAction { actor, name }),
            Verb::Undo {
                target: Some(target),
            } => ActionKind::Move(MoveAction::new(actor, Path::line(origin, target))),
            Verb::Undo { target: None } | Verb::Wait => ActionKind::Wait(WaitAction { actor }),
            Verb::Stairs { up } => ActionKind::Stairs(StairsAction { actor, up }),
            Verb::SwapRegisters(first, second) => ActionKind::Swap(SwapRegistersAction {
                actor,
                first,
                second,
            }),
            Verb::EnterMode(mode) => interface(actor, InterfaceRequest::EnterMode(mode)),
            Verb::Scroll(kind) => interface(actor, InterfaceRequest::Scroll(kind)),
            Verb::ShowInventory => interface(actor, InterfaceRequest::ShowInventory),
            Verb::Observe => interface(actor, InterfaceRequest::Observe),
            Verb::Save => interface(actor, InterfaceRequest::Save),
            Verb::Quit { force } => interface(actor, InterfaceRequest::Quit { force }),
            Verb::SaveAndQuit => interface(actor, InterfaceRequest::SaveAndQuit),
            Verb::Help(topic) => interface(actor, InterfaceRequest::Help(topic)),
            Verb::Search {
                pattern,
                backwards,
            } => interface(
                actor,
                InterfaceRequest::Search {
                    pattern,
                    backwards,
                },
            ),
        };

        debug!(
            target: "vimrogue::binding",
            %actor,
            text = %self.text,
            kind = kind.as_snake_case(),
            consumes_turn,
            "bound request"
        );
        Ok(ExecutableAction {
            actor,
            kind,
            requirements: self.requirements,
            consumes_turn,
            text: self.text,
        })
    }
}

fn interface(actor: EntityId, request: InterfaceRequest) -> ActionKind {
    ActionKind::Interface(InterfaceAction { actor, request })
}

/// Every cell of `rows` rows starting at the actor's row, clipped to the grid.
fn row_cells(dimensions: MapDimensions, origin: Position, rows: u32) -> Path {
    let last_row = (origin.y as i64 + rows as i64).min(dimensions.height as i64) as i32;
    let cells = (origin.y..last_row)
        .flat_map(|y| (0..dimensions.width as i32).map(move |x| Position::new(x, y)))
        .collect();
    Path::covering(cells, origin)
}
