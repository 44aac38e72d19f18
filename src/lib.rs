/// 台湾十六张麻将规则引擎
///
/// 回合制事件状态机 + 牌型解析（拆解、胡牌判定、听牌）

pub mod tile;
pub mod utils;
pub mod game;

// 重新导出常用类型
pub use tile::{parse_tiles, Hand, ResolvedState, Resolver, Suit, Tile, TileSetDef, Wall};
pub use game::action::{Action, ActionKind};
pub use game::action_callback::{ActionCallback, Decision, FnActionCallback};
pub use game::error::GameError;
pub use game::event::{EventKind, GameEvent};
pub use game::game_engine::GameEngine;
pub use game::options::GameOptions;
pub use game::player::PlayerState;
pub use game::ready::ReadyChecker;
pub use game::scoring::{PointCalculator, PointRules, PointType, WinnerResult};
pub use game::settlement::Settlement;
pub use game::state::{GameResult, GameState};
