use thiserror::Error;

use crate::tile::Tile;

/// 游戏引擎错误
///
/// 所有错误都在修改状态之前检测并返回，相同状态下重复同一个非法调用总是得到同一个错误。
/// 牌墙耗尽不是错误，而是转入流局。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// 骰子数量不对（必须恰好两颗）
    #[error("exactly 2 dice are required")]
    InsufficientDice,
    /// 牌墙为空或不足以发牌
    #[error("the wall has no tiles to deal")]
    EmptyWall,
    /// 无效的玩家座位
    #[error("invalid player index")]
    InvalidPlayer,
    /// 当前不允许该动作
    #[error("action is not allowed now")]
    InvalidAction,
    /// 当前不允许该响应
    #[error("reaction is not allowed now")]
    InvalidReaction,
    /// 玩家手中没有这张牌
    #[error("player does not hold tile {0}")]
    PlayerLacksTile(Tile),
    /// 吃碰杠的牌数条件不满足
    #[error("meld precondition is not met")]
    MeldPrecondition,
    /// 当前事件状态不接受该调用
    #[error("invalid game status")]
    InvalidGameStatus,
    /// 无法解析的牌
    #[error("invalid tile notation: {0:?}")]
    InvalidTile(String),
    /// 无效的配置
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
