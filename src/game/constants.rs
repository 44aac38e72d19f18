/// 游戏常量定义
///
/// 集中管理所有魔法数字

/// 每位玩家的配牌张数（台湾十六张）
pub const DEFAULT_HAND_TILE_COUNT: usize = 16;

/// 玩家数量
pub const DEFAULT_PLAYER_COUNT: usize = 4;

/// 开局必须掷的骰子数
pub const DICE_COUNT: usize = 2;

/// 开局时的庄家座位
pub const BANKER_SEAT: usize = 0;

/// 标准牌组总张数
pub const STANDARD_TILE_COUNT: usize = 144;

/// 单局事件推进的最大步数（防止回调驱动时无限循环）
pub const MAX_DRIVER_STEPS: usize = 10_000;
