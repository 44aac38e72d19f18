/// 游戏逻辑模块
///
/// 包含状态机、游戏状态、玩家、动作、计分和结算逻辑

pub mod action;
pub mod action_callback;
pub mod constants;
pub mod error;
pub mod event;
pub mod game_engine;
pub mod options;
pub mod player;
pub mod ready;
pub mod scoring;
pub mod settlement;
pub mod state;
