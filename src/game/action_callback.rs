use crate::game::action::ActionKind;
use crate::game::state::GameState;
use crate::tile::Tile;

/// 玩家在等待状态下的决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 摸牌后的自身动作（自摸、暗杠、放弃）
    Act(ActionKind),
    /// 出牌
    Discard(Tile),
    /// 出牌并宣告听牌
    ReadyHand(Tile),
    /// 响应别家的弃牌
    React { kind: ActionKind, tiles: Vec<Tile> },
    /// 不做任何动作
    Pass,
}

/// 动作回调示例
///
/// 提供两种简单策略，用于演示和压力测试整局流程
pub mod examples {
    use rand::seq::SliceRandom;
    use rand::Rng;

    use super::*;
    use crate::game::action::Action;
    use crate::game::event::EventKind;
    use crate::game::player::PlayerState;

    /// 随机回调：在允许的动作中随机选择
    pub fn random_action_callback(state: &GameState, seat: usize) -> Decision {
        let mut rng = rand::thread_rng();
        let Some(player) = state.players.get(seat) else {
            return Decision::Pass;
        };

        if state.status.current_event == Some(EventKind::WaitForReaction) {
            if rng.gen_bool(0.5) {
                return Decision::Pass;
            }
            return match player.allowed_actions.choose(&mut rng) {
                Some(action) => reaction_of(action, &mut rng),
                None => Decision::Pass,
            };
        }

        match player.allowed_actions.choose(&mut rng) {
            Some(action) => match action.name {
                ActionKind::Discard if state.status.current_event == Some(EventKind::WaitForPlayerAction) => {
                    Decision::Act(ActionKind::Discard)
                }
                ActionKind::Discard => match player.hand.tiles.choose(&mut rng) {
                    Some(&tile) => Decision::Discard(tile),
                    None => Decision::Pass,
                },
                ActionKind::ReadyHand => match action.ready_hand_candidates.choose(&mut rng) {
                    Some(option) => Decision::ReadyHand(option.discard),
                    None => Decision::Pass,
                },
                kind => Decision::Act(kind),
            },
            None => Decision::Pass,
        }
    }

    fn reaction_of<R: Rng>(action: &Action, rng: &mut R) -> Decision {
        let tiles = action.candidates.choose(rng).cloned().unwrap_or_default();
        Decision::React {
            kind: action.name,
            tiles,
        }
    }

    /// 简单策略回调
    ///
    /// - 能胡就胡，能杠就杠
    /// - 响应时碰优先于吃
    /// - 能听牌就听牌
    /// - 否则打出与其他牌关联最少的一张
    pub fn simple_strategy_callback(state: &GameState, seat: usize) -> Decision {
        let Some(player) = state.players.get(seat) else {
            return Decision::Pass;
        };

        for kind in [ActionKind::Win, ActionKind::Kong, ActionKind::Pung, ActionKind::Chow] {
            if let Some(action) = player.allowed(kind) {
                if state.status.current_event == Some(EventKind::WaitForReaction) {
                    return Decision::React {
                        kind,
                        tiles: action.candidates.first().cloned().unwrap_or_default(),
                    };
                }
                if matches!(kind, ActionKind::Win | ActionKind::Kong) {
                    return Decision::Act(kind);
                }
            }
        }

        match state.status.current_event {
            Some(EventKind::WaitForPlayerAction) => Decision::Act(ActionKind::Discard),
            Some(EventKind::WaitForPlayerToDiscardTile) => {
                if let Some(action) = player.allowed(ActionKind::ReadyHand) {
                    let best = action
                        .ready_hand_candidates
                        .iter()
                        .max_by_key(|c| c.candidates.len());
                    if let Some(option) = best {
                        return Decision::ReadyHand(option.discard);
                    }
                }
                least_connected_tile(player).map_or(Decision::Pass, Decision::Discard)
            }
            _ => Decision::Pass,
        }
    }

    /// 与手中其他牌关联最少的牌：相同的牌计 2 分，相差 1、2 的同花色数牌各计 1 分
    fn least_connected_tile(player: &PlayerState) -> Option<Tile> {
        let tiles = player.hand.sorted_tiles();
        tiles.iter().copied().min_by_key(|&tile| {
            tiles
                .iter()
                .map(|&other| {
                    if other == tile {
                        2
                    } else if other.suit() == tile.suit()
                        && tile.suit().allows_straight()
                        && other.rank().abs_diff(tile.rank()) <= 2
                    {
                        1
                    } else {
                        0
                    }
                })
                .sum::<u32>()
        })
    }
}

/// 动作回调 trait
///
/// 定义 `GameEngine::run` 向玩家询问决定的接口
pub trait ActionCallback {
    /// 根据游戏状态返回玩家的决定
    ///
    /// # 参数
    ///
    /// - `state`: 当前游戏状态
    /// - `seat`: 被询问的座位
    ///
    /// # 返回
    ///
    /// 玩家的决定
    fn decide(&mut self, state: &GameState, seat: usize) -> Decision;
}

/// 函数式动作回调适配器
///
/// 将函数转换为 ActionCallback trait
pub struct FnActionCallback<F> {
    callback: F,
}

impl<F> FnActionCallback<F>
where
    F: FnMut(&GameState, usize) -> Decision,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ActionCallback for FnActionCallback<F>
where
    F: FnMut(&GameState, usize) -> Decision,
{
    fn decide(&mut self, state: &GameState, seat: usize) -> Decision {
        (self.callback)(state, seat)
    }
}

#[cfg(test)]
mod tests {
    use super::examples::simple_strategy_callback;
    use super::*;
    use crate::game::game_engine::GameEngine;
    use crate::game::options::GameOptions;

    #[test]
    fn test_fn_callback_adapter() {
        let mut calls = 0;
        let mut callback = FnActionCallback::new(|_: &GameState, seat: usize| {
            calls += 1;
            Decision::Act(if seat == 0 { ActionKind::Win } else { ActionKind::Discard })
        });
        let state = GameState::new(&GameOptions::ordered());
        assert_eq!(callback.decide(&state, 0), Decision::Act(ActionKind::Win));
        assert_eq!(callback.decide(&state, 1), Decision::Act(ActionKind::Discard));
        drop(callback);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_simple_strategy_chows_when_offered() {
        let mut engine = GameEngine::new();
        engine.start_game(GameOptions::ordered()).unwrap();
        engine.ready().unwrap();
        engine.discard_tile(Tile::Wan(4)).unwrap();

        let decision = simple_strategy_callback(engine.state(), 1);
        assert!(matches!(decision, Decision::React { kind: ActionKind::Chow, ref tiles } if tiles.len() == 2));
        assert_eq!(simple_strategy_callback(engine.state(), 2), Decision::Pass);
    }

    #[test]
    fn test_simple_strategy_declares_ready_hand() {
        let mut engine = GameEngine::new();
        engine.start_game(GameOptions::ordered()).unwrap();
        engine.ready().unwrap();
        // 庄家 W1..W9 T1..T8：打 T8 即可听牌
        assert!(matches!(
            simple_strategy_callback(engine.state(), 0),
            Decision::ReadyHand(_)
        ));
    }
}
