use crate::game::error::GameError;
use crate::game::scoring::{PointCalculator, PointRules, ScoringContext};
use crate::game::state::GameState;
use crate::tile::Resolver;

/// 胡牌结算器
///
/// 计算每个赢家的台数，并按台数记录各座位的输赢：
/// 自摸由其他每家各付一份，放炮由放炮者独付。
pub struct Settlement;

impl Settlement {
    /// 构造某个赢家的计分上下文
    ///
    /// 杠上开花/杠上炮都取 `status.after_kong`：
    /// 自摸时当前玩家是赢家，放炮时当前玩家是放炮者。
    pub fn scoring_context(state: &GameState, seat: usize) -> Result<ScoringContext, GameError> {
        let player = state.player(seat)?;
        Ok(ScoringContext {
            is_banker: player.is_banker,
            self_drawn: state.result.discarding_player.is_none(),
            discard_area_len: state.status.discard_area.len(),
            wall_exhausted: state.status.wall.is_exhausted(),
            after_kong: state.status.after_kong,
            anyone_exposed: state.anyone_exposed(),
            player_count: state.meta.player_count,
            winning_tile: state.result.winning_tile,
        })
    }

    /// 结算
    ///
    /// # 参数
    ///
    /// - `state`: 游戏状态（`result.winners` 已登记赢家座位）
    /// - `resolver`: 牌型解析器
    /// - `rules`: 计分表
    ///
    /// 流局时各座位输赢均为 0
    pub fn settle(state: &mut GameState, resolver: &Resolver, rules: &PointRules) -> Result<(), GameError> {
        let player_count = state.meta.player_count;
        let mut payments = vec![0i64; player_count];
        if state.result.is_drawn_game {
            state.result.payments = payments;
            return Ok(());
        }

        let calculator = PointCalculator::new(resolver, rules);
        let seats: Vec<usize> = state.result.winners.keys().copied().collect();
        for seat in seats {
            let ctx = Self::scoring_context(state, seat)?;
            let result = calculator.calculate(&state.player(seat)?.hand, &ctx);
            let points = i64::from(result.points);

            match state.result.discarding_player {
                Some(discarder) => {
                    payments[discarder] -= points;
                    payments[seat] += points;
                }
                None => {
                    for other in (0..player_count).filter(|&p| p != seat) {
                        payments[other] -= points;
                        payments[seat] += points;
                    }
                }
            }
            state.result.winners.insert(seat, result);
        }
        state.result.payments = payments;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::options::GameOptions;
    use crate::game::scoring::{PointType, WinnerResult};
    use crate::tile::{parse_tiles, Tile};

    fn state_with_winner(seat: usize, tiles: &[&str]) -> GameState {
        let mut state = GameState::new(&GameOptions::ordered());
        state.players[seat].hand.add_tiles(&parse_tiles(tiles).unwrap());
        state.result.winners.insert(seat, WinnerResult::default());
        state
    }

    #[test]
    fn test_self_drawn_everyone_pays() {
        let mut state = state_with_winner(
            1,
            &["W1", "W2", "W3", "W4", "W5", "W6", "T2", "T3", "T4", "B7", "B8", "B9", "I1", "I1", "I1", "D3", "D3"],
        );
        state.status.discard_area = parse_tiles(&["T9", "B1", "W9", "I4", "D1"]).unwrap();
        state.result.winning_tile = Some(Tile::Dragon(3));

        Settlement::settle(&mut state, &Resolver::standard(), &PointRules::standard()).unwrap();

        let winner = &state.result.winners[&1];
        assert!(winner.conditions.contains(&PointType::SelfDrawn));
        assert!(winner.conditions.contains(&PointType::ConcealedHand));
        let points = i64::from(winner.points);
        assert_eq!(state.result.payments, vec![-points, 3 * points, -points, -points]);
    }

    #[test]
    fn test_discarder_pays_alone() {
        let mut state = state_with_winner(
            2,
            &["W1", "W2", "W3", "W4", "W5", "W6", "T2", "T3", "T4", "B7", "B8", "B9", "I1", "I1", "I1", "D3", "D3"],
        );
        state.result.discarding_player = Some(0);
        state.result.winning_tile = Some(Tile::Dragon(3));

        Settlement::settle(&mut state, &Resolver::standard(), &PointRules::standard()).unwrap();

        let points = i64::from(state.result.winners[&2].points);
        assert!(points > 0);
        assert!(!state.result.winners[&2].conditions.contains(&PointType::SelfDrawn));
        assert_eq!(state.result.payments, vec![-points, 0, points, 0]);
        assert_eq!(state.result.payments.iter().sum::<i64>(), 0);
    }

    #[test]
    fn test_drawn_game_pays_nothing() {
        let mut state = GameState::new(&GameOptions::ordered());
        state.result.is_drawn_game = true;
        Settlement::settle(&mut state, &Resolver::standard(), &PointRules::standard()).unwrap();
        assert_eq!(state.result.payments, vec![0; 4]);
        assert!(state.result.winners.is_empty());
    }

    #[test]
    fn test_scoring_context() {
        let mut state = GameState::new(&GameOptions::ordered());
        state.status.after_kong = true;
        state.result.discarding_player = Some(3);
        let ctx = Settlement::scoring_context(&state, 0).unwrap();
        assert!(ctx.is_banker);
        assert!(!ctx.self_drawn);
        assert!(ctx.after_kong);
        assert_eq!(ctx.player_count, 4);
        assert_eq!(Settlement::scoring_context(&state, 7), Err(GameError::InvalidPlayer));
    }
}
