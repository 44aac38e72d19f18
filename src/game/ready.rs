use crate::game::action::{Action, ActionKind};
use crate::game::error::GameError;
use crate::game::player::PlayerState;
use crate::tile::{Resolver, Tile};

/// 听牌规则
///
/// 宣告听牌后玩家不能再换牌：只保留胡牌，其余情况自动打出摸到的牌。
pub struct ReadyChecker;

impl ReadyChecker {
    /// 过滤别家出牌后的响应
    ///
    /// 已听牌的玩家只能胡
    pub fn restrict_reactions(player: &PlayerState, reactions: Vec<Action>) -> Vec<Action> {
        if !player.is_ready_hand {
            return reactions;
        }
        reactions
            .into_iter()
            .filter(|a| a.name == ActionKind::Win)
            .collect()
    }

    /// 摸牌后的自身动作
    ///
    /// # 参数
    ///
    /// - `player`: 当前玩家
    /// - `resolver`: 牌型解析器
    ///
    /// # 返回
    ///
    /// 空表示没有可选动作，直接进入出牌阶段（已听牌的玩家则自动出牌）
    pub fn self_actions(player: &PlayerState, resolver: &Resolver) -> Vec<Action> {
        if !player.is_ready_hand {
            return player.hand.figure_actions(resolver);
        }
        if resolver.is_win(&player.hand.tiles) {
            vec![Action::new(ActionKind::Win), Action::new(ActionKind::Discard)]
        } else {
            Vec::new()
        }
    }

    /// 出牌阶段的可选动作：出牌，以及尚未听牌且有听牌打法时的听牌
    pub fn discard_actions(player: &PlayerState, resolver: &Resolver) -> Vec<Action> {
        let mut actions = vec![Action::new(ActionKind::Discard)];
        if !player.is_ready_hand {
            let options = player.hand.figure_ready_hand(resolver);
            if !options.is_empty() {
                actions.push(Action::ready_hand(options));
            }
        }
        actions
    }

    /// 校验听牌宣告：打出 `tile` 后必须听牌
    pub fn validate_declaration(player: &PlayerState, tile: Tile) -> Result<(), GameError> {
        let action = player.allowed(ActionKind::ReadyHand).ok_or(GameError::InvalidAction)?;
        if !player.hand.exists(tile) {
            return Err(GameError::PlayerLacksTile(tile));
        }
        if !action.ready_hand_candidates.iter().any(|c| c.discard == tile) {
            return Err(GameError::InvalidAction);
        }
        Ok(())
    }

    /// 听的牌（手牌为 3n+1 张时）
    pub fn waiting_tiles(player: &PlayerState, resolver: &Resolver) -> Vec<Tile> {
        resolver.resolve(&player.hand.tiles).ready_hand_candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::parse_tiles;

    fn player_with(items: &[&str]) -> PlayerState {
        let mut player = PlayerState::new(0, true);
        player.hand.add_tiles(&parse_tiles(items).unwrap());
        player
    }

    #[test]
    fn test_ready_player_only_wins() {
        let mut player = player_with(&["D2", "D2", "D2", "W1"]);
        let reactions = vec![
            Action::new(ActionKind::Win),
            Action::new(ActionKind::Kong),
            Action::new(ActionKind::Pung),
        ];
        assert_eq!(ReadyChecker::restrict_reactions(&player, reactions.clone()).len(), 3);

        player.is_ready_hand = true;
        let kept = ReadyChecker::restrict_reactions(&player, reactions);
        assert_eq!(kept, vec![Action::new(ActionKind::Win)]);
    }

    #[test]
    fn test_self_actions_for_ready_player() {
        let resolver = Resolver::standard();
        let mut player = player_with(&["W1", "W2", "W3", "D1"]);
        player.is_ready_hand = true;

        player.hand.deal(Tile::Tong(5));
        assert!(ReadyChecker::self_actions(&player, &resolver).is_empty());

        player.hand.discard_draw_tile().unwrap();
        player.hand.deal(Tile::Dragon(1));
        let kinds: Vec<ActionKind> = ReadyChecker::self_actions(&player, &resolver)
            .iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(kinds, vec![ActionKind::Win, ActionKind::Discard]);
    }

    #[test]
    fn test_discard_actions_offer_ready_hand() {
        let resolver = Resolver::standard();
        let player = player_with(&[
            "T1", "T2", "T3", "T4", "T4", "T4", "W1", "W2", "W3", "W4", "W5", "W6", "W7", "W7", "W7",
            "D1", "B9",
        ]);
        let actions = ReadyChecker::discard_actions(&player, &resolver);
        assert_eq!(actions[0].name, ActionKind::Discard);
        assert_eq!(actions[1].name, ActionKind::ReadyHand);

        let mut declared = player.clone();
        declared.is_ready_hand = true;
        assert_eq!(ReadyChecker::discard_actions(&declared, &resolver).len(), 1);
    }

    #[test]
    fn test_validate_declaration() {
        let resolver = Resolver::standard();
        let mut player = player_with(&[
            "T1", "T2", "T3", "T4", "T4", "T4", "W1", "W2", "W3", "W4", "W5", "W6", "W7", "W7", "W7",
            "D1", "T1",
        ]);
        assert_eq!(
            ReadyChecker::validate_declaration(&player, Tile::Tong(1)),
            Err(GameError::InvalidAction)
        );

        player.set_allowed_actions(ReadyChecker::discard_actions(&player, &resolver));
        assert!(ReadyChecker::validate_declaration(&player, Tile::Tong(1)).is_ok());
        assert_eq!(
            ReadyChecker::validate_declaration(&player, Tile::Bamboo(1)),
            Err(GameError::PlayerLacksTile(Tile::Bamboo(1)))
        );
    }

    #[test]
    fn test_waiting_tiles() {
        let resolver = Resolver::standard();
        let player = player_with(&[
            "T1", "T2", "T3", "T4", "T4", "T4", "W1", "W2", "W3", "W4", "W5", "W6", "W7", "W7", "W7",
            "D1",
        ]);
        assert_eq!(ReadyChecker::waiting_tiles(&player, &resolver), vec![Tile::Dragon(1)]);
    }
}
