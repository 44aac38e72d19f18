use serde::{Deserialize, Serialize};

use crate::game::action::{Action, ActionKind};
use crate::tile::Hand;

/// 玩家状态
///
/// `allowed_actions` 是唯一的合法性来源：只在进入对应的等待状态时由引擎填入，
/// 动作/响应被接受时立即清空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// 座位（0..玩家数）
    pub idx: usize,
    pub is_banker: bool,
    /// 已宣告听牌：之后摸到的牌自动打出（除非能胡）
    pub is_ready_hand: bool,
    pub hand: Hand,
    pub allowed_actions: Vec<Action>,
}

impl PlayerState {
    /// 创建新玩家
    pub fn new(idx: usize, is_banker: bool) -> Self {
        Self {
            idx,
            is_banker,
            is_ready_hand: false,
            hand: Hand::new(),
            allowed_actions: Vec::new(),
        }
    }

    /// 查找当前允许的某类动作
    pub fn allowed(&self, kind: ActionKind) -> Option<&Action> {
        self.allowed_actions.iter().find(|a| a.name == kind)
    }

    /// 是否允许某类动作
    pub fn is_allowed(&self, kind: ActionKind) -> bool {
        self.allowed(kind).is_some()
    }

    pub fn set_allowed_actions(&mut self, actions: Vec<Action>) {
        self.allowed_actions = actions;
    }

    pub fn clear_allowed_actions(&mut self) {
        self.allowed_actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_actions() {
        let mut player = PlayerState::new(1, false);
        assert!(!player.is_allowed(ActionKind::Discard));

        player.set_allowed_actions(vec![Action::new(ActionKind::Discard), Action::new(ActionKind::Win)]);
        assert!(player.is_allowed(ActionKind::Win));
        assert_eq!(player.allowed(ActionKind::Discard), Some(&Action::new(ActionKind::Discard)));
        assert!(player.allowed(ActionKind::Chow).is_none());

        player.clear_allowed_actions();
        assert!(player.allowed_actions.is_empty());
    }
}
