use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::tile::{DiscardCandidate, Tile};

/// 动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// 出牌
    Discard,
    /// 吃
    Chow,
    /// 碰
    Pung,
    /// 杠（明杠或暗杠）
    Kong,
    /// 胡
    Win,
    /// 听牌（出牌并宣告听牌）
    ReadyHand,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Discard => "discard",
            ActionKind::Chow => "chow",
            ActionKind::Pung => "pung",
            ActionKind::Kong => "kong",
            ActionKind::Win => "win",
            ActionKind::ReadyHand => "readyhand",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(ActionKind::Discard),
            "chow" => Ok(ActionKind::Chow),
            "pung" => Ok(ActionKind::Pung),
            "kong" => Ok(ActionKind::Kong),
            "win" => Ok(ActionKind::Win),
            "readyhand" => Ok(ActionKind::ReadyHand),
            _ => Err(GameError::InvalidAction),
        }
    }
}

/// 玩家当前可执行的动作
///
/// - 吃：`candidates` 为可与弃牌组成顺子的两张牌组合
/// - 暗杠：`candidates` 为 `[[杠的牌]]`
/// - 听牌：`ready_hand_candidates` 为 `{打出的牌 → 听的牌}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: ActionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Vec<Tile>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ready_hand_candidates: Vec<DiscardCandidate>,
}

impl Action {
    /// 无参数的动作
    pub fn new(name: ActionKind) -> Self {
        Self {
            name,
            candidates: Vec::new(),
            ready_hand_candidates: Vec::new(),
        }
    }

    /// 带候选牌组的动作
    pub fn with_candidates(name: ActionKind, candidates: Vec<Vec<Tile>>) -> Self {
        Self {
            name,
            candidates,
            ready_hand_candidates: Vec::new(),
        }
    }

    /// 听牌动作
    pub fn ready_hand(options: Vec<DiscardCandidate>) -> Self {
        Self {
            name: ActionKind::ReadyHand,
            candidates: Vec::new(),
            ready_hand_candidates: options,
        }
    }

    /// 参数是否与某个候选组合一致（与顺序无关）
    pub fn accepts(&self, params: &[Tile]) -> bool {
        let mut wanted = params.to_vec();
        wanted.sort_unstable();
        self.candidates.iter().any(|c| {
            let mut candidate = c.clone();
            candidate.sort_unstable();
            candidate == wanted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_names() {
        for kind in [
            ActionKind::Discard,
            ActionKind::Chow,
            ActionKind::Pung,
            ActionKind::Kong,
            ActionKind::Win,
            ActionKind::ReadyHand,
        ] {
            assert_eq!(kind.name().parse::<ActionKind>().unwrap(), kind);
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind));
        }
        assert_eq!("pass".parse::<ActionKind>(), Err(GameError::InvalidAction));
    }

    #[test]
    fn test_accepts_is_order_insensitive() {
        let action = Action::with_candidates(
            ActionKind::Chow,
            vec![vec![Tile::Wan(3), Tile::Wan(5)]],
        );
        assert!(action.accepts(&[Tile::Wan(5), Tile::Wan(3)]));
        assert!(!action.accepts(&[Tile::Wan(2), Tile::Wan(3)]));
        assert!(!action.accepts(&[]));
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_value(Action::new(ActionKind::Discard)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "discard" }));
    }
}
