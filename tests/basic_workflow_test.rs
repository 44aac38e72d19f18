use tw_mahjong::{ActionKind, EventKind, GameEngine, GameError, GameOptions, Tile};

/// 不洗牌开局：每家都是 W1..W9 T1..T7，庄家摸到 T8
fn ready_engine() -> GameEngine {
    let mut engine = GameEngine::new();
    engine.start_game(GameOptions::ordered()).unwrap();
    engine.ready().unwrap();
    engine
}

/// 测试开局发牌与庄家首摸
#[test]
fn test_banker_holds_seventeen_tiles() {
    let engine = ready_engine();

    let expected: Vec<Tile> = (1..=9).map(Tile::Wan).chain((1..=7).map(Tile::Tong)).collect();
    for seat in 1..4 {
        assert_eq!(engine.player(seat).unwrap().hand.sorted_tiles(), expected);
    }

    let banker = engine.current_player();
    assert!(banker.is_banker);
    assert_eq!(banker.hand.tiles.len(), 17, "庄家配牌 16 张加首摸 1 张");
    assert_eq!(banker.hand.draw, Some(Tile::Tong(8)));
    assert_eq!(banker.allowed_actions[0].name, ActionKind::Discard);
    assert_eq!(engine.state().status.wall.remaining_count(), 144 - 65);
}

/// 测试出牌、下家吃牌、再出牌的完整流程
#[test]
fn test_discard_then_chow() {
    let mut engine = ready_engine();

    engine.discard_tile(Tile::Wan(4)).unwrap();
    assert_eq!(engine.state().status.current_event, Some(EventKind::WaitForReaction));
    assert_eq!(engine.state().status.discard_area, vec![Tile::Wan(4)]);
    assert_eq!(engine.player(0).unwrap().hand.tiles.len(), 16);

    // 只有下家可以吃，三种组合
    let chow = engine
        .player(1)
        .unwrap()
        .allowed(ActionKind::Chow)
        .cloned()
        .expect("下家应可吃");
    assert_eq!(chow.candidates.len(), 3);
    assert!(engine.player(2).unwrap().allowed_actions.is_empty());
    assert!(engine.player(3).unwrap().allowed_actions.is_empty());

    // 对家不能吃
    assert_eq!(
        engine.react(Some(2), ActionKind::Chow, &[Tile::Wan(3), Tile::Wan(5)]),
        Err(GameError::InvalidReaction)
    );
    // 不在候选中的组合
    assert_eq!(
        engine.react(Some(1), ActionKind::Chow, &[Tile::Wan(1), Tile::Wan(2)]),
        Err(GameError::InvalidReaction)
    );
    assert_eq!(engine.state().status.discard_area, vec![Tile::Wan(4)]);

    engine
        .react(Some(1), ActionKind::Chow, &[Tile::Wan(3), Tile::Wan(5)])
        .unwrap();

    let player = engine.player(1).unwrap();
    assert_eq!(player.hand.straights, vec![[Tile::Wan(3), Tile::Wan(4), Tile::Wan(5)]]);
    assert_eq!(player.hand.tiles.len(), 14);
    assert!(!player.hand.exists(Tile::Wan(3)));
    assert!(!player.hand.exists(Tile::Wan(5)));
    assert!(engine.state().status.discard_area.is_empty());
    assert_eq!(engine.current_player().idx, 1);
    assert_eq!(player.allowed_actions[0].name, ActionKind::Discard);
    assert!(engine.player(0).unwrap().allowed_actions.is_empty());

    engine.discard_tile(Tile::Wan(1)).unwrap();
    assert_eq!(engine.player(1).unwrap().hand.tiles.len(), 13);
    assert_eq!(engine.state().status.discard_area, vec![Tile::Wan(1)]);
    assert!(engine.state().validate().is_ok());
}

/// 测试无人响应后轮到下家摸牌
#[test]
fn test_no_reaction_next_player_draws() {
    let mut engine = ready_engine();
    engine.discard_tile(Tile::Wan(9)).unwrap();
    engine.react(None, ActionKind::Discard, &[]).unwrap();

    assert_eq!(engine.current_player().idx, 1);
    assert_eq!(engine.current_player().hand.tiles.len(), 17);
    assert_eq!(
        engine.state().status.current_event,
        Some(EventKind::WaitForPlayerToDiscardTile)
    );
    for seat in [0, 2, 3] {
        assert!(engine.player(seat).unwrap().allowed_actions.is_empty());
    }
}

/// 测试听牌宣告后自动出牌
#[test]
fn test_ready_hand_declaration() {
    let mut engine = ready_engine();

    // 庄家打 W4 不成听牌
    assert_eq!(engine.ready_hand(Tile::Wan(4)), Err(GameError::InvalidAction));

    // 打 T8 听 T1/T4/T7
    engine.ready_hand(Tile::Tong(8)).unwrap();
    assert!(engine.player(0).unwrap().is_ready_hand);
    assert_eq!(engine.state().status.discard_area, vec![Tile::Tong(8)]);

    // 下家可以吃 T8（T6 T7）
    assert!(engine.player(1).unwrap().is_allowed(ActionKind::Chow));
    engine.react(None, ActionKind::Discard, &[]).unwrap();

    // 其余三家都打出摸到的牌且不响应，直到庄家再次摸牌
    let mut guard = 0;
    while !engine.state().status.discard_area.contains(&Tile::Tong(9)) {
        match engine.state().status.current_event {
            Some(EventKind::WaitForPlayerToDiscardTile) => {
                let draw = engine.current_player().hand.draw.unwrap();
                engine.discard_tile(draw).unwrap();
            }
            Some(EventKind::WaitForPlayerAction) => engine.act(ActionKind::Discard).unwrap(),
            Some(EventKind::WaitForReaction) => engine.react(None, ActionKind::Discard, &[]).unwrap(),
            other => panic!("unexpected event {:?}", other),
        }
        guard += 1;
        assert!(guard < 20);
    }

    // 庄家摸到 T9 不能胡，自动打出，没有停在出牌阶段
    assert_eq!(
        engine.state().status.discard_area,
        vec![Tile::Tong(8), Tile::Tong(8), Tile::Tong(8), Tile::Tong(8), Tile::Tong(9)]
    );
    let banker = engine.player(0).unwrap();
    assert!(banker.is_ready_hand);
    assert_eq!(banker.hand.tiles.len(), 16);
    assert!(!banker.hand.exists(Tile::Tong(9)));
    assert_eq!(engine.current_player().idx, 1);
    assert!(engine.state().validate().is_ok());
}

/// 测试不合法调用不改变状态
#[test]
fn test_invalid_calls_do_not_mutate() {
    let mut engine = ready_engine();
    let before = engine.state().clone();

    assert_eq!(
        engine.discard_tile(Tile::Dragon(2)),
        Err(GameError::PlayerLacksTile(Tile::Dragon(2)))
    );
    assert_eq!(engine.act(ActionKind::Win), Err(GameError::InvalidGameStatus));
    assert_eq!(
        engine.react(Some(1), ActionKind::Pung, &[]),
        Err(GameError::InvalidGameStatus)
    );
    assert_eq!(engine.player(9).err(), Some(GameError::InvalidPlayer));
    assert_eq!(engine.state(), &before);
}
