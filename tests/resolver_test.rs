use tw_mahjong::tile::DiscardCandidate;
use tw_mahjong::{parse_tiles, Hand, Resolver, Tile};

fn tiles(items: &[&str]) -> Vec<Tile> {
    parse_tiles(items).unwrap()
}

/// 测试听牌打法：打出 T1 后只听 D1
#[test]
fn test_ready_hand_by_discarding_t1() {
    let resolver = Resolver::standard();
    let mut hand = Hand::new();
    hand.add_tiles(&tiles(&[
        "T1", "T2", "T3", "T4", "T4", "T4", "W1", "W2", "W3", "W4", "W5", "W6", "W7", "W7", "W7", "D1",
    ]));

    let options = hand.figure_ready_hand(&resolver);
    assert!(options.contains(&DiscardCandidate {
        discard: Tile::Tong(1),
        candidates: vec![Tile::Dragon(1)],
    }));

    hand.discard(Tile::Tong(1)).unwrap();
    let resolved = resolver.resolve(&hand.tiles);
    assert!(!resolved.is_win);
    assert!(resolved.is_ready_hand);
    assert_eq!(resolved.ready_hand_candidates, vec![Tile::Dragon(1)]);
}

/// 测试十六张胡牌型：五组面子加一对雀头
#[test]
fn test_seventeen_tile_win() {
    let resolver = Resolver::standard();
    let hand = tiles(&[
        "W1", "W1", "W1", "W2", "W3", "W4", "T5", "T6", "T7", "B9", "B9", "B9", "I2", "I2", "I2", "D1",
        "D1",
    ]);
    let resolved = resolver.resolve(&hand);
    assert!(resolved.is_win);
    assert_eq!(resolved.eyes, vec![Tile::Dragon(1)]);
    assert_eq!(resolver.segments(&hand).map(|s| s.len()), Some(6));

    // 少一张 W1：万子与箭牌各带一对雀头，两处都可补成胡牌
    let mut waiting = hand.clone();
    waiting.remove(0);
    let resolved = resolver.resolve(&waiting);
    assert!(resolved.is_ready_hand);
    for tile in &resolved.ready_hand_candidates {
        let mut probe = waiting.clone();
        probe.push(*tile);
        assert!(resolver.is_win(&probe), "补 {} 应能胡", tile);
    }
    assert!(resolved.ready_hand_candidates.contains(&Tile::Wan(1)));
    assert!(resolved.ready_hand_candidates.contains(&Tile::Dragon(1)));
}

/// 测试花季牌不影响判定
#[test]
fn test_bonus_tiles_do_not_count() {
    let resolver = Resolver::standard();
    let with_flowers = tiles(&["F1", "W1", "W2", "W3", "S4", "D2", "D2"]);
    assert!(resolver.is_win(&with_flowers));
    assert_eq!(resolver.resolve(&with_flowers), resolver.resolve(&tiles(&["W1", "W2", "W3", "D2", "D2"])));
}

/// 测试解析结果的 JSON 形状
#[test]
fn test_resolved_state_json() {
    let resolver = Resolver::standard();
    let resolved = resolver.resolve(&tiles(&["W1", "W2", "D3", "D3"]));
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["is_win"], serde_json::json!(false));
    assert_eq!(json["is_ready_hand"], serde_json::json!(true));
    assert_eq!(json["ready_hand_candidates"], serde_json::json!(["W3"]));
}
