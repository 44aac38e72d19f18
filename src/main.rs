/// 可执行文件入口：用简单策略跑一整局并输出结果

use tracing_subscriber::EnvFilter;
use tw_mahjong::game::action_callback::examples::simple_strategy_callback;
use tw_mahjong::{FnActionCallback, GameEngine, GameError, GameOptions};

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = GameOptions::shuffled();
    println!("台湾十六张：{} 张牌，骰子 {:?}", options.tiles.len(), options.dices);

    let mut engine = GameEngine::new();
    engine.start_game(options)?;

    let mut callback = FnActionCallback::new(simple_strategy_callback);
    let result = engine.run(&mut callback)?.clone();

    if result.is_drawn_game {
        println!("流局");
    }
    for (seat, winner) in &result.winners {
        println!("座位 {} 胡牌：{} 台 {:?}", seat, winner.points, winner.conditions);
    }
    println!("输赢：{:?}", result.payments);
    println!("剩余牌数：{}", engine.state().status.wall.remaining_count());
    Ok(())
}
