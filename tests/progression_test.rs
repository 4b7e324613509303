//! Integration test: leveling across many battles

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use taskquest::character::{apply_xp, xp_for_next_level};
use taskquest::combat::Monster;
use taskquest::{GameEngine, GameEvent, GameState, Player};

#[test]
fn test_large_award_spans_levels() {
    let mut player = Player::new();

    // 100 (L1) + 200 (L2) + 300 (L3) = 600, plus 50 left over
    let levelups = apply_xp(&mut player, 650);

    assert_eq!(levelups, 3);
    assert_eq!(player.level, 4);
    assert_eq!(player.xp, 50);
    assert_eq!(player.max_hp, 160);
    assert_eq!(player.hp, 160);
}

#[test]
fn test_grinding_keeps_invariants() {
    let slime = Monster::new("s", "Slime", 10, 2, 0, 40, 3);
    let state = GameState::with_catalogs(vec![slime], Vec::new());
    let mut engine = GameEngine::with_rng(state, ChaCha8Rng::seed_from_u64(12));

    let level_ups = std::rc::Rc::new(std::cell::RefCell::new(0));
    let counter = std::rc::Rc::clone(&level_ups);
    engine.subscribe(move |e: &GameEvent| {
        if matches!(e, GameEvent::LeveledUp { .. }) {
            *counter.borrow_mut() += 1;
        }
    });

    for i in 0..30 {
        let quest = engine.on_quest_added(&format!("chore {}", i), "").unwrap();
        engine.on_quest_completed(&quest.id).unwrap();

        let p = engine.player();
        assert!(p.hp <= p.max_hp);
        assert!(p.xp < xp_for_next_level(p.level));
    }

    // 30 wins x 40 XP = 1200 XP: L1->L2 (100), L2->L3 (200), L3->L4 (300), L4->L5 (400)
    let p = engine.player();
    assert_eq!(p.level, 5);
    assert_eq!(p.xp, 200);
    assert_eq!(p.gold, 90);
    assert_eq!(*level_ups.borrow(), 4);
}
