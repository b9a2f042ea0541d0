use eawase_core::{
    BackgroundImage, EngineEvent, GamePhase, Placement, PuzzleEngine, ROUND_SECONDS, TOTAL,
};

const CATALOG: &[BackgroundImage] = &[
    BackgroundImage {
        label: "Hana",
        slug: "hana",
        src: "assets/hana.jpg",
    },
    BackgroundImage {
        label: "Umi",
        slug: "umi",
        src: "assets/umi.jpg",
    },
    BackgroundImage {
        label: "Yama",
        slug: "yama",
        src: "assets/yama.jpg",
    },
];

fn engine() -> PuzzleEngine {
    PuzzleEngine::new(CATALOG, None)
}

/// Fixes positions left to right through the public swap primitive; the
/// final corrective swap is the one that wins the round. Returns the events
/// of that last swap.
fn solve_round(engine: &mut PuzzleEngine) -> Vec<EngineEvent> {
    let mut last = Vec::new();
    let mut wins = 0;
    for position in 0..TOTAL {
        if engine.placement().tile_at(position) == Some(position) {
            continue;
        }
        let source = (0..TOTAL)
            .find(|&candidate| engine.placement().tile_at(candidate) == Some(position))
            .expect("placement is a permutation");
        last = engine.swap(position, source);
        wins += last
            .iter()
            .filter(|event| matches!(event, EngineEvent::Won(_)))
            .count();
    }
    assert_eq!(wins, 1, "exactly one swap wins the round");
    last
}

#[test]
fn shuffle_is_a_permutation_and_never_identity() {
    for seed in 0..512 {
        let placement = Placement::shuffled(seed);
        let mut seen = [false; TOTAL];
        for &id in placement.tiles() {
            assert!(!seen[id], "seed {} duplicates tile {}", seed, id);
            seen[id] = true;
        }
        assert!(seen.iter().all(|present| *present));
        assert!(!placement.is_solved(), "seed {} started solved", seed);
    }
}

#[test]
fn swap_twice_restores_the_placement() {
    let mut placement = Placement::shuffled(7);
    let before = placement;
    assert!(placement.swap(2, 6));
    assert_ne!(placement, before);
    assert!(placement.swap(2, 6));
    assert_eq!(placement, before);
}

#[test]
fn initialize_emits_placement_and_full_clock() {
    let mut engine = engine();
    let events = engine.initialize(11);
    assert_eq!(
        events,
        vec![
            EngineEvent::PlacementChanged(*engine.placement()),
            EngineEvent::TimerTick("01:00".to_string()),
        ]
    );
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.remaining_seconds(), ROUND_SECONDS);
    let background = engine.background().expect("catalog is non-empty");
    assert!(CATALOG.iter().any(|entry| entry == background));
}

#[test]
fn same_seed_reproduces_the_round() {
    let mut first = engine();
    let mut second = engine();
    first.initialize(35);
    second.initialize(35);
    assert_eq!(first.placement(), second.placement());
    assert_eq!(first.background(), second.background());
}

#[test]
fn reselecting_the_same_position_clears_the_selection() {
    let mut engine = engine();
    engine.initialize(3);
    let before = *engine.placement();

    assert_eq!(engine.select_or_swap(3), vec![EngineEvent::TileSelected(3)]);
    assert_eq!(engine.selected(), Some(3));

    assert_eq!(
        engine.select_or_swap(3),
        vec![EngineEvent::TileDeselected(3)]
    );
    assert_eq!(engine.selected(), None);
    assert_eq!(*engine.placement(), before);
}

#[test]
fn selecting_two_positions_swaps_their_tiles() {
    let mut engine = engine();
    engine.initialize(5);
    let first = engine.placement().tile_at(0);
    let second = engine.placement().tile_at(1);

    engine.select_or_swap(0);
    let events = engine.select_or_swap(1);
    assert_eq!(events[0], EngineEvent::TileDeselected(0));
    assert_eq!(events[1], EngineEvent::PlacementChanged(*engine.placement()));
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.placement().tile_at(0), second);
    assert_eq!(engine.placement().tile_at(1), first);
}

#[test]
fn out_of_range_gestures_are_ignored() {
    let mut engine = engine();
    engine.initialize(9);
    let before = *engine.placement();
    assert!(engine.select_or_swap(TOTAL).is_empty());
    assert!(engine.swap(0, TOTAL).is_empty());
    assert!(engine.swap(TOTAL, TOTAL + 1).is_empty());
    assert_eq!(*engine.placement(), before);
}

#[test]
fn gestures_before_the_first_round_are_ignored() {
    let mut engine = engine();
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert!(engine.select_or_swap(0).is_empty());
    assert!(engine.swap(0, 1).is_empty());
}

#[test]
fn countdown_expires_exactly_once() {
    let mut engine = engine();
    engine.initialize(21);
    let generation = engine.timer_generation();

    for remaining in (1..ROUND_SECONDS).rev() {
        let events = engine.tick(generation);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            EngineEvent::TimerTick(format!("00:{:02}", remaining))
        );
    }
    assert_eq!(
        engine.tick(generation),
        vec![
            EngineEvent::TimerTick("00:00".to_string()),
            EngineEvent::TimeExpired,
        ]
    );
    assert_eq!(engine.phase(), GamePhase::TimedOut);
    assert!(engine.tick(generation).is_empty());
    assert!(engine.select_or_swap(0).is_empty());
    assert!(engine.swap(0, 1).is_empty());
}

#[test]
fn stale_ticks_from_an_abandoned_round_do_nothing() {
    let mut engine = engine();
    engine.initialize(13);
    let stale = engine.timer_generation();
    engine.initialize(14);
    let fresh = engine.timer_generation();

    assert!(engine.tick(stale).is_empty());
    assert_eq!(engine.remaining_seconds(), ROUND_SECONDS);
    assert_eq!(
        engine.tick(fresh),
        vec![EngineEvent::TimerTick("00:59".to_string())]
    );
}

#[test]
fn solving_wins_with_the_elapsed_time() {
    let mut engine = engine();
    engine.initialize(17);
    let generation = engine.timer_generation();
    engine.tick(generation);
    engine.tick(generation);

    let events = solve_round(&mut engine);
    let won_at = events.len() - 1;
    assert_eq!(events[won_at], EngineEvent::Won("00:02".to_string()));
    assert_eq!(events[won_at - 1], EngineEvent::BestTimeUpdated(2));
    assert_eq!(engine.phase(), GamePhase::Won);
    assert_eq!(engine.best().seconds(), Some(2));

    assert!(engine.swap(0, 1).is_empty());
    assert!(engine.tick(generation).is_empty());
}

#[test]
fn slower_completion_does_not_touch_the_record() {
    let mut engine = engine();
    engine.initialize(17);
    let generation = engine.timer_generation();
    engine.tick(generation);
    solve_round(&mut engine);
    assert_eq!(engine.best().seconds(), Some(1));

    engine.initialize(23);
    let generation = engine.timer_generation();
    for _ in 0..10 {
        engine.tick(generation);
    }
    let events = solve_round(&mut engine);
    assert!(events
        .iter()
        .all(|event| !matches!(event, EngineEvent::BestTimeUpdated(_))));
    assert_eq!(events.last(), Some(&EngineEvent::Won("00:10".to_string())));
    assert_eq!(engine.best().seconds(), Some(1));
}

#[test]
fn preloaded_record_survives_a_slower_win() {
    let mut engine = PuzzleEngine::new(CATALOG, Some(3));
    engine.initialize(29);
    let generation = engine.timer_generation();
    for _ in 0..5 {
        engine.tick(generation);
    }
    let events = solve_round(&mut engine);
    assert!(events
        .iter()
        .all(|event| !matches!(event, EngineEvent::BestTimeUpdated(_))));
    assert_eq!(engine.best().seconds(), Some(3));
}

#[test]
fn empty_catalog_leaves_the_background_unset() {
    let mut engine = PuzzleEngine::new(&[], None);
    engine.initialize(31);
    assert!(engine.background().is_none());
    assert_eq!(engine.phase(), GamePhase::Playing);
}
