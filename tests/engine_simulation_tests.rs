// tests/engine_simulation_tests.rs
//
// Тесты Monte Carlo движка:
//
// 1) фиксированный роял у игрока: 100% эквити и победа;
// 2) роял на борде: сплит каждой раздачи, ничья;
// 3) сумма долей всегда равна числу раздач;
// 4) seed + воркеры дают воспроизводимый результат;
// 5) AA против KK сходится к известному эквити;
// 6) ошибки ввода (дубли, лишние карты, битые строки, число симуляций);
// 7) инварианты одной раздачи.

use std::collections::HashSet;

use poker_equity::domain::{Card, CardParseError, ExhaustionPolicy, Rank, Street, Suit};
use poker_equity::engine::{
    parse_trial_count, run_simulations, run_trial, CancelToken, EquityAccumulator,
    SimulationConfig, SimulationError, SimulationReport, SimulationSetup, Simulator, Verdict,
    MAX_PLAYERS,
};
use poker_equity::eval::HandCategory;
use poker_equity::infra::DeterministicRng;

fn seeded(trials: u64, workers: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        trials,
        workers,
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}

fn royal_setup() -> SimulationSetup {
    SimulationSetup::parse(
        &["Ace of spades, King of spades", ""],
        "Queen of spades, Jack of spades, 10 of spades",
        "",
    )
    .expect("valid setup")
}

//
// ---- Известные исходы ----
//

#[test]
fn fixed_royal_flush_always_wins() {
    let setup = royal_setup();
    assert_eq!(setup.street(), Street::Flop);

    for seed in 0..50 {
        let mut rng = DeterministicRng::from_seed(seed);
        let outcome = run_trial(&setup, ExhaustionPolicy::Refill, &mut rng).unwrap();
        assert_eq!(outcome.winners, vec![0]);
        assert_eq!(
            outcome.players[0].result.category,
            Some(HandCategory::RoyalFlush)
        );
    }

    let report = Simulator::new(seeded(200, 1, 9)).run(&setup).unwrap();
    assert_eq!(report.verdict, Verdict::Winner(0));
    assert_eq!(report.equity_of(0), Some(100.0));
    assert_eq!(report.equity_of(1), Some(0.0));
    assert_eq!(report.players[0].outright_wins, 200);
}

#[test]
fn run_simulations_renders_text_report() {
    let text = run_simulations(
        &["Ace of spades, King of spades", ""],
        "Queen of spades, Jack of spades, 10 of spades",
        "",
        1,
    )
    .unwrap();

    assert!(text.starts_with("Simulation Complete!"));
    assert!(text.contains("Total Simulations: 1"));
    assert!(text.contains("Player 1 Win Rate: 100.00%"));
    assert!(text.contains("Player 2 Win Rate: 0.00%"));
    assert!(text.ends_with("Player 1 is the overall winner!"));
}

#[test]
fn royal_on_board_splits_every_pot() {
    let setup = SimulationSetup::parse_with_river(
        &["", ""],
        "Ace of hearts, King of hearts, Queen of hearts",
        "Jack of hearts",
        "10 of hearts",
    )
    .unwrap();
    assert_eq!(setup.street(), Street::River);

    let report = Simulator::new(seeded(100, 1, 5)).run(&setup).unwrap();

    assert_eq!(report.verdict, Verdict::Draw(vec![0, 1]));
    for p in &report.players {
        assert_eq!(p.points, 50.0);
        assert_eq!(p.equity_pct, 50.0);
        assert_eq!(p.outright_wins, 0);
        assert_eq!(p.split_pots, 100);
    }
    let text = report.to_string();
    assert!(text.contains("Player 1 Win Rate: 50.00%"));
    assert!(text.ends_with("It's a draw between players: 1 2"));
}

#[test]
fn kings_and_queens_beat_kings_and_jacks() {
    let setup = SimulationSetup::parse_with_river(
        &["Queen of hearts, Queen of spades", "Jack of diamonds, Ace of clubs"],
        "King of clubs, King of diamonds, Jack of hearts",
        "2 of spades",
        "3 of spades",
    )
    .unwrap();

    let mut rng = DeterministicRng::from_seed(0);
    let outcome = run_trial(&setup, ExhaustionPolicy::Fail, &mut rng).unwrap();
    assert_eq!(outcome.winners, vec![0]);

    let simulator = Simulator::new(seeded(20, 2, 3));
    assert_eq!(simulator.config().trials, 20);
    assert_eq!(simulator.config().workers, 2);
    let report = simulator.run(&setup).unwrap();
    assert_eq!(report.verdict, Verdict::Winner(0));
    assert_eq!(report.equity_of(0), Some(100.0));
}

//
// ---- Накопитель и отчёт ----
//

#[test]
fn accumulator_keeps_exact_split_shares() {
    let mut acc = EquityAccumulator::new(3);
    acc.award(&[0]);
    acc.award(&[0, 1]);
    acc.award(&[0, 1, 2]);

    assert_eq!(acc.trials(), 3);
    assert_eq!(acc.total_points(), 3.0);
    assert_eq!(acc.outright_wins(0), 1);
    assert_eq!(acc.split_pots(0), 2);
    assert_eq!(acc.split_pots(2), 1);

    // lcm(1, 2, 3) = 6
    assert_eq!(acc.scaled_points(0), 6 + 3 + 2);
    assert_eq!(acc.scaled_points(1), 3 + 2);
    assert_eq!(acc.scaled_points(2), 2);
    assert!((acc.points(0) - (1.0 + 0.5 + 1.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn three_way_thirds_are_a_draw() {
    let mut acc = EquityAccumulator::new(3);
    for _ in 0..3 {
        acc.award(&[0, 1, 2]);
    }
    acc.award(&[2, 0, 1]);

    let report = SimulationReport::from_accumulator(&acc);
    assert_eq!(report.verdict, Verdict::Draw(vec![0, 1, 2]));
}

#[test]
fn accumulator_merge_adds_partials() {
    let mut a = EquityAccumulator::new(2);
    a.award(&[0]);
    let mut b = EquityAccumulator::new(2);
    b.award(&[1]);
    b.award(&[0, 1]);

    a.merge(&b);
    assert_eq!(a.trials(), 3);
    assert_eq!(a.points(0), 1.5);
    assert_eq!(a.points(1), 1.5);
    assert_eq!(a.total_points(), 3.0);

    let report = SimulationReport::from_accumulator(&a);
    assert_eq!(report.verdict, Verdict::Draw(vec![0, 1]));
}

#[test]
fn equity_sums_to_one_hundred_percent() {
    let setup = SimulationSetup::parse(&["", "", "", ""], "", "").unwrap();
    let report = Simulator::new(seeded(400, 2, 77)).run(&setup).unwrap();

    assert_eq!(report.trials, 400);
    let total_points: f64 = report.players.iter().map(|p| p.points).sum();
    let total_pct: f64 = report.players.iter().map(|p| p.equity_pct).sum();
    assert!((total_points - 400.0).abs() < 1e-6, "{total_points}");
    assert!((total_pct - 100.0).abs() < 1e-6, "{total_pct}");
}

//
// ---- Воспроизводимость и воркеры ----
//

#[test]
fn same_seed_same_report() {
    let setup = SimulationSetup::parse(&["Ace of hearts", "", ""], "", "").unwrap();

    let a = Simulator::new(seeded(300, 1, 42)).run(&setup).unwrap();
    let b = Simulator::new(seeded(300, 1, 42)).run(&setup).unwrap();
    assert_eq!(a, b);

    let c = Simulator::new(seeded(300, 4, 42)).run(&setup).unwrap();
    let d = Simulator::new(seeded(300, 4, 42)).run(&setup).unwrap();
    assert_eq!(c, d);
    assert_eq!(c.trials, 300);
}

#[test]
fn uneven_worker_split_plays_every_trial() {
    let setup = SimulationSetup::parse(&["", ""], "", "").unwrap();

    let report = Simulator::new(seeded(10, 3, 1)).run(&setup).unwrap();
    assert_eq!(report.trials, 10);

    // Воркеров больше, чем раздач.
    let report = Simulator::new(seeded(3, 8, 1)).run(&setup).unwrap();
    assert_eq!(report.trials, 3);
}

#[test]
fn aces_dominate_kings_preflop() {
    let setup = SimulationSetup::parse(
        &["Ace of spades, Ace of hearts", "King of spades, King of hearts"],
        "",
        "",
    )
    .unwrap();
    let report = Simulator::new(seeded(4_000, 4, 2024)).run(&setup).unwrap();

    let aces = report.equity_of(0).unwrap();
    assert!((76.0..=88.0).contains(&aces), "AA equity {aces}");
    assert_eq!(report.verdict, Verdict::Winner(0));
}

#[test]
fn cancelled_run_returns_error() {
    let setup = SimulationSetup::parse(&["", ""], "", "").unwrap();
    let token = CancelToken::new();
    let simulator = Simulator::new(SimulationConfig::with_trials(1_000)).with_cancel_token(token.clone());

    token.cancel();
    assert!(simulator.cancel_token().is_cancelled());
    assert!(matches!(simulator.run(&setup), Err(SimulationError::Cancelled)));
}

#[test]
fn zero_trials_rejected() {
    let setup = SimulationSetup::parse(&["", ""], "", "").unwrap();
    assert!(matches!(
        Simulator::new(SimulationConfig::with_trials(0)).run(&setup),
        Err(SimulationError::InvalidSimulationCount(_))
    ));
    assert!(matches!(
        run_simulations(&["", ""], "", "", 0),
        Err(SimulationError::InvalidSimulationCount(_))
    ));
}

//
// ---- Ошибки ввода ----
//

#[test]
fn trial_count_must_be_positive_integer() {
    for bad in ["abc", "-5", "0", "", "1.5"] {
        assert!(
            matches!(parse_trial_count(bad), Err(SimulationError::InvalidSimulationCount(_))),
            "{bad:?}"
        );
    }
    assert_eq!(parse_trial_count(" 100 ").unwrap(), 100);
}

#[test]
fn duplicate_fixed_card_is_rejected() {
    let spade_ace = Card::new(Rank::Ace, Suit::Spades);

    let err = SimulationSetup::parse(&["Ace of spades, King of spades", "Ace of spades"], "", "")
        .unwrap_err();
    assert!(matches!(err, SimulationError::DuplicateCard(c) if c == spade_ace));

    let err = SimulationSetup::parse(&["Ace of spades"], "ace of spades", "").unwrap_err();
    assert!(matches!(err, SimulationError::DuplicateCard(c) if c == spade_ace));
}

#[test]
fn player_limits_are_enforced() {
    let none: [&str; 0] = [];
    assert!(matches!(
        SimulationSetup::parse(&none, "", ""),
        Err(SimulationError::NoPlayers)
    ));

    let too_many = vec![""; MAX_PLAYERS + 1];
    assert!(matches!(
        SimulationSetup::parse(&too_many, "", ""),
        Err(SimulationError::TooManyPlayers(24))
    ));

    assert!(matches!(
        SimulationSetup::parse(&["", "2 of clubs, 3 of clubs, 4 of clubs"], "", ""),
        Err(SimulationError::TooManyHoleCards(2))
    ));
}

#[test]
fn board_limits_are_enforced() {
    assert!(matches!(
        SimulationSetup::parse(
            &[""],
            "2 of clubs, 3 of clubs, 4 of clubs, 5 of clubs",
            ""
        ),
        Err(SimulationError::TooManyBoardCards { flop: 4, .. })
    ));
    assert!(matches!(
        SimulationSetup::parse(&[""], "", "2 of clubs, 3 of clubs"),
        Err(SimulationError::TooManyBoardCards { .. })
    ));
}

#[test]
fn bad_card_text_fails_the_whole_run() {
    let err = run_simulations(&["Ace of spades, Knight of hearts", ""], "", "", 10).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidCardFormat(CardParseError::InvalidCardFormat(_))
    ));

    let err = SimulationSetup::parse(&[""], "", "Ace of stars").unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidCardFormat(CardParseError::InvalidSuit(_))
    ));
}

//
// ---- Одна раздача ----
//

#[test]
fn trial_deals_complete_distinct_hands() {
    let setup = SimulationSetup::parse(&["Ace of spades", "", ""], "2 of clubs", "").unwrap();
    assert_eq!(setup.street(), Street::Preflop);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let deuce = Card::new(Rank::Two, Suit::Clubs);

    for seed in 0..200 {
        let mut rng = DeterministicRng::from_seed(seed);
        let outcome = run_trial(&setup, ExhaustionPolicy::Fail, &mut rng).unwrap();

        assert_eq!(outcome.players.len(), 3);
        assert_eq!(outcome.board.len(), 5);
        assert_eq!(outcome.board[0], deuce);
        assert!(outcome.players[0].hole.contains(&ace));

        let mut seen = HashSet::new();
        for card in outcome
            .board
            .iter()
            .chain(outcome.players.iter().flat_map(|p| p.hole.iter()))
        {
            assert!(seen.insert(*card), "seed {seed}: {card} dealt twice");
        }
        assert_eq!(seen.len(), 11);

        let best = outcome.players.iter().map(|p| p.result.score).max().unwrap();
        assert!(!outcome.winners.is_empty());
        for (idx, p) in outcome.players.iter().enumerate() {
            assert_eq!(outcome.winners.contains(&idx), p.result.score == best);
        }
    }
}

#[test]
fn full_table_never_exhausts_the_deck() {
    let players = vec![""; MAX_PLAYERS];
    let setup = SimulationSetup::parse(&players, "", "").unwrap();

    let mut rng = DeterministicRng::from_seed(11);
    for _ in 0..50 {
        let outcome = run_trial(&setup, ExhaustionPolicy::Fail, &mut rng).unwrap();
        assert_eq!(outcome.players.len(), MAX_PLAYERS);
        assert_eq!(outcome.board.len(), 5);
    }
}

//
// ---- Конфиг ----
//

#[test]
fn config_from_json_fills_defaults() {
    let cfg = SimulationConfig::from_json_str(r#"{ "trials": 500, "workers": 4 }"#).unwrap();
    assert_eq!(cfg.trials, 500);
    assert_eq!(cfg.workers, 4);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.exhaustion, ExhaustionPolicy::Refill);

    let cfg = SimulationConfig::from_json_str(r#"{ "seed": 3, "exhaustion": "fail" }"#).unwrap();
    assert_eq!(cfg.trials, 10_000);
    assert_eq!(cfg.seed, Some(3));
    assert_eq!(cfg.exhaustion, ExhaustionPolicy::Fail);

    assert!(SimulationConfig::from_json_str("{ trials: }").is_err());
}
