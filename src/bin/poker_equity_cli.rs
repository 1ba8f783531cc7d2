use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use poker_equity::api::{run_equity, EquityRequest, EquityResponse};
use poker_equity::engine::{
    parse_trial_count, SimulationConfig, SimulationError, SimulationSetup, Simulator,
};
use poker_equity::infra::init_logging;

/// Monte Carlo эквити для Texas Hold'em.
///
/// Карты: "Ace of spades", "10 of hearts" (или коротко "As", "Th"),
/// несколько карт: через запятую.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Карманные карты игрока; пустая строка: случайные. Повторять на каждого игрока.
    #[arg(short, long = "player", value_name = "CARDS")]
    players: Vec<String>,

    /// Флоп (до трёх карт).
    #[arg(long, default_value = "")]
    flop: String,

    /// Тёрн (одна карта).
    #[arg(long, default_value = "")]
    turn: String,

    /// Ривер (одна карта).
    #[arg(long, default_value = "")]
    river: String,

    /// Число симуляций.
    #[arg(short = 'n', long)]
    trials: Option<String>,

    /// Параллельные воркеры.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Seed для воспроизводимого прогона.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-файл с SimulationConfig (trials / workers / seed / exhaustion).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Печатать ответ в JSON.
    #[arg(long)]
    json: bool,

    /// Спросить всё интерактивно.
    #[arg(short, long)]
    interactive: bool,

    /// Подробный лог каждой раздачи.
    #[arg(short, long)]
    verbose: bool,

    /// Дублировать лог (уровень debug) в файл.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = init_logging(level, args.log_file.as_deref()) {
        eprintln!("[CLI] не удалось инициализировать лог: {e}");
    }

    let result = if args.interactive {
        interactive_loop(&args)
    } else {
        run_once(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {msg}");
            ExitCode::FAILURE
        }
    }
}

/// Один прогон по аргументам командной строки.
fn run_once(args: &Args) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => SimulationConfig::default(),
    };
    if let Some(raw) = &args.trials {
        config.trials = parse_trial_count(raw).map_err(|e| e.to_string())?;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let players = if args.players.is_empty() {
        vec![String::new(), String::new()]
    } else {
        args.players.clone()
    };

    let setup = SimulationSetup::parse_with_river(&players, &args.flop, &args.turn, &args.river)
        .map_err(|e| e.to_string())?;
    let report = Simulator::new(config)
        .run(&setup)
        .map_err(|e: SimulationError| e.to_string())?;

    if args.json {
        let response = EquityResponse::from(report);
        let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Интерактивный режим: спрашиваем игроков, борд и число симуляций,
/// после каждого прогона можно начать заново с чистого ввода.
fn interactive_loop(args: &Args) -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let num_players: usize = loop {
            let raw = prompt(&mut lines, "Enter number of players:")?;
            match raw.trim().parse() {
                Ok(n) if n > 0 => break n,
                _ => println!("Please enter a positive integer."),
            }
        };

        let mut players = Vec::with_capacity(num_players);
        for i in 0..num_players {
            players.push(prompt(
                &mut lines,
                &format!("Enter hole cards for Player {} (or press Enter to randomize):", i + 1),
            )?);
        }
        let flop = prompt(&mut lines, "Enter flop cards (or press Enter to randomize):")?;
        let turn = prompt(&mut lines, "Enter turn card (or press Enter to randomize):")?;
        let trials = prompt(&mut lines, "Enter number of simulations:")?;

        let request = EquityRequest {
            players,
            flop,
            turn,
            river: String::new(),
            trials,
            workers: args.workers,
            seed: args.seed,
        };
        match run_equity(&request, None) {
            Ok(response) => println!("\n{}\n", response.summary),
            Err(e) => println!("\nError: {e}\n"),
        }

        let again = prompt(&mut lines, "Run another simulation? [y/N]")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, question: &str) -> Result<String, String> {
    println!("{question}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    match lines.next() {
        Some(line) => line.map_err(|e| e.to_string()),
        None => Err("unexpected end of input".to_string()),
    }
}
