use std::error::Error;

use taskquest::game::constants::APP_NAME;
use taskquest::{GameConfig, GameEngine, GameEvent, SaveStore};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("TaskQuest - finish your to-dos, slay monsters\n");
    println!("Usage: {} <command>\n", APP_NAME);
    println!("Commands:");
    println!("  status                      Show player stats");
    println!("  quests                      List pending quests");
    println!("  shop                        List items for sale");
    println!("  add <title> [description]   Add a quest");
    println!("  complete <quest-id>         Complete a quest and fight its monster");
    println!("  buy <item-id>               Buy an item");
    println!("  --help                      Show this help message");
    println!("\nEnvironment: TASKQUEST_SAVE_PATH, TASKQUEST_SEED, TASKQUEST_AUTOSAVE, RUST_LOG");
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let command = args.get(1).map(String::as_str).unwrap_or("status");
    if matches!(command, "--help" | "-h" | "help") {
        print_help();
        return Ok(());
    }

    let config = GameConfig::from_env()?;
    let store = SaveStore::from_config(&config)?;
    let mut engine = GameEngine::from_config(store.load_or_default()?, &config);
    engine.subscribe(|event: &GameEvent| println!("{}", event.message()));

    let mutated = match command {
        "status" => {
            let p = engine.player();
            println!(
                "Level {}  XP {}/{}  HP {}/{}  Gold {}",
                p.level,
                p.xp,
                taskquest::character::xp_for_next_level(p.level),
                p.hp,
                p.max_hp,
                p.gold
            );
            false
        }
        "quests" => {
            let pending = engine.pending_quests();
            if pending.is_empty() {
                println!("No pending quests.");
            }
            for quest in pending {
                let monster = engine
                    .state()
                    .find_monster(&quest.monster_id)
                    .map(|m| m.name.as_str())
                    .unwrap_or("?");
                println!("{}  {}  [{}]", quest.id, quest.title, monster);
            }
            false
        }
        "shop" => {
            for item in engine.state().items() {
                println!(
                    "{}  {}  +{} HP  {}g",
                    item.id, item.name, item.effect.hp_restore, item.price
                );
            }
            false
        }
        "add" => {
            let title = args.get(2).ok_or("add requires a title")?;
            let description = args.get(3).map(String::as_str).unwrap_or("");
            engine.on_quest_added(title, description)?;
            true
        }
        "complete" => {
            let id = args.get(2).ok_or("complete requires a quest id")?;
            let report = engine.on_quest_completed(id)?;
            for round in &report.rounds {
                println!(
                    "  round {}: dealt {} (monster {}), took {} (you {})",
                    round.round,
                    round.damage_dealt,
                    round.monster_hp,
                    round.damage_taken,
                    round.player_hp
                );
            }
            true
        }
        "buy" => {
            let id = args.get(2).ok_or("buy requires an item id")?;
            engine.on_purchase_requested(id)?;
            true
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run '{} --help' for usage.", APP_NAME);
            std::process::exit(1);
        }
    };

    if mutated && config.autosave {
        store.save(engine.state())?;
    }
    Ok(())
}
