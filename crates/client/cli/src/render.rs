//! Terminal rendering for the event stream and room views.
//!
//! All color goes through crossterm's [`Stylize`]; the core emits structured
//! events and this module turns them into the narrative lines the player
//! reads. Player successes are green, damage taken red, spell effects blue.

use crossterm::style::Stylize;

use depths_core::{
    CombatEvent, Direction, Event, Game, GameMode, PlayerClass, PlayerState, Room, World,
    WorldError,
};

/// Carrying this item makes dark rooms readable.
pub const TORCH_ITEM: &str = "Torch";

pub fn banner() {
    let title = r#"
╔══════════════════════════════════════════╗
║     Depths of the Forgotten (CLI)        ║
║            - Version 1.0 -               ║
╚══════════════════════════════════════════╝
"#;
    println!("{}", title.yellow().bold());
}

pub fn welcome() {
    println!("{}", "Welcome to the dungeon!".white());
}

pub fn farewell() {
    println!("\nThanks for playing!");
}

/// The room description, unless darkness hides it.
pub fn visible_description<'a>(room: &'a Room, player: &PlayerState) -> Option<&'a str> {
    if room.dark && !player.inventory.iter().any(|item| item == TORCH_ITEM) {
        return None;
    }
    Some(&room.description)
}

/// Exit listing with destination titles, e.g. `- North: Dark Corridor`.
pub fn exit_lines(room: &Room, world: &World) -> Result<Vec<String>, WorldError> {
    room.exits
        .iter()
        .map(|(&direction, target)| {
            let title = &world.room(target)?.title;
            Ok(format!("- {}: {}", direction_name(direction), title))
        })
        .collect()
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "North",
        Direction::South => "South",
        Direction::East => "East",
        Direction::West => "West",
    }
}

pub fn print_room(world: &World, room: &Room, player: &PlayerState) -> Result<(), WorldError> {
    println!("{}", format!("\n{}", room.title).yellow());

    match visible_description(room, player) {
        Some(description) => {
            println!("{}", description.white());

            if !room.items.is_empty() {
                println!("{}", "\nYou see:".cyan());
                for item in &room.items {
                    println!("- {item}");
                }
            }
            if let Some(npc) = &room.npc {
                println!("{}", format!("\n{} is here.", npc.name).white());
            }
        }
        None => println!("{}", "It's too dark to see anything!".red()),
    }

    let exits = exit_lines(room, world)?;
    if !exits.is_empty() {
        println!("{}", "\nExits:".cyan());
        for line in exits {
            println!("{line}");
        }
    }

    Ok(())
}

/// Option list shown when a fight starts.
pub fn print_combat_options(class: PlayerClass) {
    println!("{}", "\nCombat Options:".green());
    println!("- attack: Attack the enemy");
    if class == PlayerClass::Wizard {
        println!("- cast fireball: Cast a fireball spell");
        println!("- cast shield: Create a magical shield");
        println!("- cast heal: Heal yourself");
    }
    println!("- flee: Attempt to flee from combat");
}

fn print_combat_event(event: &CombatEvent) {
    match event {
        CombatEvent::PlayerHit { enemy, damage } => {
            println!("{}", format!("You hit {enemy} for {damage} damage!").green());
        }
        CombatEvent::PlayerMissed => println!("{}", "You missed!".red()),
        CombatEvent::FireballCast { damage } => {
            println!("{}", format!("You cast fireball for {damage} damage!").blue());
        }
        CombatEvent::ShieldRaised { .. } => {
            println!(
                "{}",
                "You create a magical shield that will reduce damage by 50% for 3 rounds.".blue()
            );
        }
        CombatEvent::Healed { amount } => {
            println!("{}", format!("You heal yourself for {amount} health.").blue());
        }
        CombatEvent::SpellFailed(failure) => println!("{}", failure.to_string().blue()),
        CombatEvent::FleeFailed => println!("{}", "You failed to flee!".red()),
        CombatEvent::Fled { enemy } => {
            println!("{}", format!("You successfully fled from {enemy}!").green());
        }
        CombatEvent::ShieldFaded => println!("{}", "Your shield fades away.".blue()),
        CombatEvent::EnemyHit { enemy, damage } => {
            println!("{}", format!("{enemy} hit you for {damage} damage!").red());
        }
        CombatEvent::EnemyMissed { enemy } => {
            println!("{}", format!("{enemy} missed!").green());
        }
        CombatEvent::EnemyDefeated { enemy } => {
            println!("{}", format!("You defeated {enemy}!").green());
        }
        CombatEvent::PlayerDefeated { enemy } => {
            println!("{}", format!("You have been defeated by {enemy}!").red());
        }
    }
}

fn print_usage(mode: GameMode) {
    let usage = match mode {
        GameMode::InCombat => "Valid actions: attack, cast <spell>, flee (:d debug, q quit)",
        _ => "Commands: n/s/e/w to move, :d to toggle debug, q to quit",
    };
    println!("{}", usage.cyan());
}

/// Render everything a dispatched command produced.
pub fn print_events(game: &Game, events: &[Event], elapsed_secs: u64) -> Result<(), WorldError> {
    for event in events {
        match event {
            Event::Moved { .. } => {
                print_room(game.world(), game.current_room()?, game.player())?;
            }
            Event::BlockedExit { direction } => {
                println!(
                    "{}",
                    format!("You can't go {direction} from here!").red()
                );
            }
            Event::CombatStarted { enemy, description } => {
                println!("{}", format!("\nCombat started with {enemy}!").red());
                println!("{}", description.as_str().red());
                print_combat_options(game.player().class);
            }
            Event::Combat(combat_event) => print_combat_event(combat_event),
            Event::DebugToggled { enabled } => {
                if *enabled {
                    print_debug_overlay(game, elapsed_secs);
                }
                println!("Debug mode: {}", if *enabled { "on" } else { "off" });
            }
            Event::UnknownCommand => print_usage(game.mode()),
        }
    }
    Ok(())
}

pub fn print_debug_overlay(game: &Game, elapsed_secs: u64) {
    let player = game.player();
    let mut lines = vec![
        "\n=== DEBUG INFO ===".to_string(),
        format!("Room: {}", player.current_room),
        format!("Mode: {:?}", game.mode()),
        format!("Steps: {}", player.steps_taken),
        format!("Health: {}", player.health()),
        format!("Mana: {}", player.mana()),
        format!("Inventory: {:?}", player.inventory),
        format!("Enemies Defeated: {}", player.enemies_defeated),
        format!("Items Used: {}", player.items_used),
        format!("Seed: {}", game.seed()),
        format!("Time Elapsed: {elapsed_secs}s"),
        "=================".to_string(),
    ];
    if let Some(session) = game.session() {
        lines.insert(
            7,
            format!(
                "Enemy: {} ({} hp)",
                session.enemy.name,
                session.enemy.health()
            ),
        );
    }
    for line in lines {
        println!("{}", line.magenta());
    }
}
