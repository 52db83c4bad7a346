//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Actions, Card, CardShoe, Cue, DealError, Owner, SleepPacer, Suit, Table, TableEvent,
    TableOptions,
};

type CliTable = Table<CardShoe, SleepPacer>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let shoe = CardShoe::new(options.decks, seed);
    let mut table = Table::with_parts(options, shoe, SleepPacer);

    if let Err(err) = table.start() {
        println!("Start error: {err}");
        return;
    }

    loop {
        if let Err(err) = play_out(&mut table) {
            println!("Table error: {err}");
            return;
        }

        let actions = table.available_actions();
        println!("{}", format_actions(actions));
        let result = match prompt_line("Action: ").as_str() {
            "h" | "hit" => table.hit(),
            "s" | "stand" => table.stand(),
            "p" | "play" => table.play_again(),
            "q" | "quit" | "m" | "menu" => {
                let scores = table.cumulative_scores();
                println!(
                    "Final score: you {} - dealer {}",
                    scores.player_wins, scores.dealer_wins
                );
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action ignored: {err}");
        }
    }
}

/// Steps the table one unit at a time so pauses land between printed events.
fn play_out(table: &mut CliTable) -> Result<(), DealError> {
    while table.step()? {
        for event in table.drain_events() {
            print_event(&event);
        }
    }
    Ok(())
}

fn print_event(event: &TableEvent) {
    match *event {
        TableEvent::RoundStarted => println!("\n--- New round ---"),
        TableEvent::ShuffleTriggered => println!("* shuffling *"),
        TableEvent::CardDealt {
            owner,
            card,
            cards_remaining,
            ..
        } => {
            let shown = card.map_or_else(|| colorize("??", "90"), |card| format_card(&card));
            println!("{} gets {shown}  (shoe: {cards_remaining})", owner_name(owner));
        }
        TableEvent::HoleCardRevealed { card } => {
            println!("Dealer turns over {}", format_card(&card));
        }
        TableEvent::HandScoreChanged { owner, score } if score > 0 => {
            println!("{} count: {score}", owner_name(owner));
        }
        TableEvent::RoundResolved {
            outcome,
            scoreboard,
        } => {
            let code = match outcome.cue() {
                Cue::Win | Cue::Blackjack => "32",
                Cue::Draw => "33",
                Cue::Lose => "31",
            };
            println!("\n{}", colorize(outcome.message(), code));
            println!(
                "You: {}  Dealer: {}",
                scoreboard.player_wins, scoreboard.dealer_wins
            );
        }
        TableEvent::HandScoreChanged { .. } | TableEvent::ActionsChanged(_) => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

const fn owner_name(owner: Owner) -> &'static str {
    match owner {
        Owner::Dealer => "Dealer",
        Owner::Player => "You",
    }
}

fn format_actions(actions: Actions) -> String {
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("play again", "p", actions.play_again),
        format_action("menu", "m", actions.main_menu),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
