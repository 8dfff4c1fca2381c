//! Console blackjack round.
//!
//! This binary is the input/output collaborator around the engine: it reads
//! names, bets, and hit/stand commands with retry-on-bad-input loops, and
//! renders the snapshots the engine exposes after each phase.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Action, Bet, Card, Game, GameOptions, Outcome, Participant, Player, PlayerName, RoundResult,
    Suit,
};

fn main() {
    println!("Blackjack: one dealer, your table of players.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    for name in read_names() {
        let bet = read_bet(name.as_str());
        if let Err(err) = game.join(name, bet) {
            println!("{err}");
        }
    }

    if let Err(err) = game.deal() {
        println!("{err}");
        return;
    }

    print_initial_hands(&game);

    while let Some(index) = game.current_index() {
        let action = read_action(game.players()[index].name());
        let result = match action {
            Action::Hit => game.hit(index).map(|_| ()),
            Action::Stand => game.stand(index),
        };

        match result {
            Ok(()) => print_player_hand(&game.players()[index]),
            Err(err) => println!("{err}"),
        }
    }

    match game.dealer_play() {
        Ok(drawn) => {
            for _ in &drawn {
                println!("Dealer is under 17 and draws a card.");
            }
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    }

    match game.settle() {
        Ok(result) => print_results(&game, &result),
        Err(err) => println!("{err}"),
    }
}

/// Reads a comma-separated list of player names, re-prompting until every
/// name validates and at least one is given.
fn read_names() -> Vec<PlayerName> {
    loop {
        let line = prompt_line("Enter player names (comma separated): ");
        let mut names = Vec::new();
        let mut ok = true;

        for raw in line.split(',').filter(|raw| !raw.trim().is_empty()) {
            match PlayerName::new(raw) {
                Ok(name) => names.push(name),
                Err(err) => {
                    println!("{err}");
                    ok = false;
                    break;
                }
            }
        }

        if ok && !names.is_empty() {
            return names;
        }
        if ok {
            println!("At least one player is required.");
        }
    }
}

fn read_bet(name: &str) -> Bet {
    loop {
        let line = prompt_line(&format!("Bet for {name} (1000-100000): "));
        let amount = match line.parse::<u32>() {
            Ok(amount) => amount,
            Err(_) => {
                println!("Please enter a number.");
                continue;
            }
        };

        match Bet::new(amount) {
            Ok(bet) => return bet,
            Err(err) => println!("{err}"),
        }
    }
}

fn read_action(name: &str) -> Action {
    loop {
        let line = prompt_line(&format!("{name}: another card? (y/n): "));
        match line.parse::<Action>() {
            Ok(action) => return action,
            Err(err) => println!("{err}"),
        }
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

fn print_initial_hands(game: &Game) {
    let names: Vec<&str> = game.players().iter().map(Participant::name).collect();
    println!(
        "\nDealt two cards each to {} and the dealer.",
        names.join(", ")
    );

    println!("Dealer: {} ??", format_cards(game.dealer().visible_cards()));
    for player in game.players() {
        print_player_hand(player);
    }
    println!();
}

fn print_player_hand(player: &Player) {
    println!(
        "{}: {} (score {})",
        player.name(),
        format_cards(player.hand().cards()),
        player.hand().score()
    );
}

fn print_results(game: &Game, result: &RoundResult) {
    println!(
        "\nDealer: {} (score {})",
        format_cards(game.dealer().visible_cards()),
        result.dealer_score
    );
    if result.dealer_bust {
        println!("Dealer busts!");
    }

    println!(
        "Dealer result: {} wins, {} losses, {} pushes (net {:+})",
        result.dealer.wins, result.dealer.losses, result.dealer.pushes, result.dealer.net
    );

    for player in &result.players {
        let outcome = match player.outcome {
            Outcome::Win => "win",
            Outcome::Blackjack => "blackjack!",
            Outcome::Push => "push",
            Outcome::Lose => "lose",
        };
        println!(
            "{}: {} (score {}) - {} (payout {:+})",
            player.name,
            format_cards(&player.cards),
            player.score,
            outcome,
            player.payout
        );
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
