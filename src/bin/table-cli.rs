//! Interactive table demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{AccountStore, Card, RoundOutcome, RoundStatus, RoundView, Suit, Table, TableOptions};

fn main() {
    println!("Blackjack table demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);
    let player = table.accounts().open(500);

    loop {
        let balance = table.accounts().balance(player).unwrap_or(0);
        if balance == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_u64(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let mut view = match table.start_round(player, bet) {
            Ok(view) => view,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while view.status == RoundStatus::Active {
            print_table(&view);

            match prompt_line("Action (h/s/q): ").as_str() {
                "h" | "hit" => match table.hit(view.round_id, player) {
                    Ok(next) => view = next,
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => match table.stand(view.round_id, player) {
                    Ok(next) => view = next,
                    Err(err) => println!("Action error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&view);
        match view.result {
            Some(RoundOutcome::Win) => println!("You win!"),
            Some(RoundOutcome::Push) => println!("Push; stake returned."),
            Some(RoundOutcome::Lose) => println!("You lose."),
            None => {}
        }
        println!("Balance: {}", view.balance);
        println!();
    }
}

fn print_table(view: &RoundView) {
    print!("Dealer: ");
    print_hand(&view.dealer_hand, view.status == RoundStatus::Active);
    match view.dealer_value {
        Some(value) => println!("  ({value})"),
        None => println!(),
    }

    print!("You:    ");
    print_hand(&view.player_hand, false);
    println!("  ({})", view.player_value);
}

fn print_hand(cards: &[Card], hole_hidden: bool) {
    let labels: Vec<String> = cards.iter().map(card_label).collect();
    print!("{}", labels.join(" "));
    if hole_hidden {
        print!(" ??");
    }
}

fn card_label(card: &Card) -> String {
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    format!("{rank}{suit}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::from("q");
    }
    line.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    let line = prompt_line(prompt);
    if line == "q" || line == "quit" {
        return None;
    }
    line.parse().ok()
}
