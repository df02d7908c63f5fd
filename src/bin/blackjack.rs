//! Terminal blackjack against the dealer.

use std::io::{self, BufRead, StdinLock, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjterm::{
    DEALER_MIN_VALUE, ExhaustionPolicy, Game, GameOptions, Participant, PlayerAction, Prompt,
    Render, Resolution, RoundResult, Session,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Play blackjack against the dealer in the terminal.")]
struct Cli {
    /// Player name. Prompted for when omitted.
    #[arg(long, short)]
    name: Option<String>,
    /// Shuffle seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// The dealer keeps hitting while below this total.
    #[arg(long, default_value_t = DEALER_MIN_VALUE)]
    dealer_threshold: u8,
    /// End the session instead of replenishing an exhausted deck.
    #[arg(long)]
    fail_on_exhaustion: bool,
    /// Do not clear the screen between views.
    #[arg(long)]
    no_clear: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut input = io::stdin().lock();

    clear_screen(!cli.no_clear);
    println!("Welcome to Blackjack!");

    let name = match cli.name {
        Some(name) => name,
        None => {
            let Some(name) = ask_name(&mut input) else {
                return ExitCode::SUCCESS;
            };
            name
        }
    };

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::debug!("starting session for {name} with seed {seed}");

    let exhaustion = if cli.fail_on_exhaustion {
        ExhaustionPolicy::Fail
    } else {
        ExhaustionPolicy::Replenish
    };
    let options = GameOptions::default()
        .with_dealer_hit_threshold(cli.dealer_threshold)
        .with_exhaustion(exhaustion);
    let mut game = Game::new(&name, options, seed);

    let mut session = Session::new(
        TerminalPrompt { input },
        TerminalRender {
            clear: !cli.no_clear,
        },
    );

    match session.run(&mut game) {
        Ok(summary) => {
            println!(
                "\nThanks for playing, {name}! Rounds: {}, won {}, lost {}, tied {}.",
                summary.rounds, summary.player_wins, summary.dealer_wins, summary.ties
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("session ended: {err}");
            eprintln!("Game error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn say(msg: &str) {
    println!("\n=> {msg}");
}

/// Reads one line without its line ending, or `None` once stdin is closed.
fn read_line(input: &mut StdinLock<'static>, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Accepts a name containing at least one letter or whitespace character.
fn accept_name(line: String) -> Option<String> {
    if !line.chars().any(|c| c.is_alphabetic() || c.is_whitespace()) {
        return None;
    }
    let trimmed = line.trim();
    Some(if trimmed.is_empty() {
        line
    } else {
        trimmed.to_string()
    })
}

fn ask_name(input: &mut StdinLock<'static>) -> Option<String> {
    loop {
        say("What is your name?");
        if let Some(name) = accept_name(read_line(input, "")?) {
            return Some(name);
        }
    }
}

fn clear_screen(enabled: bool) {
    if enabled {
        print!("\u{1b}[2J\u{1b}[H");
        let _ = io::stdout().flush();
    }
}

struct TerminalPrompt {
    input: StdinLock<'static>,
}

impl Prompt for TerminalPrompt {
    fn action(&mut self, _game: &Game) -> Option<PlayerAction> {
        loop {
            say("Would you like to hit or stay? [h/s]");
            let choice = read_line(&mut self.input, "")?.trim().to_lowercase();
            match choice.as_str() {
                "h" | "hit" => return Some(PlayerAction::Hit),
                "s" | "stay" | "stand" => return Some(PlayerAction::Stay),
                "q" | "quit" => return None,
                _ => println!("Please enter h or s."),
            }
        }
    }

    fn play_again(&mut self, game: &Game) -> bool {
        say(&format!(
            "Would you like to play again {}? (y/n)",
            game.player().name()
        ));
        read_line(&mut self.input, "")
            .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

struct TerminalRender {
    clear: bool,
}

impl Render for TerminalRender {
    fn show(&mut self, game: &Game) {
        clear_screen(self.clear);
        println!("{}", game.dealer().display());
        println!();
        println!("{}", game.player().full_hand_display());
    }

    fn announce(&mut self, game: &Game, result: &RoundResult) {
        let player = game.player().name();
        println!();
        match result.reason {
            Resolution::BothBlackjack => {
                println!("{player} and Dealer got blackjack! It's a tie!");
            }
            Resolution::PlayerBlackjack => println!("{player} got Blackjack!"),
            Resolution::DealerBlackjack => println!("Dealer hit Blackjack!"),
            Resolution::PlayerBust => {
                println!("{player} is bust!");
                println!("Dealer won!");
            }
            Resolution::DealerBust => {
                println!("Dealer is bust!");
                println!("{player} won!");
            }
            Resolution::PlayerHigher => println!("{player} won!"),
            Resolution::DealerHigher => println!("Dealer won!"),
            Resolution::EqualTotals => println!("It was a tie!"),
        }
    }
}
