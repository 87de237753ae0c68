//! Stdin/stdout interaction collaborator.

use std::io::{self, BufRead, Write};

use fairdice_core::{Dice, Interaction, Participant, Prompt, Reply, RoundEvent, RoundOutcome};

use crate::analytics;

/// Terminal front-end: prints the protocol transcript and reads the user's
/// selections. `X` exits, `?` shows the win-probability table.
pub struct Terminal {
    /// Full pool, kept for the help table.
    dice: Vec<Dice>,
}

impl Terminal {
    pub fn new(dice: Vec<Dice>) -> Self {
        Self { dice }
    }

    fn read_reply(&self) -> Reply {
        print!("Your selection: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF or a broken pipe means the counterpart is gone.
            Ok(0) | Err(_) => return Reply::Exit,
            Ok(_) => {}
        }

        match line.trim() {
            "X" | "x" | "exit" => Reply::Exit,
            "?" | "help" => Reply::Help,
            input => input.parse().map(Reply::Value).unwrap_or(Reply::Invalid),
        }
    }

    fn print_menu_footer(&self) {
        println!("X - exit");
        println!("? - help");
    }
}

impl Interaction for Terminal {
    fn request(&mut self, prompt: Prompt<'_>) -> Reply {
        match prompt {
            Prompt::TurnGuess => {
                println!("Try to guess my selection.");
                println!("0 - 0");
                println!("1 - 1");
                self.print_menu_footer();
            }
            Prompt::DiceSelection { pool } => {
                println!("Choose your dice:");
                for (index, dice) in pool.iter().enumerate() {
                    println!("{} - [{}]", index, dice);
                }
                self.print_menu_footer();
            }
            Prompt::Contribution { player, modulus } => {
                match player {
                    Participant::Computer => println!("It's time for my throw."),
                    Participant::User => println!("It's time for your throw."),
                }
                println!("Add a number modulo {}:", modulus);
                for value in 0..modulus {
                    println!("{} - {}", value, value);
                }
                self.print_menu_footer();
            }
        }
        self.read_reply()
    }

    fn help(&mut self) {
        print!("{}", analytics::render_table(&self.dice));
    }

    fn notify(&mut self, event: RoundEvent<'_>) {
        match event {
            RoundEvent::Committed { range, tag } => {
                println!(
                    "I selected a random value in the range 0..{} (HMAC={}).",
                    range - 1,
                    tag
                );
            }
            RoundEvent::Revealed { key, value } => {
                println!("My number is {} (KEY={}).", value, key);
            }
            RoundEvent::FirstMover { player, guess } => match player {
                Participant::User => println!("You guessed correctly! You go first."),
                Participant::Computer => {
                    println!("Your guess {} missed. I go first.", guess)
                }
            },
            RoundEvent::DiceAssigned { player, dice } => match player {
                Participant::User => println!("You chose the [{}] dice.", dice),
                Participant::Computer => println!("I choose the [{}] dice.", dice),
            },
            RoundEvent::Rolled {
                player,
                committed,
                contribution,
                face_index,
                throw,
                modulus,
            } => {
                println!(
                    "The result is {} + {} = {} (mod {}).",
                    committed, contribution, face_index, modulus
                );
                match player {
                    Participant::User => println!("Your throw is {}.", throw),
                    Participant::Computer => println!("My throw is {}.", throw),
                }
            }
            RoundEvent::InvalidInput => println!("Invalid selection. Try again."),
            RoundEvent::Finished {
                outcome,
                user_throw,
                computer_throw,
            } => match outcome {
                RoundOutcome::Win(Participant::User) => {
                    println!("You win ({} > {})!", user_throw, computer_throw)
                }
                RoundOutcome::Win(Participant::Computer) => {
                    println!("I win ({} > {})!", computer_throw, user_throw)
                }
                RoundOutcome::Tie => {
                    println!("It's a tie ({} = {})!", user_throw, computer_throw)
                }
                RoundOutcome::Aborted => {}
            },
        }
    }
}
