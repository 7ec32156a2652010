use std::io;

use knockr_common::config::Config;
use knockr_common::target::{self, Target};
use tracing::{info, warn};

use crate::commands::{add, hash, knock, load_targets};
use crate::kprint;
use crate::terminal::{input, print};

/// What the user picked at the menu prompt.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Knock(usize),
    Add,
    Hash,
    Exit,
    Invalid,
}

fn parse_choice(input: &str, target_count: usize) -> Choice {
    match input.trim().to_uppercase().as_str() {
        "X" => Choice::Exit,
        "A" => Choice::Add,
        "H" => Choice::Hash,
        other => match other.parse::<usize>() {
            Ok(index) if (1..=target_count).contains(&index) => Choice::Knock(index),
            _ => Choice::Invalid,
        },
    }
}

/// The interactive loop. Returns after a knock sequence or on exit.
pub fn menu(cfg: &Config) -> anyhow::Result<()> {
    let mut targets: Vec<Target> = match load_targets(cfg)? {
        Some(targets) => {
            info!("{}", loaded_message(targets.len()));
            targets
        }
        None => Vec::new(),
    };
    kprint!();

    loop {
        show_options(&targets);

        let action: String = match input::read_line(" Choice: ") {
            Ok(action) => action,
            Err(e) if is_end_of_input(&e) => {
                kprint!();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        kprint!();

        match parse_choice(&action, targets.len()) {
            Choice::Exit => {
                print::print("Bye bye...");
                return Ok(());
            }
            Choice::Add => {
                print::header("add new target");
                let new_target: Target = add::prompt_target()?;
                add::save(&new_target, cfg)?;
                targets.push(new_target);
                kprint!();
                input::pause()?;
                kprint!();
            }
            Choice::Hash => {
                print::header("generate sha256 hash");
                hash::hash()?;
                kprint!();
                input::pause()?;
                kprint!();
            }
            Choice::Knock(index) => {
                if let Some(chosen) = target::select(&targets, index) {
                    knock::run_sequence(chosen, cfg)?;
                    print::end_of_program();
                }
                return Ok(());
            }
            Choice::Invalid => warn!("Invalid selection!"),
        }
    }
}

/// Only more than one target is plural, so zero reads "0 port knock target".
fn loaded_message(count: usize) -> String {
    let plural: &str = if count > 1 { "s" } else { "" };
    format!("Loaded {count} port knock target{plural} from file.")
}

fn show_options(targets: &[Target]) {
    if !targets.is_empty() {
        print::header("select existing target");
    }
    for (idx, target) in targets.iter().enumerate() {
        print::tree_head(idx + 1, &format!("Knock on {}", target.host()));
    }
    kprint!();
    print::header("select option");
    print::print(" [A] Add new target");
    print::print(" [H] Generate SHA256 hash");
    print::print(" [X] Exit");
    kprint!();
}

fn is_end_of_input(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}
