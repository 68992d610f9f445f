use std::io::{BufRead, Write};

use memora_core::*;

use crate::prompt::Prompter;
use crate::render::{INTRODUCTION, render_board};
use crate::settings::Settings;
use crate::vocabulary;

/// Sets up a game from `settings`, asking for whatever is missing, and plays it to the end.
pub(crate) fn run<R: BufRead, W: Write>(
    settings: &Settings,
    show_solution: bool,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let symbols = vocabulary::load(settings.symbols.as_deref())?;
    let size = match settings.size {
        Some(size) => BoardSize::new(size)?,
        None => prompter.ask_size()?,
    };
    let names = match &settings.players {
        Some(names) => names.clone(),
        None => {
            let count = prompter.ask_player_count()?;
            prompter.ask_names(count)?
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let mut pool = SymbolPool::new(symbols);
    let mut session = GameSession::generate(RandomBoardGenerator::new(seed), size, &mut pool, names)?;

    prompter.say(INTRODUCTION)?;
    if show_solution {
        prompter.say("pst, secret solution: ")?;
        prompter.say(render_board(&BoardView::from_solution(
            session.board().solution(),
        )))?;
    }

    play(&mut session, prompter)
}

/// Runs turns until every pair is found, then announces the winners.
pub(crate) fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    while !session.is_finished() {
        let name = session.active_player().name().to_string();
        prompter.say(format_args!("\n{name}'s Turn: "))?;
        prompter.say(render_board(&BoardView::from_session(session)))?;

        guess_until_accepted(session, prompter)?;
        guess_until_accepted(session, prompter)?;

        prompter.say(format_args!("\n{name}'s Guesses: "))?;
        prompter.say(render_board(&BoardView::from_session(session)))?;

        match session.resolve()? {
            Resolution::Match {
                game_over: false, ..
            } => prompter.say(format_args!("Match found. {name} can go again."))?,
            Resolution::Match { .. } => {}
            Resolution::Miss { .. } => prompter.say("No match found.")?,
        }
    }

    announce_winners(session, prompter)
}

fn guess_until_accepted<R: BufRead, W: Write>(
    session: &mut GameSession,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    loop {
        let coords = prompter.ask_coordinate()?;
        match session.guess(coords) {
            Ok(_) => return Ok(()),
            Err(err) if err.is_recoverable() => {
                prompter.say(format_args!("{err}. Please try again."))?
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn announce_winners<R: BufRead, W: Write>(
    session: &GameSession,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let winners = session.winners()?;
    let pairs = session.scores().max_matches();

    prompter.say("\nAll cards have been found.")?;
    if let [winner] = winners.as_slice() {
        prompter.say(format_args!("{} wins with {pairs} pairs!", winner.name()))?;
    } else {
        let names: Vec<_> = winners.iter().map(|player| player.name()).collect();
        prompter.say(format_args!(
            "{} tied with {pairs} pairs each!",
            names.join(" and ")
        ))?;
    }
    for winner in winners {
        let found: Vec<_> = winner.found().iter().map(Symbol::as_str).collect();
        prompter.say(format_args!("{} found {}", winner.name(), found.join(" ")))?;
    }
    Ok(())
}
