extern crate clap;

use clap::{App, Arg};
use env_logger::Env;
use xfill::{
    words::load_words, BacktrackingFiller, Crossword, FillConfig, FillError, Filler, Puzzle,
};

fn main() -> Result<(), String> {
    let matches = App::new("xfill")
        .about("Fills a crossword structure with words from a word list")
        .arg(
            Arg::with_name("structure")
                .short("s")
                .long("structure")
                .value_name("FILE")
                .help("Grid structure: '_' blank, letters pre-filled, anything else blocked")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list, one word per line or a JSON array")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Also write the filled grid to this file, as plain text"),
        )
        .arg(
            Arg::with_name("budget")
                .short("b")
                .long("budget")
                .value_name("STEPS")
                .help("Give up after this many tentative assignments"),
        )
        .arg(
            Arg::with_name("no-forward-checking")
                .long("no-forward-checking")
                .help("Skip arc consistency during search")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log search progress")
                .takes_value(false),
        )
        .get_matches();

    let level = if matches.is_present("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let step_limit = match matches.value_of("budget") {
        Some(budget) => Some(
            budget
                .parse::<u64>()
                .map_err(|err| format!("Failed to parse budget: {}", err))?,
        ),
        None => None,
    };
    let config = FillConfig {
        forward_checking: !matches.is_present("no-forward-checking"),
        step_limit,
    };

    // both are required, so clap has already rejected their absence
    let structure = matches.value_of("structure").unwrap_or_default();
    let words = matches.value_of("words").unwrap_or_default();

    let structure = std::fs::read_to_string(structure)
        .map_err(|err| format!("Failed to read structure: {}", err))?;
    let crossword = Crossword::new(&structure).map_err(|err| err.to_string())?;
    let words = load_words(words).map_err(|err| err.to_string())?;
    let puzzle = Puzzle::from_crossword(crossword.clone(), words)
        .map_err(|err| err.to_string())?;

    log::info!(
        "{} variables, {} words",
        puzzle.variables().len(),
        puzzle.words().len()
    );

    let mut filler = BacktrackingFiller::new(config);
    match filler.fill(&puzzle) {
        Ok(assignment) => {
            let filled = crossword.fill(&assignment);
            print!("{}", filled);
            if let Some(output) = matches.value_of("output") {
                std::fs::write(output, filled.to_string())
                    .map_err(|err| format!("Failed to write output: {}", err))?;
            }
        }
        Err(FillError::Unsatisfiable) => println!("No solution."),
        Err(err @ FillError::BudgetExhausted { .. }) => println!("No solution: {}.", err),
    }
    Ok(())
}
