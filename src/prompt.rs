//! Interactive puzzle and algorithm selection.
//!
//! Reads from any `BufRead` and writes prompts to any `Write` so the dialogue
//! can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use npuzzle::board::State;
use npuzzle::config::{PuzzleConfig, DEFAULT_PUZZLE};
use npuzzle::strategy::Strategy;

/// Reads one trimmed line, failing on end of input.
fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// The built-in puzzle, available only for the 8-puzzle.
pub fn default_puzzle(config: &PuzzleConfig) -> Result<State> {
    if config.cells() != DEFAULT_PUZZLE.len() {
        bail!(
            "the default puzzle is an 8-puzzle; use --tiles for a {}-puzzle",
            config.cells() - 1
        );
    }
    Ok(State::new(config, DEFAULT_PUZZLE.to_vec())?)
}

/// Asks for the default puzzle or a row-by-row custom one.
pub fn choose_puzzle(
    config: &PuzzleConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<State> {
    let tile_count = config.cells() - 1;
    writeln!(output, "Welcome to the {tile_count}-puzzle solver.")?;
    writeln!(
        output,
        "Type \"1\" to use a default puzzle, or \"2\" to enter your own puzzle."
    )?;
    output.flush()?;

    match read_line(input)?.as_str() {
        "1" => default_puzzle(config),
        "2" => {
            writeln!(output, "Enter elements for {tile_count} Puzzle.")?;
            writeln!(output, "NOTE: Use \"x\" for blank.\n")?;
            let mut rows = Vec::with_capacity(config.side());
            for row in 1..=config.side() {
                writeln!(output, "Enter elements for row {row}")?;
                output.flush()?;
                rows.push(read_line(input)?);
            }
            State::parse(config, &rows.join(" ")).context("invalid puzzle")
        }
        other => bail!("invalid choice {other:?}"),
    }
}

/// Asks which algorithm to run. Returns `None` for an unrecognised answer.
pub fn choose_strategy(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Strategy>> {
    writeln!(output, "Enter your choice of algorithm:")?;
    for (number, strategy) in Strategy::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", number + 1, strategy.description())?;
    }
    output.flush()?;

    let choice = read_line(input)?;
    Ok(match choice.as_str() {
        "1" => Some(Strategy::UniformCost),
        "2" => Some(Strategy::MisplacedTiles),
        "3" => Some(Strategy::Manhattan),
        _ => None,
    })
}
