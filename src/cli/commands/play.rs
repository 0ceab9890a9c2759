//! Play command - interactive game against the minimax engine

use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;
use clap::Parser;
use log::warn;

use crate::{
    Error,
    cli::{commands::parse_player_token, output::render_board},
    pipeline::MinimaxAgent,
    ports::Agent,
    tictactoe::{Action, Board, Game, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the minimax engine")]
pub struct PlayArgs {
    /// Side the human plays (`x` moves first)
    #[arg(long, default_value = "x")]
    pub human: String,
}

/// Reads moves from a line-oriented input, re-prompting until one is legal
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> HumanAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    fn prompt(&mut self, board: &Board) -> Result<(), Error> {
        write!(
            self.output,
            "{}Your move as {} (row col): ",
            render_board(board),
            board
                .player_to_move()
                .map_or_else(|| "-".to_string(), |p| p.to_string())
        )
        .and_then(|()| self.output.flush())
        .map_err(Error::io("write move prompt"))
    }

    /// Next input line, decoded lossily so stray bytes become a bad move
    /// rather than a read failure. `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(Error::io("read move"))?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead + Send, W: Write + Send> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> Result<Action, Error> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        loop {
            self.prompt(board)?;

            let Some(line) = self.next_line()? else {
                return Err(Error::io("read move")(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                )));
            };

            let rejection = match line.parse::<Action>() {
                Ok(action) => match board.apply(action) {
                    Ok(_) => return Ok(action),
                    Err(err) => err,
                },
                Err(err) => err,
            };
            warn!("rejected move input {:?}: {rejection}", line.trim());
            writeln!(self.output, "{rejection}, try again")
                .map_err(Error::io("write move prompt"))?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human_side = parse_player_token(&args.human, "--human")?;
    let stdout = io::stdout();
    let mut human = HumanAgent::new(
        "Human".to_string(),
        BufReader::new(io::stdin()),
        stdout,
    );
    let mut engine = MinimaxAgent::new("Minimax".to_string());

    let game = play_game(human_side, &mut human, &mut engine)?;

    println!("\n{}", render_board(&game.board()));
    match game.outcome() {
        Outcome::Win(player) if player == human_side => println!("You win!"),
        Outcome::Win(player) => println!("{player} wins."),
        _ => println!("Draw."),
    }
    Ok(())
}

/// Drive one game to completion, `human` playing `human_side`.
pub fn play_game(
    human_side: Player,
    human: &mut dyn Agent,
    engine: &mut dyn Agent,
) -> Result<Game> {
    let mut game = Game::new();
    while let Some(mover) = game.board().player_to_move()
        && !game.outcome().is_over()
    {
        let board = game.board();
        let action = if mover == human_side {
            human.select_action(&board)?
        } else {
            let action = engine.select_action(&board)?;
            println!("{} plays {action}", engine.name());
            action
        };
        game.play(action)?;
    }
    Ok(game)
}
