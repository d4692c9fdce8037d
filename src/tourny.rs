use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::morpion::{BoardState, Mark, MoveError};
use crate::player::{MinimaxPlayer, Player, PlayerError, RandomPlayer};

/// Builds a fresh player from a game seed and a search depth.
pub type PlayerConstructor = fn(u64, usize) -> Box<dyn Player>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{ident} failed to move: {source}")]
    Player {
        ident: &'static str,
        #[source]
        source: PlayerError,
    },

    #[error("{ident} played an illegal move: {source}")]
    IllegalMove {
        ident: &'static str,
        #[source]
        source: MoveError,
    },
}

pub fn minimax_player(_seed: u64, depth: usize) -> Box<dyn Player> {
    Box::new(MinimaxPlayer::new(depth))
}

pub fn random_player(seed: u64, _depth: usize) -> Box<dyn Player> {
    Box::new(RandomPlayer::new(seed))
}

/// The automated players a round robin is run between.
pub fn roster() -> Vec<PlayerConstructor> {
    vec![minimax_player, random_player]
}

/// Play one game to the end, X first. `observe` sees the board before every
/// move and once more at the end.
pub fn play_out<'p>(
    player_x: &mut (dyn Player + 'p),
    player_o: &mut (dyn Player + 'p),
    mut observe: impl FnMut(&BoardState),
) -> Result<BoardState, GameError> {
    let mut board = BoardState::new();

    while !board.is_terminal() {
        observe(&board);

        let player = match board.turn() {
            Mark::X => &mut *player_x,
            Mark::O => &mut *player_o,
        };
        let ident = player.ident();

        let mov = player
            .make_move(board)
            .map_err(|source| GameError::Player { ident, source })?;

        board = board
            .apply_move(board.turn(), mov.x(), mov.y())
            .map_err(|source| GameError::IllegalMove { ident, source })?;

        info!(player = ident, mark = %!board.turn(), %mov, "played");
    }

    observe(&board);
    Ok(board)
}

/// Scores for (X, O): 1 for a win, 0.5 each for a draw.
pub fn run_game(
    cons_x: PlayerConstructor,
    cons_o: PlayerConstructor,
    seed: u64,
    depth: usize,
) -> Result<(f32, f32), GameError> {
    let mut player_x = cons_x(seed, depth);
    let mut player_o = cons_o(seed, depth);

    let end = play_out(player_x.as_mut(), player_o.as_mut(), |_| {})?;

    Ok(match end.winner() {
        Some(Mark::X) => (1.0, 0.0),
        Some(Mark::O) => (0.0, 1.0),
        None => (0.5, 0.5),
    })
}

/// Play `rounds` games with `cons_a` as X and update both Elo ratings.
pub fn run_match(
    cons_a: PlayerConstructor,
    cons_b: PlayerConstructor,
    elos: &mut FxHashMap<&'static str, f32>,
    rounds: usize,
    depth: usize,
) -> Result<(), GameError> {
    let ident_a = cons_a(0, depth).ident();
    let ident_b = cons_b(0, depth).ident();

    let elo_a = *elos.entry(ident_a).or_insert(1000.0);
    let elo_b = *elos.entry(ident_b).or_insert(1000.0);

    let q_a = 10.0f32.powf(elo_a / 400.0);
    let q_b = 10.0f32.powf(elo_b / 400.0);

    let e_a = q_a / (q_a + q_b); // expected result for player a
    let e_b = 1.0 - e_a;

    let mut s_a = 0.0;
    let mut s_b = 0.0;

    for round in 0..rounds {
        let round_score = run_game(cons_a, cons_b, round as u64, depth)?;
        s_a += round_score.0 / (rounds as f32);
        s_b += round_score.1 / (rounds as f32);
    }

    debug!(ident_a, ident_b, s_a, s_b, "match finished");

    let k = 32.0;

    *elos.entry(ident_a).or_insert(1000.0) += k * (s_a - e_a);
    *elos.entry(ident_b).or_insert(1000.0) += k * (s_b - e_b);

    Ok(())
}

/// Every player meets every other player once with each mark.
pub fn round_robin(
    players: &[PlayerConstructor],
    rounds: usize,
    depth: usize,
) -> Result<FxHashMap<&'static str, f32>, GameError> {
    let mut elos = FxHashMap::default();

    for (i, &a) in players.iter().enumerate() {
        for (j, &b) in players.iter().enumerate() {
            if i != j {
                run_match(a, b, &mut elos, rounds, depth)?;
            }
        }
    }

    Ok(elos)
}
