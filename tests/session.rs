extern crate reaction_ttt;

use itertools::Itertools;

use reaction_ttt::game::tic_tac_toe::{evaluate_outcome, Board, Glyphs, Outcome, Sign};
use reaction_ttt::game::{
    FinishedState, GameError, GameSession, GameState, GridIndex, MoveError, PlayersError,
};

const A: u64 = 1;
const B: u64 = 2;

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn owns_line(board: &Board, sign: Sign) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| *board[GridIndex::new(r, c)] == Some(sign)))
}

fn new_session() -> GameSession<u64> {
    GameSession::new(A, B).unwrap()
}

/// Plays `moves` alternating between A and B, starting with A.
fn play(session: &mut GameSession<u64>, moves: &[(usize, usize)]) -> GameState<u64> {
    let mut state = session.state().clone();
    for (i, &(row, col)) in moves.iter().enumerate() {
        let actor = if i % 2 == 0 { A } else { B };
        state = session.submit_move(row, col, &actor).unwrap();
    }
    state
}

#[test]
fn row_win_scenario() {
    let mut session = new_session();
    assert_eq!(session.submit_move(0, 0, &A), Ok(GameState::Turn(B)));
    assert_eq!(session.submit_move(1, 1, &B), Ok(GameState::Turn(A)));
    assert_eq!(session.submit_move(0, 1, &A), Ok(GameState::Turn(B)));
    assert_eq!(session.submit_move(2, 2, &B), Ok(GameState::Turn(A)));
    assert_eq!(
        session.submit_move(0, 2, &A),
        Ok(GameState::Finished(FinishedState::Win(A)))
    );

    // turn never advances to B
    assert_eq!(session.state(), &GameState::Finished(FinishedState::Win(A)));
    assert_eq!(session.submit_move(2, 0, &B), Err(GameError::GameAlreadyOver));
    assert_eq!(evaluate_outcome(session.board()), Outcome::WonBy(Sign::X));
}

#[test]
fn draw_scenario() {
    // X O X
    // X O O
    // O X X
    let mut session = new_session();
    let state = play(
        &mut session,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(state, GameState::Finished(FinishedState::Draw));
    assert_eq!(session.render(&Glyphs::plain()), "XOX\nXOO\nOXX");
}

#[test]
fn final_move_that_fills_the_board_wins() {
    // X O X
    // O X O
    // O X X  <- last X at (2, 2) completes the diagonal
    let mut session = new_session();
    let state = play(
        &mut session,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(state, GameState::Finished(FinishedState::Win(A)));
}

#[test]
fn second_player_can_win() {
    let mut session = new_session();
    let state = play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(state, GameState::Finished(FinishedState::Win(B)));
}

#[test]
fn same_player_twice_is_rejected() {
    assert_eq!(
        GameSession::new(A, A).unwrap_err(),
        GameError::InvalidPlayers(PlayersError::Duplicate)
    );
}

#[test]
fn occupied_cell_never_changes_the_board() {
    let mut session = new_session();
    play(&mut session, &[(1, 1), (0, 0)]);
    let before = session.board().clone();

    for (row, col) in [(1, 1), (0, 0)] {
        assert_eq!(
            session.submit_move(row, col, &A),
            Err(MoveError::CellIsOccupied { row, col }.into())
        );
        assert_eq!(session.board(), &before);
    }
    assert_eq!(session.state(), &GameState::Turn(A));
}

#[test]
fn wrong_actor_is_rejected_regardless_of_cell() {
    let mut session = new_session();
    play(&mut session, &[(1, 1)]);
    let before = session.board().clone();

    for (row, col) in [(0, 0), (1, 1), (5, 5)] {
        assert_eq!(
            session.submit_move(row, col, &A),
            Err(GameError::not_your_turn())
        );
    }
    assert_eq!(session.board(), &before);
    assert_eq!(session.state(), &GameState::Turn(B));
}

#[test]
fn render_is_stable() {
    let mut session = new_session();
    play(&mut session, &[(0, 0), (2, 2)]);
    let first = session.render(&Glyphs::default());
    assert_eq!(first, session.render(&Glyphs::default()));
    let (board, state) = session.current_state();
    assert_eq!(state, &GameState::Turn(A));
    assert_eq!(state.current_player(), Some(&A));
    assert_eq!(board, session.board());
}

#[test]
fn alternating_play_resolves_only_on_line_or_full_board() {
    let cells = (0..3usize).cartesian_product(0..3usize).collect::<Vec<_>>();

    for order in cells.iter().copied().permutations(cells.len()).step_by(97) {
        let mut session = new_session();
        let mut finished_at = None;

        for (i, &(row, col)) in order.iter().enumerate() {
            let actor = if i % 2 == 0 { A } else { B };
            if finished_at.is_some() {
                let before = session.board().clone();
                assert_eq!(
                    session.submit_move(row, col, &actor),
                    Err(GameError::GameAlreadyOver)
                );
                assert_eq!(session.board(), &before);
                continue;
            }

            let state = session.submit_move(row, col, &actor).unwrap();
            let board = session.board();
            let x_line = owns_line(board, Sign::X);
            let o_line = owns_line(board, Sign::O);
            let full = i + 1 == cells.len();
            assert!(!(x_line && o_line), "{order:?}");

            let expected = if x_line {
                GameState::Finished(FinishedState::Win(A))
            } else if o_line {
                GameState::Finished(FinishedState::Win(B))
            } else if full {
                GameState::Finished(FinishedState::Draw)
            } else {
                GameState::Turn(if actor == A { B } else { A })
            };
            assert_eq!(state, expected, "{order:?}");
            if state.is_finished() {
                finished_at = Some(i);
            }
        }
        assert!(finished_at.is_some(), "{order:?}");
    }
}
