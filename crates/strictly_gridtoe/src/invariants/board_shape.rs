//! Board shape invariant: N² cells and 2N + 2 lines of the same dimension.

use super::Invariant;
use crate::GameSession;

/// Invariant: board and winning lines agree on the dimension.
pub struct BoardShapeInvariant;

impl Invariant<GameSession> for BoardShapeInvariant {
    fn holds(session: &GameSession) -> bool {
        let dimension = session.dimension();
        let n = dimension.get();
        let lines = session.win_conditions();

        session.board().cells().len() == dimension.cell_count()
            && lines.dimension() == dimension
            && lines.len() == dimension.line_count()
            && lines
                .conditions()
                .iter()
                .all(|c| c.indices().len() == n && c.indices().iter().all(|i| *i < n * n))
    }

    fn description() -> &'static str {
        "Board has N² cells and 2N + 2 winning lines"
    }
}
