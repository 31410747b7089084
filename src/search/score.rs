//! Score/path bookkeeping shared by both search engines

/// The result of evaluating a subtree: the backed-up score together with the
/// sequence of moves, in play order, that realizes it under optimal
/// continued play.
///
/// A fresh value is produced at every recursive return. Each level builds a
/// new path with its own chosen move prepended ([`ScoreMove::through`])
/// rather than mutating the callee's, so sibling branches never alias a
/// shared buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMove<M> {
    pub score: i32,
    pub path: Vec<M>,
}

impl<M: Copy> ScoreMove<M> {
    /// A leaf result: a score with no moves below it
    pub fn leaf(score: i32) -> Self {
        ScoreMove {
            score,
            path: Vec::new(),
        }
    }

    /// Extend a child result one ply upward: `[mv] ++ child.path` with the
    /// child's score carried through.
    pub fn through(mv: M, child: &ScoreMove<M>) -> Self {
        let mut path = Vec::with_capacity(child.path.len() + 1);
        path.push(mv);
        path.extend_from_slice(&child.path);
        ScoreMove {
            score: child.score,
            path,
        }
    }

    /// The first move on the path, if any
    pub fn first_move(&self) -> Option<M> {
        self.path.first().copied()
    }
}
