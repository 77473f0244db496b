use crate::dims::Dims;

/// Visual/progress state of a single cell.
///
/// `Terminal` is not a kind of `Visited`: predicates that look for visited
/// neighbors only accept `Visited` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Unvisited,
    Processing,
    Visited,
    Terminal,
    OnSolutionPath,
}

impl CellState {
    /// Whether a generator is done with the cell.
    pub fn is_settled(self) -> bool {
        !matches!(self, CellState::Unvisited | CellState::Processing)
    }

    /// Cells a renderer draws as part of the solution, terminals included.
    pub fn is_on_path(self) -> bool {
        matches!(self, CellState::Terminal | CellState::OnSolutionPath)
    }
}

/// Direction of a grid-adjacent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            CellWall::Left => Dims(-1, 0),
            CellWall::Right => Dims(1, 0),
            CellWall::Top => Dims(0, -1),
            CellWall::Bottom => Dims(0, 1),
        }
    }

    /// Order in which neighbors are listed everywhere in the crate.
    pub fn get_in_order() -> [CellWall; 4] {
        [CellWall::Left, CellWall::Right, CellWall::Top, CellWall::Bottom]
    }

    pub fn between(from: Dims, to: Dims) -> Option<CellWall> {
        match (to.0 - from.0, to.1 - from.1) {
            (-1, 0) => Some(CellWall::Left),
            (1, 0) => Some(CellWall::Right),
            (0, -1) => Some(CellWall::Top),
            (0, 1) => Some(CellWall::Bottom),
            _ => None,
        }
    }
}
