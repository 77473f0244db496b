mod depth_first_search;
mod ellers;
mod hunt_and_kill;
mod rnd_kruskals;
mod rnd_prims;
mod wilsons;

use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom as _, Rng as _};

pub use depth_first_search::DepthFirstSearch;
pub use ellers::Ellers;
pub use hunt_and_kill::HuntAndKill;
pub use rnd_kruskals::RndKruskals;
pub use rnd_prims::RndPrims;
pub use wilsons::Wilsons;

use crate::{
    board::Grid,
    dims::Dims,
    error::{AlgorithmKind, MazeError},
    visit::Painter,
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Builds a spanning tree over a freshly cleared grid.
///
/// Implementations leave every cell [`Visited`](crate::board::CellState::Visited);
/// marking the terminals is done by the caller.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenAlgorithm {
    #[default]
    DepthFirstSearch,
    Kruskal,
    Prim,
    Wilson,
    Eller,
    HuntAndKill,
}

impl GenAlgorithm {
    pub const ALL: [GenAlgorithm; 6] = [
        GenAlgorithm::DepthFirstSearch,
        GenAlgorithm::Kruskal,
        GenAlgorithm::Prim,
        GenAlgorithm::Wilson,
        GenAlgorithm::Eller,
        GenAlgorithm::HuntAndKill,
    ];

    pub fn generator(self) -> &'static dyn MazeGenerator {
        match self {
            GenAlgorithm::DepthFirstSearch => &DepthFirstSearch,
            GenAlgorithm::Kruskal => &RndKruskals,
            GenAlgorithm::Prim => &RndPrims,
            GenAlgorithm::Wilson => &Wilsons,
            GenAlgorithm::Eller => &Ellers,
            GenAlgorithm::HuntAndKill => &HuntAndKill,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GenAlgorithm::DepthFirstSearch => "DFS",
            GenAlgorithm::Kruskal => "Kruskal",
            GenAlgorithm::Prim => "Prim",
            GenAlgorithm::Wilson => "Wilson",
            GenAlgorithm::Eller => "Eller",
            GenAlgorithm::HuntAndKill => "Hunt and Kill",
        }
    }
}

impl fmt::Display for GenAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Ok(match key.as_str() {
            "dfs" | "depthfirstsearch" | "backtracker" => GenAlgorithm::DepthFirstSearch,
            "kruskal" | "kruskals" => GenAlgorithm::Kruskal,
            "prim" | "prims" => GenAlgorithm::Prim,
            "wilson" | "wilsons" => GenAlgorithm::Wilson,
            "eller" | "ellers" => GenAlgorithm::Eller,
            "huntandkill" => GenAlgorithm::HuntAndKill,
            _ => {
                return Err(MazeError::InvalidAlgorithm {
                    kind: AlgorithmKind::Generation,
                    name: s.to_string(),
                })
            }
        })
    }
}

/// Uniformly random cell for which `pred` holds, `None` if there is none.
///
/// When only a few cells qualify they are collected first, otherwise cells are
/// drawn until one fits.
pub(crate) fn random_cell_where(
    grid: &Grid,
    rng: &mut Random,
    pred: impl Fn(Dims) -> bool,
) -> Option<Dims> {
    let matching = grid.cells().filter(|&cell| pred(cell)).count();
    if matching == 0 {
        return None;
    }

    if matching < grid.cell_count() / 10 {
        let cells = grid.cells().filter(|&cell| pred(cell)).collect::<Vec<_>>();
        cells.choose(rng).copied()
    } else {
        loop {
            let Dims(w, h) = grid.size();
            let cell = Dims(rng.gen_range(0..w), rng.gen_range(0..h));
            if pred(cell) {
                return Some(cell);
            }
        }
    }
}

pub(crate) fn random_cell(grid: &Grid, rng: &mut Random) -> Dims {
    let Dims(w, h) = grid.size();
    Dims(rng.gen_range(0..w), rng.gen_range(0..h))
}
