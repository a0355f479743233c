//! A 4-connected grid world read from a text map:
//!
//! ```text
//! S.#.G
//! ..#..
//! .....
//! ```
//!
//! `#` is a wall, `.` a free cell, `S` the start and `G` the goal. Moving
//! into a wall or off the map leaves the agent where it is. Every move costs
//! one unit of reward and the goal is terminal.

use crate::{
    mdp::{
        deterministic_transition, Action, EqualsCondition, FactoredModel, FullStateModel,
        GoalConditionTf, SADomain, SampleStateModel, StateTransitionProb, UniformCostRf,
        UniversalActionType,
    },
    search::{Heuristic, HeuristicValue},
    Error, Result,
};
use nom::{
    branch::alt,
    character::complete::{char, line_ending, multispace0},
    combinator::{all_consuming, value},
    multi::{many1, separated_list1},
    sequence::delimited,
    IResult,
};
use std::fmt::{self, Display, Formatter};

pub const NORTH: &str = "north";
pub const SOUTH: &str = "south";
pub const EAST: &str = "east";
pub const WEST: &str = "west";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridState {
    pub row: usize,
    pub col: usize,
}

impl GridState {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &GridState) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Display for GridState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Free,
    Start,
    Goal,
}

fn parse_cell(input: &str) -> IResult<&str, Cell> {
    alt((
        value(Cell::Wall, char('#')),
        value(Cell::Free, char('.')),
        value(Cell::Start, char('S')),
        value(Cell::Goal, char('G')),
    ))(input)
}

fn parse_rows(input: &str) -> IResult<&str, Vec<Vec<Cell>>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(line_ending, many1(parse_cell)),
        multispace0,
    ))(input)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    width: usize,
    height: usize,
    /// Row-major wall flags.
    walls: Vec<bool>,
    start: GridState,
    goal: GridState,
}

impl GridWorld {
    /// Parse a map. Rows must all have the same width and the map must
    /// contain exactly one start and one goal.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = match parse_rows(text) {
            Ok((_, rows)) => rows,
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let offset = text.len() - e.input.len();
                let line = text[..offset].matches('\n').count() + 1;
                return Err(Error::parse(
                    "grid world map",
                    format!(
                        "unexpected {:?} on line {}",
                        e.input.chars().next().unwrap_or(' '),
                        line
                    ),
                ));
            }
            Err(nom::Err::Incomplete(_)) => {
                return Err(Error::parse("grid world map", "incomplete input"))
            }
        };

        let height = rows.len();
        let width = rows[0].len();
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(Error::parse(
                "grid world map",
                format!(
                    "row {} has {} cells, expected {}",
                    row + 1,
                    rows[row].len(),
                    width
                ),
            ));
        }

        let find = |wanted: Cell| -> Vec<GridState> {
            rows.iter()
                .enumerate()
                .flat_map(|(r, cells)| {
                    cells
                        .iter()
                        .enumerate()
                        .filter(move |(_, cell)| **cell == wanted)
                        .map(move |(c, _)| GridState::new(r, c))
                })
                .collect()
        };
        let starts = find(Cell::Start);
        let start = match starts.as_slice() {
            [start] => *start,
            found => {
                return Err(Error::parse(
                    "grid world map",
                    format!("expected exactly one start cell, found {}", found.len()),
                ))
            }
        };
        let goals = find(Cell::Goal);
        let goal = match goals.as_slice() {
            [goal] => *goal,
            found => {
                return Err(Error::parse(
                    "grid world map",
                    format!("expected exactly one goal cell, found {}", found.len()),
                ))
            }
        };

        let walls = rows
            .iter()
            .flat_map(|cells| cells.iter().map(|&cell| cell == Cell::Wall))
            .collect();

        Ok(Self {
            width,
            height,
            walls,
            start,
            goal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridState {
        self.start
    }

    pub fn goal(&self) -> GridState {
        self.goal
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.walls[row * self.width + col]
    }

    /// The cell reached by moving in `direction`, or `state` itself if the
    /// move is blocked.
    pub fn step(&self, state: &GridState, direction: &str) -> Result<GridState> {
        let (row, col) = (state.row, state.col);
        let target = match direction {
            NORTH => row.checked_sub(1).map(|r| (r, col)),
            SOUTH => Some((row + 1, col)).filter(|&(r, _)| r < self.height),
            EAST => Some((row, col + 1)).filter(|&(_, c)| c < self.width),
            WEST => col.checked_sub(1).map(|c| (row, c)),
            other => return Err(Error::transition(format!("unknown grid move {}", other))),
        };
        Ok(match target {
            Some((r, c)) if !self.is_wall(r, c) => GridState::new(r, c),
            _ => *state,
        })
    }

    /// A single-agent domain with the four moves, reward -1 per move and
    /// the goal as the only terminal state.
    pub fn domain(&self) -> SADomain<GridState> {
        let model = FactoredModel::new(
            Box::new(self.clone()),
            Box::new(UniformCostRf::new()),
            Box::new(GoalConditionTf::new(Box::new(self.goal_condition()))),
        );
        [NORTH, SOUTH, EAST, WEST]
            .into_iter()
            .fold(SADomain::new(model), |domain, direction| {
                domain.with_action_type(Box::new(UniversalActionType::new(direction)))
            })
    }

    pub fn goal_condition(&self) -> EqualsCondition<GridState> {
        EqualsCondition::new(self.goal)
    }

    pub fn heuristic(&self) -> ManhattanHeuristic {
        ManhattanHeuristic { goal: self.goal }
    }

    /// The map with the cells of `path` (other than start and goal) marked
    /// with `*`.
    pub fn render(&self, path: &[GridState]) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for row in 0..self.height {
            let line: String = (0..self.width)
                .map(|col| {
                    let here = GridState::new(row, col);
                    if here == self.start {
                        'S'
                    } else if here == self.goal {
                        'G'
                    } else if self.is_wall(row, col) {
                        '#'
                    } else if path.contains(&here) {
                        '*'
                    } else {
                        '.'
                    }
                })
                .collect();
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl SampleStateModel<GridState> for GridWorld {
    fn sample_state_transition(&self, state: &GridState, action: &Action) -> Result<GridState> {
        self.step(state, action.name())
    }

    fn as_full(&self) -> Option<&dyn FullStateModel<GridState>> {
        Some(self)
    }
}

impl FullStateModel<GridState> for GridWorld {
    fn state_transitions(
        &self,
        state: &GridState,
        action: &Action,
    ) -> Result<Vec<StateTransitionProb<GridState>>> {
        deterministic_transition(self, state, action)
    }
}

/// Negated Manhattan distance to the goal. Admissible for unit move costs.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    goal: GridState,
}

impl Heuristic<GridState> for ManhattanHeuristic {
    fn evaluate(&self, state: &GridState) -> HeuristicValue {
        -(state.manhattan_distance(&self.goal) as HeuristicValue)
    }
}
