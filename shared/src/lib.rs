/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The grid is bounded: cells on the border simply have fewer neighbors.
*/

pub mod config;
pub mod grid;
pub mod simulation;

pub use grid::{CellState, Grid};
pub use simulation::{Command, Flow, Simulation, TickRate};
