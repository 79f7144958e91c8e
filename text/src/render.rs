use shared::config::{CHAR_ALIVE, CHAR_DEAD};
use shared::{Grid, Simulation};

const CONTROLS: [&str; 6] = [
    "Controls:",
    "Space: Pause/Resume",
    "R: Reset grid with random cells",
    "C: Clear grid",
    "+/-: Adjust speed",
    "ESC, Q or Ctrl+C: Exit",
];

/// One line per grid row, `#` for alive and `.` for dead
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    grid.rows_iter()
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_alive() { CHAR_ALIVE } else { CHAR_DEAD })
                .collect()
        })
        .collect()
}

/// Full screen contents: grid, controls legend and status.
pub fn frame_lines(simulation: &Simulation) -> Vec<String> {
    let mut lines = grid_lines(simulation.grid());
    lines.push(String::new());
    lines.extend(CONTROLS.iter().map(|line| (*line).to_string()));
    lines.push(String::new());
    lines.push(format!(
        "Status: {}",
        if simulation.is_paused() { "Paused" } else { "Running" }
    ));
    lines.push(format!("Speed: {} updates/second", simulation.tick_rate()));
    lines.push(format!("Generation: {}", simulation.generation()));
    lines
}

/// Raw mode does not translate `\n`, so lines end with `\r\n`.
pub fn frame(simulation: &Simulation) -> String {
    let mut out = String::new();
    for line in frame_lines(simulation) {
        out.push_str(&line);
        out.push_str("\r\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CellState, Command, TickRate};

    #[test]
    fn test_grid_lines() {
        let grid = Grid::from_rows(vec![
            vec![CellState::Alive, CellState::Dead, CellState::Dead],
            vec![CellState::Dead, CellState::Dead, CellState::Alive],
        ]);
        assert_eq!(grid_lines(&grid), vec!["#..".to_string(), "..#".to_string()]);
    }

    #[test]
    fn test_frame_has_grid_and_status() {
        let mut simulation = Simulation::seeded(4, 6, 11);
        simulation.apply(Command::Clear, 1);

        let lines = frame_lines(&simulation);
        assert_eq!(&lines[..4], &["......"; 4]);
        assert!(lines.contains(&"Status: Running".to_string()));
        assert!(lines.contains(&"Speed: 10 updates/second".to_string()));
        assert!(lines.contains(&"Generation: 0".to_string()));

        simulation.apply(Command::TogglePause, 1);
        assert!(frame_lines(&simulation).contains(&"Status: Paused".to_string()));
    }

    #[test]
    fn test_frame_shows_slow_rate() {
        let mut simulation = Simulation::seeded(3, 3, 2);
        simulation.set_tick_rate(TickRate::from_interval(2.0));
        assert!(frame_lines(&simulation).contains(&"Speed: 0.50 updates/second".to_string()));
    }

    #[test]
    fn test_frame_uses_crlf() {
        let simulation = Simulation::seeded(2, 2, 1);
        let out = frame(&simulation);
        assert!(out.ends_with("\r\n"));
        assert_eq!(out.matches("\r\n").count(), frame_lines(&simulation).len());
    }
}
