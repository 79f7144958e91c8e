use std::time::Instant;

use eframe::egui;
use eframe::egui::{Color32, Ui};
use shared::config::{COLOR_ALIVE, COLOR_BACKGROUND, COLOR_DEAD, COLOR_TEXT, GUI_RATE_STEP};
use shared::{Command, Flow, Simulation};

pub const WINDOW_TITLE: &str = "Conway's Game of Life";
const OVERLAY_OFFSET: f32 = 10.0;
const OVERLAY_FONT_SIZE: f32 = 18.0;
const OVERLAY_PADDING: f32 = 4.0;

/// Runs the graphical front-end until the window is closed.
///
/// Returns an error when the window or its rendering context cannot be created.
pub fn run(simulation: Simulation, cell_size: u32) -> Result<(), eframe::Error> {
    let cell_size = cell_size as f32;
    let width = simulation.grid().cols() as f32 * cell_size;
    let height = simulation.grid().rows() as f32 * cell_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!("opening {}x{} window", width, height);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GuiOfLife::new(cc, simulation, cell_size)))),
    )
}

/// Key binding for the window. Speed keys move the rate by [`GUI_RATE_STEP`].
pub fn command_for_key(key: egui::Key) -> Option<Command> {
    match key {
        egui::Key::Space => Some(Command::TogglePause),
        egui::Key::R => Some(Command::Reset),
        egui::Key::C => Some(Command::Clear),
        egui::Key::ArrowUp | egui::Key::Plus | egui::Key::Equals => Some(Command::Faster),
        egui::Key::ArrowDown | egui::Key::Minus => Some(Command::Slower),
        egui::Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Text drawn in the top-left corner
pub fn overlay_text(simulation: &Simulation) -> String {
    let speed = format!("Speed: {} FPS", simulation.tick_rate());
    if simulation.is_paused() {
        format!("{speed} (Paused)")
    } else {
        speed
    }
}

fn color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

struct GuiOfLife {
    simulation: Simulation,
    cell_size: f32,
    last_tick: Instant,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, simulation: Simulation, cell_size: f32) -> Self {
        Self {
            simulation,
            cell_size,
            last_tick: Instant::now(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let commands: Vec<Command> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => command_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            if self.simulation.apply(command, GUI_RATE_STEP) == Flow::Exit {
                log::info!("Escape pressed, exiting...");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn draw_grid(&self, ui: &mut Ui) {
        let grid = self.simulation.grid();

        // Calculate the grid starting point
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(
                self.cell_size * grid.cols() as f32,
                self.cell_size * grid.rows() as f32,
            ),
            egui::Sense::hover(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, color(COLOR_BACKGROUND));

        for (row_index, row) in grid.rows_iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = rect.min
                    + egui::vec2(
                        col_index as f32 * self.cell_size,
                        row_index as f32 * self.cell_size,
                    );
                let fill = if cell.is_alive() {
                    color(COLOR_ALIVE)
                } else {
                    color(COLOR_DEAD)
                };

                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(self.cell_size, self.cell_size)),
                    0.0,
                    fill,
                );
            }
        }

        let galley = painter.layout_no_wrap(
            overlay_text(&self.simulation),
            egui::FontId::proportional(OVERLAY_FONT_SIZE),
            color(COLOR_TEXT),
        );
        let text_pos = rect.min + egui::vec2(OVERLAY_OFFSET, OVERLAY_OFFSET);
        painter.rect_filled(
            egui::Rect::from_min_size(text_pos, galley.size()).expand(OVERLAY_PADDING),
            2.0,
            color(COLOR_BACKGROUND),
        );
        painter.galley(text_pos, galley, color(COLOR_TEXT));
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let interval = self.simulation.tick_rate().interval();
        if self.last_tick.elapsed() >= interval {
            self.simulation.tick();
            self.last_tick = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(color(COLOR_BACKGROUND)))
            .show(ctx, |ui| self.draw_grid(ui));

        ctx.request_repaint_after(interval.saturating_sub(self.last_tick.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::DEFAULT_TICK_RATE;

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(egui::Key::Space), Some(Command::TogglePause));
        assert_eq!(command_for_key(egui::Key::R), Some(Command::Reset));
        assert_eq!(command_for_key(egui::Key::C), Some(Command::Clear));
        assert_eq!(command_for_key(egui::Key::ArrowUp), Some(Command::Faster));
        assert_eq!(command_for_key(egui::Key::Plus), Some(Command::Faster));
        assert_eq!(command_for_key(egui::Key::ArrowDown), Some(Command::Slower));
        assert_eq!(command_for_key(egui::Key::Minus), Some(Command::Slower));
        assert_eq!(command_for_key(egui::Key::Escape), Some(Command::Quit));
        assert_eq!(command_for_key(egui::Key::A), None);
    }

    #[test]
    fn test_overlay_text() {
        let mut simulation = Simulation::seeded(5, 5, 1);
        assert_eq!(overlay_text(&simulation), format!("Speed: {} FPS", DEFAULT_TICK_RATE));

        simulation.apply(Command::Faster, GUI_RATE_STEP);
        simulation.apply(Command::TogglePause, GUI_RATE_STEP);
        assert_eq!(
            overlay_text(&simulation),
            format!("Speed: {} FPS (Paused)", DEFAULT_TICK_RATE + GUI_RATE_STEP)
        );
    }
}
