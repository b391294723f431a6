// ui.rs - egui front end: controls, keyboard shortcuts and board rendering

use std::time::Instant;

use conway::patterns;
use eframe::egui;
use egui::{Rect, Stroke, Vec2};
use tracing::debug;

use crate::app::{self, Action, GridDisplay, MAX_DELAY_MS};

impl eframe::App for GridDisplay {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<Action> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => {
                        app::action_for_key(*key)
                    }
                    _ => None,
                })
                .collect()
        });

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.playback.continuous { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    actions.push(Action::ToggleContinuous);
                }
                if ui.button("⏭ Step").clicked() {
                    actions.push(Action::Step);
                }
                if ui.button("⏹ Clear").clicked() {
                    actions.push(Action::Clear);
                }
                if ui.button("🎲 Random").clicked() {
                    actions.push(Action::Randomize);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    actions.push(Action::LoadPattern(self.selected_pattern));
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.life.generation()));
            });

            ui.horizontal(|ui| {
                ui.label("Delay:");
                let mut delay_ms = self.playback.delay().as_millis() as u64;
                if ui
                    .add(egui::Slider::new(&mut delay_ms, 0..=MAX_DELAY_MS).suffix(" ms"))
                    .changed()
                {
                    self.playback.set_delay_ms(delay_ms);
                }

                ui.separator();

                ui.label("Cells:");
                ui.color_edit_button_srgba(&mut self.palette.cells);
                ui.label("Background:");
                ui.color_edit_button_srgba(&mut self.palette.background);
                ui.label("Grid:");
                ui.color_edit_button_srgba(&mut self.palette.grid_lines);
                ui.checkbox(&mut self.palette.show_grid, "Show grid");
            });

            ui.label(
                "Space: step  C: run/pause  Z/X: slower/faster  L: random  G: grid  \
                 Q/W/E/R: recolor  Esc: quit  Click: toggle cell",
            );
        });

        let area = (self.life.width() * self.life.height()) as f32;
        let population = self.life.population();
        egui::TopBottomPanel::bottom("statistics").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {population}"));
                ui.label(format!("Dead cells: {}", area as usize - population));
                ui.label(format!("Population: {:.1}%", population as f32 / area * 100.0));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                if let Some(click) = self.draw_board(ui) {
                    actions.push(click);
                }
            });
        });

        for action in actions {
            if let Err(err) = self.apply(action) {
                debug!(%err, "action rejected");
            }
        }

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if self.update_simulation(Instant::now()) || self.playback.continuous {
            ctx.request_repaint();
        }
    }
}

impl GridDisplay {
    /// Paints the board and returns a toggle for a click on it.
    fn draw_board(&self, ui: &mut egui::Ui) -> Option<Action> {
        let scale = self.scale;
        let total_size = Vec2::new(
            self.life.width() as f32 * scale,
            self.life.height() as f32 * scale,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.palette.background);

        for (x, y) in self.life.live_cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(x as f32 * scale, y as f32 * scale),
                Vec2::splat(scale),
            );
            painter.rect_filled(rect, 0.0, self.palette.cells);
        }

        if self.palette.show_grid {
            let stroke = Stroke::new(0.5, self.palette.grid_lines);
            for x in 0..=self.life.width() {
                let px = origin.x + x as f32 * scale;
                painter.line_segment(
                    [egui::pos2(px, origin.y), egui::pos2(px, origin.y + total_size.y)],
                    stroke,
                );
            }
            for y in 0..=self.life.height() {
                let py = origin.y + y as f32 * scale;
                painter.line_segment(
                    [egui::pos2(origin.x, py), egui::pos2(origin.x + total_size.x, py)],
                    stroke,
                );
            }
        }

        if !response.clicked() {
            return None;
        }
        let pos = response.interact_pointer_pos()?;
        let (x, y) = app::cell_at(pos.x - origin.x, pos.y - origin.y, scale)?;
        Some(Action::ToggleCell { x, y })
    }
}

/// Window size that fits the board plus the control and statistics panels.
pub fn window_size(width: usize, height: usize, scale: f32) -> [f32; 2] {
    const PANEL_HEIGHT: f32 = 140.0;
    const MIN_WIDTH: f32 = 760.0;
    [
        (width as f32 * scale + 24.0).max(MIN_WIDTH),
        height as f32 * scale + PANEL_HEIGHT,
    ]
}
