//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Player;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app with the default mode
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (You are X)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human: Player::X });
                        ui.close_menu();
                    }
                    if ui.button("New Game (You are O)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human: Player::O });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {human}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.outcome.is_some() {
                    ui.add_space(10.0);
                    self.render_result_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X·O").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("perfect-play engine").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let accent = match turn {
                Player::X => X_MARK,
                Player::O => O_MARK,
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(turn.to_string()).size(32.0).strong().color(accent));
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new("TO MOVE").size(10.0).color(TEXT_MUTED));

                    let status = if self.state.outcome.is_some() {
                        ("Game over", STATUS_WARN)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Computer", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button(RichText::new("New Round (N)").size(12.0)).clicked() {
                self.state.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render search debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(outcome) = &self.state.last_search {
                    ui.label(
                        RichText::new(format!("Score: {}", outcome.score))
                            .size(12.0)
                            .strong()
                            .color(STATUS_OK),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes, {} cutoffs", outcome.nodes, outcome.cutoffs))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    if let Some(slot) = outcome.slot {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> slot {slot}"))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_result_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.winner() {
            Some(winner) => format!("{winner} WINS!"),
            None => "TIE GAME".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);

                    if ui.button(RichText::new("New Round").size(13.0)).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                self.state.engine.board(),
                self.state.current_turn,
                self.state.last_move,
                self.state.winning_line(),
                self.state.outcome.is_some(),
            );

            if let Some(slot) = clicked {
                if let Err(msg) = self.state.try_play(slot) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle search panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New round
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // The bounded search finishes instantly, so the computer moves
        // on the same frame its turn comes up
        if self.state.is_computer_turn() && self.state.outcome.is_none() {
            self.state.computer_reply();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
