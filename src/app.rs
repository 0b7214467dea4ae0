//! MuteSpeak window: egui/eframe application.
//!
//! # Architecture
//!
//! [`MuteSpeakApp`] is the top-level [`eframe::App`].  It owns the
//! [`Session`] and two channel endpoints:
//!
//! * `command_tx`: sends [`SpeechCommand`] to the speech worker.
//! * `result_rx`: receives [`SpeechResult`] from the worker.
//!
//! # Layout
//!
//! | Area | Contents |
//! |------|----------|
//! | Menu bar | File → Save, Reset, Quit |
//! | Sliders | amplitude, pitch, words per minute, word gap |
//! | Options | "Clear message after speaking" |
//! | Message | single-line entry (Enter speaks) + Speak button |
//! | Status | last result or error, engine state |
//!
//! The "Locate speech engine" window appears whenever the session reports
//! [`Session::needs_location`].

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::session::Session;
use crate::speech::{candidate_paths, validate_choice, ChoiceError, SpeechCommand, SpeechResult};
use crate::voice::Field;

// ---------------------------------------------------------------------------
// Chooser
// ---------------------------------------------------------------------------

/// State of the "Locate speech engine" window while it is open.
struct Chooser {
    /// Path being edited.
    input: String,
    /// Engine executables found on this machine.
    candidates: Vec<PathBuf>,
    /// Why `input` was last rejected.
    error: Option<ChoiceError>,
}

impl Chooser {
    fn open() -> Self {
        let candidates = candidate_paths();
        log::info!("Found {} speech engine candidate(s)", candidates.len());
        let input = candidates
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self {
            input,
            candidates,
            error: None,
        }
    }
}

// ---------------------------------------------------------------------------
// MuteSpeakApp
// ---------------------------------------------------------------------------

/// eframe application with sliders, message box and engine chooser.
pub struct MuteSpeakApp {
    session: Session,
    chooser: Option<Chooser>,
    /// Give the message box keyboard focus on the next frame.
    focus_message: bool,

    /// Send commands to the background speech worker.
    command_tx: mpsc::Sender<SpeechCommand>,
    /// Receive results from the background speech worker.
    result_rx: mpsc::Receiver<SpeechResult>,
}

impl MuteSpeakApp {
    /// Create the app and issue the startup probe.
    pub fn new(
        session: Session,
        command_tx: mpsc::Sender<SpeechCommand>,
        result_rx: mpsc::Receiver<SpeechResult>,
    ) -> Self {
        let mut app = Self {
            session,
            chooser: None,
            focus_message: true,
            command_tx,
            result_rx,
        };
        let probe = app.session.start();
        app.dispatch(probe);
        app
    }

    // ── Channels ─────────────────────────────────────────────────────────

    /// Hand a command to the worker without blocking.
    fn dispatch(&mut self, command: Option<SpeechCommand>) {
        let Some(command) = command else {
            return;
        };
        if let Err(e) = self.command_tx.try_send(command) {
            log::warn!("Could not queue speech command: {e}");
            let reason = e.to_string();
            self.session.command_dropped(e.into_inner(), &reason);
        }
    }

    /// Drain all pending worker results (non-blocking).
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.session.handle_result(result);
        }
    }

    fn speak(&mut self) {
        let command = self.session.speak();
        self.dispatch(command);
        self.focus_message = true;
    }

    // ── Panels ───────────────────────────────────────────────────────────

    fn draw_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save").clicked() {
                    self.session.save();
                    ui.close_menu();
                }
                if ui.button("Reset").clicked() {
                    self.session.reset();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn draw_sliders(&mut self, ui: &mut egui::Ui) {
        for field in Field::ALL {
            let mut value = self.session.settings().get(field);
            let slider = egui::Slider::new(&mut value, field.range()).text(field.label());
            if ui.add(slider).changed() {
                self.session.set(field, value);
            }
        }
        ui.label(
            egui::RichText::new(self.session.arguments_preview())
                .monospace()
                .weak(),
        );
    }

    fn draw_message(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(
            &mut self.session.clear_after_speaking,
            "Clear message after speaking",
        );
        ui.add_space(4.0);

        let mut speak = false;
        ui.horizontal(|ui| {
            ui.label("Message");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.session.message).desired_width(220.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                speak = true;
            }
            if self.focus_message {
                response.request_focus();
                self.focus_message = false;
            }
            if ui.button("Speak").clicked() {
                speak = true;
            }
        });

        if speak {
            self.speak();
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let state = self.session.resolution();
            let engine = match state.ready_path() {
                Some(path) => format!("{}: {}", state.label(), path.display()),
                None => state.label().to_string(),
            };
            ui.label(egui::RichText::new(engine).small().weak());
            if self.session.is_busy() {
                ui.spinner();
            }
        });
        if let Some(status) = self.session.status() {
            let color = if status.is_error {
                egui::Color32::from_rgb(255, 136, 68)
            } else {
                egui::Color32::from_rgb(140, 140, 140)
            };
            ui.label(egui::RichText::new(status.text.as_str()).color(color));
        }
    }

    /// Render the chooser window and apply the user's answer, if any.
    fn draw_chooser(&mut self, ctx: &egui::Context) {
        let Some(chooser) = self.chooser.as_mut() else {
            return;
        };

        // Some(Some(path)) = confirmed, Some(None) = cancelled.
        let mut answer: Option<Option<PathBuf>> = None;

        egui::Window::new("Locate speech engine")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("The speech engine could not be started. Where is espeak installed?");
                ui.add_space(4.0);

                if chooser.candidates.is_empty() {
                    ui.label(egui::RichText::new("No installation found automatically.").weak());
                } else {
                    for candidate in &chooser.candidates {
                        let text = candidate.display().to_string();
                        let selected = chooser.input == text;
                        if ui.selectable_label(selected, text.as_str()).clicked() {
                            chooser.input = text;
                            chooser.error = None;
                        }
                    }
                }

                ui.add_space(4.0);
                ui.add(
                    egui::TextEdit::singleline(&mut chooser.input)
                        .hint_text("/usr/bin/espeak")
                        .desired_width(300.0),
                );
                if let Some(err) = &chooser.error {
                    ui.label(
                        egui::RichText::new(err.to_string())
                            .color(egui::Color32::from_rgb(255, 136, 68)),
                    );
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Use this engine").clicked() {
                        match validate_choice(&chooser.input) {
                            Ok(path) => answer = Some(Some(path)),
                            Err(e) => chooser.error = Some(e),
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(None);
                    }
                });
            });

        if let Some(choice) = answer {
            self.chooser = None;
            self.session.choose_executable(choice);
            self.focus_message = true;
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for MuteSpeakApp {
    /// Called every frame by eframe.  Polls the worker, then renders.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        if self.session.needs_location() && self.chooser.is_none() {
            self.chooser = Some(Chooser::open());
        }

        // Keep polling while the worker owes us a result.
        if self.session.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.draw_menu(ui, ctx);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.draw_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let enabled = self.chooser.is_none();
            ui.add_enabled_ui(enabled, |ui| {
                self.draw_sliders(ui);
                ui.separator();
                self.draw_message(ui);
            });
        });

        self.draw_chooser(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("MuteSpeak closing");
    }
}
