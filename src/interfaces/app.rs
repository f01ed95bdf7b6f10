use crate::application::client::RecommendationClient;
use crate::application::view_state::{EMPTY_NOTICE, ResultsState, ResultsView};
use crate::domain::criteria::{FilterCriteria, PriceRange, RiskLevel, TimeHorizon};
use crate::domain::recommendation::{SavedBatch, Stock, clipboard_block};
use crate::infrastructure::saved_store::SavedStore;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::time::{Duration, Instant};
use tracing::warn;

const STATUS_LINE_TTL: Duration = Duration::from_secs(3);

/// UI actions collected during rendering and applied afterwards, so the
/// render pass never mutates the state it is drawing.
enum PendingAction {
    Submit,
    DismissAlert(usize),
    CopySymbol(usize),
    CopyAll,
    SaveOne(usize),
    SaveAll,
}

pub struct RecommendationApp {
    client: RecommendationClient,
    store: SavedStore,

    // Form state
    price_range: PriceRange,
    time_horizon: TimeHorizon,
    risk_level: RiskLevel,

    // Results panel
    results: ResultsState,

    // Saved history
    saved: Vec<SavedBatch>,
    saved_error: Option<String>,
    show_saved: bool,

    // Transient confirmation line ("Symbol copied to clipboard!" etc.)
    status: Option<(String, Instant)>,
}

impl RecommendationApp {
    pub fn new(client: RecommendationClient, store: SavedStore) -> Self {
        let (saved, saved_error) = match store.load() {
            Ok(batches) => (batches, None),
            Err(e) => {
                warn!("Could not load saved recommendations: {:#}", e);
                (Vec::new(), Some(format!("{:#}", e)))
            }
        };

        Self {
            client,
            store,
            price_range: PriceRange::default(),
            time_horizon: TimeHorizon::default(),
            risk_level: RiskLevel::default(),
            results: ResultsState::default(),
            saved,
            saved_error,
            show_saved: false,
            status: None,
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some((text.into(), Instant::now()));
    }

    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_range: self.price_range,
            time_horizon: self.time_horizon,
            risk_level: self.risk_level,
        }
    }

    fn save_batch(&mut self, batch: SavedBatch) {
        match self.store.append(batch) {
            Ok(batches) => {
                self.saved = batches;
                self.saved_error = None;
            }
            Err(e) => {
                warn!("Could not save recommendations: {:#}", e);
                self.saved_error = Some(format!("{:#}", e));
            }
        }
    }

    fn apply(&mut self, action: PendingAction, ctx: &egui::Context) {
        let stocks: Vec<Stock> = match &self.results {
            ResultsState::Ready(ResultsView::Stocks(stocks)) => stocks.clone(),
            _ => Vec::new(),
        };

        match action {
            PendingAction::Submit => {
                match self.client.submit(self.criteria()) {
                    Ok(()) => self.results.begin_loading(),
                    Err(e) => self.set_status(format!("Could not submit request: {}", e)),
                }
            }
            PendingAction::DismissAlert(index) => self.results.dismiss_alert(index),
            PendingAction::CopySymbol(index) => {
                if let Some(stock) = stocks.get(index) {
                    ctx.copy_text(stock.symbol.clone());
                    self.set_status("Symbol copied to clipboard!");
                }
            }
            PendingAction::CopyAll => {
                ctx.copy_text(clipboard_block(&stocks));
                self.set_status("Recommendations copied to clipboard!");
            }
            PendingAction::SaveOne(index) => {
                if let Some(stock) = stocks.get(index) {
                    let batch = SavedBatch::from_single(local_timestamp(), stock);
                    self.save_batch(batch);
                }
            }
            PendingAction::SaveAll => {
                self.save_batch(SavedBatch::from_stocks(local_timestamp(), &stocks));
                self.show_saved = true;
            }
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui, actions: &mut Vec<PendingAction>) {
        Card::new().title("FILTERS").show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Price Range (INR)")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                egui::ComboBox::from_id_salt("price_range")
                    .selected_text(self.price_range.label())
                    .show_ui(ui, |ui| {
                        for option in PriceRange::ALL {
                            ui.selectable_value(&mut self.price_range, option, option.label());
                        }
                    });

                ui.separator();

                ui.label(
                    egui::RichText::new("Time Horizon").color(DesignSystem::TEXT_SECONDARY),
                );
                egui::ComboBox::from_id_salt("time_horizon")
                    .selected_text(self.time_horizon.label())
                    .show_ui(ui, |ui| {
                        for option in TimeHorizon::ALL {
                            ui.selectable_value(&mut self.time_horizon, option, option.label());
                        }
                    });

                ui.separator();

                ui.label(egui::RichText::new("Risk Level").color(DesignSystem::TEXT_SECONDARY));
                egui::ComboBox::from_id_salt("risk_level")
                    .selected_text(self.risk_level.label())
                    .show_ui(ui, |ui| {
                        for option in RiskLevel::ALL {
                            ui.selectable_value(&mut self.risk_level, option, option.label());
                        }
                    });
            });

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let submit = egui::Button::new(
                egui::RichText::new("Get Recommendations")
                    .color(DesignSystem::TEXT_PRIMARY),
            )
            .fill(DesignSystem::ACCENT_PRIMARY);

            // One request in flight at a time
            if ui.add_enabled(!self.results.is_loading(), submit).clicked() {
                actions.push(PendingAction::Submit);
            }
        });
    }

    fn render_results(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        actions: &mut Vec<PendingAction>,
    ) {
        match &self.results {
            ResultsState::Idle => {
                ui.label(
                    egui::RichText::new("Pick your filters and fetch recommendations.")
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            ResultsState::Loading { ticker } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("Fetching recommendations...")
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new(ticker.current(Instant::now()))
                        .color(DesignSystem::TEXT_SECONDARY)
                        .italics(),
                );
                // Keep the spinner moving and the tip current while we wait.
                ctx.request_repaint_after(Duration::from_millis(250));
            }
            ResultsState::Ready(ResultsView::Alerts(messages)) => {
                for (index, message) in messages.iter().enumerate() {
                    DesignSystem::alert_frame(DesignSystem::DANGER).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(message)
                                    .color(DesignSystem::TEXT_PRIMARY),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("✕").clicked() {
                                        actions.push(PendingAction::DismissAlert(index));
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(DesignSystem::SPACING_SMALL);
                }
            }
            ResultsState::Ready(ResultsView::Empty) => {
                DesignSystem::alert_frame(DesignSystem::WARNING).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(EMPTY_NOTICE).color(DesignSystem::TEXT_PRIMARY),
                    );
                });
            }
            ResultsState::Ready(ResultsView::Stocks(stocks)) => {
                ui.heading("Recommended Stocks");
                ui.add_space(DesignSystem::SPACING_SMALL);

                for (index, stock) in stocks.iter().enumerate() {
                    Card::new().show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(stock.display_title())
                                .strong()
                                .size(16.0)
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(stock.display_price())
                                .color(DesignSystem::SUCCESS),
                        );
                        ui.label(
                            egui::RichText::new(stock.display_reason())
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        ui.horizontal(|ui| {
                            if ui.button("Copy Symbol").clicked() {
                                actions.push(PendingAction::CopySymbol(index));
                            }
                            if ui.button("Save").clicked() {
                                actions.push(PendingAction::SaveOne(index));
                            }
                        });
                    });
                    ui.add_space(DesignSystem::SPACING_SMALL);
                }

                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.horizontal(|ui| {
                    if ui.button("Copy All Results").clicked() {
                        actions.push(PendingAction::CopyAll);
                    }
                    if ui.button("Save All Results").clicked() {
                        actions.push(PendingAction::SaveAll);
                    }
                });
            }
        }
    }

    fn render_saved_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Saved Recommendations")
            .open(&mut self.show_saved)
            .default_width(420.0)
            .show(ctx, |ui| {
                if let Some(error) = &self.saved_error {
                    DesignSystem::alert_frame(DesignSystem::DANGER).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(error).color(DesignSystem::TEXT_PRIMARY),
                        );
                    });
                    ui.add_space(DesignSystem::SPACING_SMALL);
                }

                if self.saved.is_empty() {
                    ui.label(
                        egui::RichText::new("Nothing saved yet.")
                            .color(DesignSystem::TEXT_MUTED),
                    );
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for batch in &self.saved {
                        ui.label(
                            egui::RichText::new(&batch.date)
                                .strong()
                                .color(DesignSystem::ACCENT_PRIMARY),
                        );
                        for stock in &batch.stocks {
                            ui.label(
                                egui::RichText::new(&stock.title)
                                    .color(DesignSystem::TEXT_PRIMARY),
                            );
                            ui.label(
                                egui::RichText::new(&stock.price)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                            ui.label(
                                egui::RichText::new(&stock.reason)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                            ui.add_space(4.0);
                        }
                        ui.separator();
                    }
                });
            });
    }
}

impl eframe::App for RecommendationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver a completed fetch, if any. Leaving the Loading state
        // drops the tip ticker on success and failure alike.
        if let Some(outcome) = self.client.poll_outcome()
            && self.results.is_loading()
        {
            self.results.finish(outcome);
        }

        // Expire the transient status line.
        if let Some((_, since)) = &self.status
            && since.elapsed() > STATUS_LINE_TTL
        {
            self.status = None;
        }

        let mut actions: Vec<PendingAction> = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("ProfitPoke");
                ui.label(
                    egui::RichText::new("Smart Stock Insights")
                        .color(DesignSystem::TEXT_MUTED)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some((text, _)) = &self.status {
                        ui.label(
                            egui::RichText::new(text)
                                .color(DesignSystem::SUCCESS)
                                .small(),
                        );
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_form(ui, &mut actions);
                ui.add_space(DesignSystem::SPACING_LARGE);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        self.render_results(ui, ctx, &mut actions);
                    });
            });

        self.render_saved_window(ctx);

        for action in actions {
            self.apply(action, ctx);
        }
    }
}

/// Locale-style display timestamp for saved batches, e.g. "15/01/2026, 10:30:00".
fn local_timestamp() -> String {
    chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}
