//! Landing Page Sections
//! Scrollable page body: hero chart, trade forms, stats counters, steps and
//! the licenses slider. Every section fades in on first sight.

use crate::config::AppConfig;
use crate::data::{format_count, DigitStyle};
use crate::gui::chart_viewer::{ChartViewer, ChartViewerAction};
use crate::gui::widgets::{
    visible_fraction, LicenseSlider, RevealTracker, StatCounter, StepList, TabGroup,
};
use egui::{Align, Align2, Color32, FontId, RichText, ScrollArea, Sense};

const SECTION_SPACING: f32 = 28.0;
const ACCENT: Color32 = Color32::from_rgb(245, 158, 11);
const SLIDE_SECONDS: f32 = 0.35;

const STEPS: [(&str, &str); 3] = [
    ("Sign up", "Create an account and verify your identity."),
    ("Fund your wallet", "Deposit rials by bank transfer or card."),
    ("Trade gold", "Buy or sell gold at the live price, any time."),
];

const LICENSES: [&str; 3] = [
    "Central bank e-payment license",
    "Precious metals trading permit",
    "ISO 27001 information security",
];

/// Page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Trade,
    Stats,
    Steps,
    Licenses,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Trade,
        Section::Stats,
        Section::Steps,
        Section::Licenses,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Trade => "trade",
            Section::Stats => "stats",
            Section::Steps => "steps",
            Section::Licenses => "licenses",
        }
    }

    /// Resolve an in-page `#id` href. Anything else has no target.
    pub fn from_href(href: &str) -> Option<Section> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        Self::ALL.into_iter().find(|s| s.anchor() == id)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeTab {
    Buy,
    Sell,
}

impl TradeTab {
    fn caption(self) -> &'static str {
        match self {
            TradeTab::Buy => "Buy",
            TradeTab::Sell => "Sell",
        }
    }
}

/// State of every interactive section on the page.
pub struct LandingPage {
    trade_tabs: TabGroup<TradeTab>,
    trade_grams: String,
    counters: Vec<StatCounter>,
    stats_threshold: f32,
    digits: DigitStyle,
    steps: StepList,
    slider: LicenseSlider,
    reveal: RevealTracker,
    pending_scroll: Option<Section>,
}

impl LandingPage {
    pub fn new(config: &AppConfig) -> Self {
        let duration = config.counter_duration();
        Self {
            trade_tabs: TabGroup::new(vec![TradeTab::Buy, TradeTab::Sell], TradeTab::Buy),
            trade_grams: "1".to_string(),
            counters: vec![
                StatCounter::new("Active users", 12_500, duration),
                StatCounter::new("Daily trades", 3_400, duration),
                StatCounter::new("Gold traded (kg)", 820, duration),
            ],
            stats_threshold: config.stats_threshold,
            digits: config.digits,
            steps: StepList::new(STEPS.len()),
            slider: LicenseSlider::new(LICENSES.len()),
            reveal: RevealTracker::new(
                Section::ALL.len(),
                config.reveal_threshold,
                config.reveal_stagger(),
                config.reveal_transition(),
            ),
            pending_scroll: None,
        }
    }

    /// Scroll `section` into view on the next frame.
    pub fn scroll_to(&mut self, section: Section) {
        self.pending_scroll = Some(section);
    }

    pub fn pending_scroll(&self) -> Option<Section> {
        self.pending_scroll
    }

    /// Draw the page body
    pub fn show(&mut self, ui: &mut egui::Ui, chart: &mut ChartViewer) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;
        let now = ui.input(|i| i.time);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let viewport = ui.clip_rect();

                for section in Section::ALL {
                    let index = section.index();
                    let opacity = self.reveal.opacity(index, now);

                    let response = ui
                        .scope(|ui| {
                            ui.multiply_opacity(opacity);
                            match section {
                                Section::Hero => {
                                    if Self::show_hero(ui, chart) == ChartViewerAction::ExportPng {
                                        action = ChartViewerAction::ExportPng;
                                    }
                                }
                                Section::Trade => self.show_trade(ui, chart),
                                Section::Stats => self.show_stats(ui, now),
                                Section::Steps => self.show_steps(ui),
                                Section::Licenses => self.show_licenses(ui),
                            }
                        })
                        .response;

                    let fraction = visible_fraction(response.rect, viewport);
                    if self.reveal.observe(index, fraction, now) {
                        tracing::debug!(section = section.anchor(), "Revealed section");
                    }
                    if section == Section::Stats && fraction >= self.stats_threshold {
                        self.start_counters(now);
                    }
                    if self.pending_scroll == Some(section) {
                        response.scroll_to_me(Some(Align::TOP));
                        self.pending_scroll = None;
                    }

                    ui.add_space(SECTION_SPACING);
                }
            });

        if self.is_animating(now) {
            ui.ctx().request_repaint();
        }

        action
    }

    fn start_counters(&mut self, now: f64) {
        let mut started = false;
        for counter in &mut self.counters {
            started |= counter.start(now);
        }
        if started {
            tracing::info!("Starting stats counters");
        }
    }

    fn is_animating(&self, now: f64) -> bool {
        self.reveal.is_animating(now) || self.counters.iter().any(|c| c.is_running(now))
    }

    fn section_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(20.0).strong());
        ui.add_space(10.0);
    }

    // ===== Hero =====
    fn show_hero(ui: &mut egui::Ui, chart: &mut ChartViewer) -> ChartViewerAction {
        ui.label(
            RichText::new("Buy and sell gold online")
                .size(28.0)
                .strong()
                .color(ACCENT),
        );
        ui.label(RichText::new("Live prices, instant settlement, licensed custody.").size(14.0));
        ui.add_space(14.0);
        chart.show(ui)
    }

    // ===== Trade forms =====
    fn show_trade(&mut self, ui: &mut egui::Ui, chart: &ChartViewer) {
        Self::section_title(ui, "Trade");

        ui.horizontal(|ui| {
            for tab in self.trade_tabs.tabs().to_vec() {
                let label = RichText::new(tab.caption()).size(15.0);
                if ui
                    .selectable_label(self.trade_tabs.is_active(tab), label)
                    .clicked()
                {
                    self.trade_tabs.select(tab);
                    tracing::debug!(tab = ?self.trade_tabs.active(), "Switched trade tab");
                }
            }
        });
        ui.add_space(8.0);

        for panel in [TradeTab::Buy, TradeTab::Sell] {
            if self.trade_tabs.is_panel_hidden(panel) {
                continue;
            }
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Amount (g):");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.trade_grams)
                                .desired_width(80.0),
                        );
                    });
                    let quote = self
                        .trade_grams
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .and_then(|grams| chart.quote(grams));
                    ui.label(
                        RichText::new(quote.unwrap_or_else(|| "-".to_string()))
                            .size(16.0)
                            .color(ACCENT),
                    );
                    ui.add_space(4.0);
                    let caption = match panel {
                        TradeTab::Buy => "Buy gold",
                        TradeTab::Sell => "Sell gold",
                    };
                    if ui.button(caption).clicked() {
                        tracing::info!(
                            side = panel.caption(),
                            grams = %self.trade_grams,
                            "Trade form submitted"
                        );
                    }
                });
        }
    }

    // ===== Statistics =====
    fn show_stats(&mut self, ui: &mut egui::Ui, now: f64) {
        Self::section_title(ui, "In numbers");

        ui.columns(self.counters.len(), |columns| {
            for (ui, counter) in columns.iter_mut().zip(&self.counters) {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format_count(counter.value_at(now), self.digits))
                            .size(30.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.label(RichText::new(&counter.label).size(13.0).color(Color32::GRAY));
                });
            }
        });
    }

    // ===== Steps =====
    fn show_steps(&mut self, ui: &mut egui::Ui) {
        Self::section_title(ui, "How it works");

        for (i, (title, description)) in STEPS.iter().enumerate() {
            let active = self.steps.is_active(i);
            let stroke = if active {
                egui::Stroke::new(2.0, ACCENT)
            } else {
                egui::Stroke::new(1.0, Color32::from_gray(70))
            };
            let response = egui::Frame::none()
                .stroke(stroke)
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let number = self.digits.localize(&(i + 1).to_string());
                    ui.label(RichText::new(format!("{}. {}", number, title)).strong());
                    ui.label(RichText::new(*description).size(12.0).color(Color32::GRAY));
                })
                .response
                .interact(Sense::click());
            if response.clicked() {
                self.steps.activate(i);
            }
            ui.add_space(6.0);
        }
    }

    // ===== Licenses slider =====
    fn show_licenses(&mut self, ui: &mut egui::Ui) {
        Self::section_title(ui, "Licenses");

        let enabled = self.slider.is_enabled();
        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("◀")).clicked() {
                self.slider.prev();
            }
            if ui.add_enabled(enabled, egui::Button::new("▶")).clicked() {
                self.slider.next();
            }
        });
        ui.add_space(6.0);

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 90.0),
            Sense::hover(),
        );
        let offset = ui.ctx().animate_value_with_time(
            ui.id().with("license_offset"),
            self.slider.offset_percent(),
            SLIDE_SECONDS,
        );

        let painter = ui.painter_at(rect);
        for (i, license) in LICENSES.iter().enumerate() {
            let shift = (i as f32 * 100.0 + offset) / 100.0 * rect.width();
            let card = rect.translate(egui::vec2(shift, 0.0)).shrink(4.0);
            if !card.intersects(rect) {
                continue;
            }
            painter.rect_filled(card, 8.0, ui.visuals().widgets.noninteractive.bg_fill);
            painter.text(
                card.center(),
                Align2::CENTER_CENTER,
                *license,
                FontId::proportional(16.0),
                ui.visuals().text_color(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_resolves_known_sections_only() {
        assert_eq!(Section::from_href("#stats"), Some(Section::Stats));
        assert_eq!(Section::from_href("#licenses"), Some(Section::Licenses));
        assert_eq!(Section::from_href("#faq"), None);
        assert_eq!(Section::from_href("#"), None);
        assert_eq!(Section::from_href("stats"), None);
        assert_eq!(Section::from_href(""), None);
    }

    #[test]
    fn nav_links_all_have_targets() {
        for (_, href) in crate::gui::nav_bar::NAV_LINKS {
            assert!(Section::from_href(href).is_some(), "{href}");
        }
    }

    #[test]
    fn scroll_request_is_remembered() {
        let mut page = LandingPage::new(&AppConfig::default());
        assert_eq!(page.pending_scroll(), None);
        page.scroll_to(Section::Steps);
        assert_eq!(page.pending_scroll(), Some(Section::Steps));
    }

    #[test]
    fn counters_start_once_with_configured_duration() {
        let mut page = LandingPage::new(&AppConfig::default());
        page.start_counters(2.0);
        page.start_counters(5.0);
        let values: Vec<u64> = page.counters.iter().map(|c| c.value_at(3.5)).collect();
        assert_eq!(values, vec![12_500, 3_400, 820]);
        assert!(!page.is_animating(3.5));
        assert!(page.is_animating(2.5));
    }
}
