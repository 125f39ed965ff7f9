//! Landing Page Widget State
//! Small state holders behind the tabs, counters, steps, slider and
//! scroll-reveal sections. Times are egui input times in seconds.

use egui::Rect;
use std::time::Duration;

/// Share of `item` that lies inside `viewport`, by area.
pub fn visible_fraction(item: Rect, viewport: Rect) -> f32 {
    let area = item.area();
    if area <= 0.0 || !item.intersects(viewport) {
        return 0.0;
    }
    (item.intersect(viewport).area() / area).clamp(0.0, 1.0)
}

// ================================================================================
// Tabs
// ================================================================================

/// A row of tabs where exactly one is active.
#[derive(Debug, Clone)]
pub struct TabGroup<T> {
    tabs: Vec<T>,
    active: T,
}

impl<T: Copy + PartialEq> TabGroup<T> {
    pub fn new(tabs: Vec<T>, active: T) -> Self {
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Panels whose key differs from the active tab are hidden.
    pub fn is_panel_hidden(&self, panel: T) -> bool {
        panel != self.active
    }

    /// Activate `tab`. Returns false for a tab that is not in the group.
    pub fn select(&mut self, tab: T) -> bool {
        if !self.tabs.contains(&tab) {
            return false;
        }
        self.active = tab;
        true
    }
}

// ================================================================================
// Counters
// ================================================================================

/// A statistic that counts up from zero once started.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    target: u64,
    duration: Duration,
    started_at: Option<f64>,
}

impl StatCounter {
    pub fn new(label: impl Into<String>, target: u64, duration: Duration) -> Self {
        Self {
            label: label.into(),
            target,
            duration,
            started_at: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start the animation at `now`. A counter only ever starts once.
    pub fn start(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    fn progress(&self, now: f64) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let duration = self.duration.as_secs_f64();
        if duration <= 0.0 {
            return 1.0;
        }
        ((now - start) / duration).clamp(0.0, 1.0)
    }

    /// Displayed value: `floor(target * progress)`.
    pub fn value_at(&self, now: f64) -> u64 {
        (self.target as f64 * self.progress(now)).floor() as u64
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.is_started() && self.progress(now) < 1.0
    }
}

// ================================================================================
// Steps
// ================================================================================

/// Numbered steps with a single active item.
#[derive(Debug, Clone)]
pub struct StepList {
    count: usize,
    active: usize,
}

impl StepList {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn activate(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }
}

// ================================================================================
// Licenses slider
// ================================================================================

/// Carousel index that wraps in both directions.
#[derive(Debug, Clone)]
pub struct LicenseSlider {
    count: usize,
    index: usize,
}

impl LicenseSlider {
    pub fn new(count: usize) -> Self {
        Self { count, index: 0 }
    }

    /// The arrows only work with more than one item.
    pub fn is_enabled(&self) -> bool {
        self.count > 1
    }

    pub fn prev(&mut self) {
        if self.is_enabled() {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }

    pub fn next(&mut self) {
        if self.is_enabled() {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// Horizontal gallery offset in percent of one item width.
    pub fn offset_percent(&self) -> f32 {
        -(self.index as f32) * 100.0
    }
}

// ================================================================================
// Scroll reveal
// ================================================================================

/// Fades sections in the first time they scroll into view.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    stagger: Duration,
    transition: Duration,
    revealed_at: Vec<Option<f64>>,
}

impl RevealTracker {
    pub fn new(count: usize, threshold: f32, stagger: Duration, transition: Duration) -> Self {
        Self {
            threshold,
            stagger,
            transition,
            revealed_at: vec![None; count],
        }
    }

    /// Record that section `index` is `fraction` visible. Returns true when this
    /// reveals it.
    pub fn observe(&mut self, index: usize, fraction: f32, now: f64) -> bool {
        let Some(slot) = self.revealed_at.get_mut(index) else {
            return false;
        };
        if slot.is_some() || fraction < self.threshold {
            return false;
        }
        *slot = Some(now);
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.revealed_at.get(index), Some(Some(_)))
    }

    /// Opacity of section `index`, delayed by `index * stagger`.
    pub fn opacity(&self, index: usize, now: f64) -> f32 {
        let Some(Some(revealed_at)) = self.revealed_at.get(index) else {
            return 0.0;
        };
        let delay = self.stagger.as_secs_f64() * index as f64;
        let elapsed = now - revealed_at - delay;
        let transition = self.transition.as_secs_f64();
        if transition <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed / transition).clamp(0.0, 1.0) as f32
    }

    /// Whether any revealed section is still fading in.
    pub fn is_animating(&self, now: f64) -> bool {
        (0..self.revealed_at.len()).any(|i| self.is_revealed(i) && self.opacity(i, now) < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    #[test]
    fn fraction_of_item_in_viewport() {
        let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        let inside = Rect::from_min_max(pos2(0.0, 10.0), pos2(100.0, 50.0));
        let half = Rect::from_min_max(pos2(0.0, 80.0), pos2(100.0, 120.0));
        let below = Rect::from_min_max(pos2(0.0, 150.0), pos2(100.0, 200.0));
        let empty = Rect::from_min_max(pos2(0.0, 10.0), pos2(100.0, 10.0));

        assert_eq!(visible_fraction(inside, viewport), 1.0);
        assert!((visible_fraction(half, viewport) - 0.5).abs() < 1e-6);
        assert_eq!(visible_fraction(below, viewport), 0.0);
        assert_eq!(visible_fraction(empty, viewport), 0.0);
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Side {
        Buy,
        Sell,
        Swap,
    }

    #[test]
    fn tab_selection_shows_one_panel() {
        let mut tabs = TabGroup::new(vec![Side::Buy, Side::Sell], Side::Buy);
        assert!(tabs.is_active(Side::Buy));
        assert!(tabs.is_panel_hidden(Side::Sell));

        assert!(tabs.select(Side::Sell));
        assert_eq!(tabs.active(), Side::Sell);
        assert!(tabs.is_panel_hidden(Side::Buy));
        assert!(!tabs.is_panel_hidden(Side::Sell));

        assert!(!tabs.select(Side::Swap));
        assert_eq!(tabs.active(), Side::Sell);
    }

    #[test]
    fn counter_counts_up_over_duration() {
        let mut counter = StatCounter::new("users", 1000, Duration::from_millis(1500));
        assert_eq!(counter.value_at(5.0), 0);

        assert!(counter.start(10.0));
        assert_eq!(counter.value_at(10.0), 0);
        assert_eq!(counter.value_at(10.75), 500);
        assert!(counter.is_running(10.75));
        assert_eq!(counter.value_at(11.5), 1000);
        assert_eq!(counter.value_at(99.0), 1000);
        assert!(!counter.is_running(11.5));
    }

    #[test]
    fn counter_floors_and_starts_once() {
        let mut counter = StatCounter::new("trades", 7, Duration::from_secs(1));
        counter.start(0.0);
        assert!(!counter.start(0.5));
        // 7 * 0.5 = 3.5
        assert_eq!(counter.value_at(0.5), 3);
    }

    #[test]
    fn steps_keep_one_active() {
        let mut steps = StepList::new(3);
        assert!(steps.is_active(0));
        steps.activate(2);
        assert!(steps.is_active(2));
        assert!(!steps.is_active(0));
        steps.activate(5);
        assert!(steps.is_active(2));
    }

    #[test]
    fn slider_wraps_both_ways() {
        let mut slider = LicenseSlider::new(3);
        slider.prev();
        assert_eq!(slider.offset_percent(), -200.0);
        slider.next();
        assert_eq!(slider.offset_percent(), 0.0);
        slider.next();
        slider.next();
        assert_eq!(slider.offset_percent(), -200.0);
        slider.next();
        assert_eq!(slider.offset_percent(), 0.0);
    }

    #[test]
    fn single_item_slider_is_disabled() {
        let mut slider = LicenseSlider::new(1);
        assert!(!slider.is_enabled());
        slider.next();
        slider.prev();
        assert_eq!(slider.offset_percent(), 0.0);
    }

    #[test]
    fn reveal_respects_threshold_and_stays_revealed() {
        let mut reveal = RevealTracker::new(
            3,
            0.2,
            Duration::from_millis(40),
            Duration::from_millis(400),
        );
        assert!(!reveal.observe(1, 0.1, 0.0));
        assert!(!reveal.is_revealed(1));
        assert!(reveal.observe(1, 0.25, 1.0));
        assert!(!reveal.observe(1, 0.9, 2.0));
        assert!(!reveal.observe(7, 1.0, 2.0));

        // Scrolling away does not hide it again.
        reveal.observe(1, 0.0, 3.0);
        assert!(reveal.is_revealed(1));
    }

    #[test]
    fn reveal_opacity_is_staggered() {
        let mut reveal = RevealTracker::new(
            3,
            0.2,
            Duration::from_millis(40),
            Duration::from_millis(400),
        );
        reveal.observe(0, 1.0, 0.0);
        reveal.observe(2, 1.0, 0.0);

        assert_eq!(reveal.opacity(1, 1.0), 0.0);
        assert!((reveal.opacity(0, 0.2) - 0.5).abs() < 1e-6);
        // Section 2 starts 80 ms later.
        assert_eq!(reveal.opacity(2, 0.05), 0.0);
        assert!((reveal.opacity(2, 0.28) - 0.5).abs() < 1e-6);
        assert!(reveal.is_animating(0.3));
        assert!(!reveal.is_animating(1.0));
    }
}
