//! Bevy application setup and page-level state

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use scripsmith_core::content::PROJECTS;
use scripsmith_core::theme::palette;
use scripsmith_core::{
    smooth_factor, DecorBoundary, EmailPayload, Project, RelayOutcome, RevealRegistry,
};

use crate::relay::RelayPlugin;
use crate::scene::ScenePlugin;
use crate::ui::UiPlugin;

/// Simulated boot time before the page is revealed, in seconds
pub const LOADING_SECS: f32 = 2.0;

/// Exit fade of the loader overlay once the gate opens
pub const LOADER_FADE_SECS: f32 = 0.5;

/// Scroll offset at which the navigation bar switches to its solid style
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Smoothing constant for the cursor follower
const TRAIL_SMOOTHING: f32 = 0.25;

/// Gate for the artificial loading phase shown before the page
#[derive(Debug, Resource)]
pub struct LoadingGate {
    timer: Timer,
    ready_at: Option<f64>,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(LOADING_SECS, TimerMode::Once),
            ready_at: None,
        }
    }
}

impl LoadingGate {
    /// Tick the gate forward; the ready flip happens exactly once
    pub fn advance(&mut self, delta: Duration, now: f64) {
        self.timer.tick(delta);
        if self.timer.just_finished() && self.ready_at.is_none() {
            self.ready_at = Some(now);
            tracing::info!("loading gate opened after {:.1}s", LOADING_SECS);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready_at.is_some()
    }

    /// Seconds since the gate opened, 0 while still loading
    pub fn seconds_since_ready(&self, now: f64) -> f32 {
        self.ready_at.map(|at| (now - at).max(0.0) as f32).unwrap_or(0.0)
    }

    /// Loader overlay alpha: opaque while loading, then fading out
    pub fn overlay_alpha(&self, now: f64) -> f32 {
        match self.ready_at {
            None => 1.0,
            Some(at) => (1.0 - (now - at) as f32 / LOADER_FADE_SECS).clamp(0.0, 1.0),
        }
    }

    pub fn overlay_visible(&self, now: f64) -> bool {
        self.overlay_alpha(now) > 0.0
    }
}

/// Navigation bar and mobile menu state
#[derive(Debug, Clone, Resource, Default)]
pub struct NavState {
    /// Whether the page has scrolled past the restyle threshold
    pub scrolled: bool,
    /// Mobile slide-in menu visibility
    pub menu_open: bool,
}

impl NavState {
    pub fn set_scroll(&mut self, offset: f32) {
        self.scrolled = offset >= SCROLL_THRESHOLD;
    }
}

/// Page layout state for responsive design and scrolling
#[derive(Debug, Clone, Resource)]
pub struct PageLayout {
    /// Current screen width
    pub screen_width: f32,
    /// Current screen height
    pub screen_height: f32,
    /// Whether we're on a small screen (mobile/tablet)
    pub is_mobile: bool,
    /// Scale factor for UI elements on mobile
    pub ui_scale: f32,
    /// Vertical scroll offset of the page, captured every frame
    pub scroll_offset: f32,
    /// Smooth-scroll destination, cleared on arrival or manual scrolling
    pub scroll_target: Option<f32>,
    /// Content-space top of each section, keyed by anchor id
    pub section_tops: HashMap<&'static str, f32>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
            is_mobile: false,
            ui_scale: 1.0,
            scroll_offset: 0.0,
            scroll_target: None,
            section_tops: HashMap::new(),
        }
    }
}

impl PageLayout {
    /// Update layout based on screen dimensions
    pub fn update_for_screen(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;

        // Consider mobile if width < 800 or if it's a portrait orientation with width < 600
        self.is_mobile = width < 800.0 || (width < height && width < 600.0);

        // Scale up UI elements on mobile for better touch targets
        self.ui_scale = if self.is_mobile { 1.3 } else { 1.0 };
    }

    /// Remember where a section starts within the scrolled content
    pub fn record_section(&mut self, anchor: &'static str, top: f32) {
        self.section_tops.insert(anchor, top);
    }

    /// Queue a smooth scroll to a section; unknown anchors are a no-op
    pub fn request_scroll(&mut self, anchor: &str) -> bool {
        match self.section_tops.get(anchor) {
            Some(top) => {
                self.scroll_target = Some(*top);
                true
            }
            None => false,
        }
    }
}

/// Currently shown project in the detail panel, always a valid index
#[derive(Debug, Clone, Resource, Default)]
pub struct ProjectPanel {
    pub selected: usize,
    /// When the current selection was made, keys the detail re-entry animation
    pub selected_at: f64,
}

impl ProjectPanel {
    /// Switch the detail panel; out-of-range and repeat clicks are ignored
    pub fn select(&mut self, index: usize, now: f64) -> bool {
        if index >= PROJECTS.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        self.selected_at = now;
        true
    }

    pub fn selected_project(&self) -> Project {
        PROJECTS[self.selected]
    }
}

/// Contact form fields and in-flight flag
#[derive(Debug, Clone, Resource, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
}

impl ContactForm {
    pub fn payload(&self) -> EmailPayload {
        EmailPayload {
            user_name: self.name.clone(),
            user_email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Returns false while an earlier submission is still in flight
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Terminal outcome: success clears the fields, failure keeps them for retry
    pub fn apply_outcome(&mut self, outcome: &RelayOutcome) {
        self.submitting = false;
        if matches!(outcome, RelayOutcome::Delivered) {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}

/// One queued page notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub success: bool,
}

/// Modal notices shown to the visitor, oldest first
#[derive(Debug, Clone, Resource, Default)]
pub struct Notices {
    pub queue: Vec<Notice>,
}

impl Notices {
    pub fn push_success(&mut self, text: impl Into<String>) {
        self.queue.push(Notice { text: text.into(), success: true });
    }

    pub fn push_failure(&mut self, text: impl Into<String>) {
        self.queue.push(Notice { text: text.into(), success: false });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.queue.first()
    }

    pub fn dismiss(&mut self) {
        if !self.queue.is_empty() {
            self.queue.remove(0);
        }
    }
}

/// One-shot reveal latches for scroll-triggered animations
#[derive(Debug, Resource, Default)]
pub struct Reveals(pub RevealRegistry);

/// Window-space placement of one decoration region, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseAnchor {
    pub center: Vec2,
    pub size: Vec2,
}

/// One 3D decoration region embedded in the page
#[derive(Debug)]
pub struct ShowcaseSlot {
    pub boundary: DecorBoundary,
    /// Region the page reserved this frame, None while scrolled offscreen
    pub anchor: Option<ShowcaseAnchor>,
}

impl ShowcaseSlot {
    pub const fn new(label: &'static str) -> Self {
        Self {
            boundary: DecorBoundary::new(label),
            anchor: None,
        }
    }

    pub fn place(&mut self, center: Vec2, size: Vec2) {
        self.anchor = Some(ShowcaseAnchor { center, size });
    }
}

/// The four decorated regions of the page, each behind its own boundary
#[derive(Debug, Resource)]
pub struct Showcases {
    pub hero: ShowcaseSlot,
    pub orbit: ShowcaseSlot,
    pub skills: ShowcaseSlot,
    pub contact: ShowcaseSlot,
}

impl Default for Showcases {
    fn default() -> Self {
        Self {
            hero: ShowcaseSlot::new("hero backdrop"),
            orbit: ShowcaseSlot::new("tech orbit"),
            skills: ShowcaseSlot::new("skills panels"),
            contact: ShowcaseSlot::new("contact sphere"),
        }
    }
}

impl Showcases {
    /// Forget last frame's placements before the page lays out again
    pub fn clear_anchors(&mut self) {
        self.hero.anchor = None;
        self.orbit.anchor = None;
        self.skills.anchor = None;
        self.contact.anchor = None;
    }
}

/// Pointer-follower glow, smoothed toward the live cursor position
#[derive(Debug, Clone, Resource, Default)]
pub struct CursorTrail {
    pub pos: Vec2,
    pub target: Vec2,
    pub visible: bool,
    seeded: bool,
}

impl CursorTrail {
    /// Point the follower at the cursor; the first sighting snaps instead of gliding
    pub fn retarget(&mut self, target: Vec2) {
        self.target = target;
        self.visible = true;
        if !self.seeded {
            self.pos = target;
            self.seeded = true;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn advance(&mut self, dt: f32) {
        let k = smooth_factor(TRAIL_SMOOTHING, dt);
        self.pos += (self.target - self.pos) * k;
    }
}

fn tick_loading_gate(time: Res<Time>, mut gate: ResMut<LoadingGate>) {
    gate.advance(time.delta(), time.elapsed_secs_f64());
}

/// Run the Bevy application
pub fn run() {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(
            palette::DARKER.r,
            palette::DARKER.g,
            palette::DARKER.b,
        )))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Scripsmith Portfolio".to_string(),
                canvas: Some("#scripsmith-canvas".to_string()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .init_resource::<LoadingGate>()
        .init_resource::<NavState>()
        .init_resource::<PageLayout>()
        .init_resource::<ProjectPanel>()
        .init_resource::<ContactForm>()
        .init_resource::<Notices>()
        .init_resource::<Reveals>()
        .init_resource::<Showcases>()
        .init_resource::<CursorTrail>()
        .add_plugins(RelayPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(UiPlugin)
        .add_systems(Update, tick_loading_gate)
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripsmith_core::RelayError;

    #[test]
    fn test_loading_gate_flips_once() {
        let mut gate = LoadingGate::default();
        gate.advance(Duration::from_secs_f32(1.0), 1.0);
        assert!(!gate.is_ready());

        gate.advance(Duration::from_secs_f32(1.5), 2.5);
        assert!(gate.is_ready());
        assert_eq!(gate.seconds_since_ready(3.5), 1.0);

        // Further ticks keep the original ready timestamp
        gate.advance(Duration::from_secs_f32(5.0), 7.5);
        assert_eq!(gate.seconds_since_ready(3.5), 1.0);
    }

    #[test]
    fn test_loader_overlay_fades_out() {
        let mut gate = LoadingGate::default();
        assert_eq!(gate.overlay_alpha(0.0), 1.0);
        assert!(gate.overlay_visible(0.0));

        gate.advance(Duration::from_secs_f32(2.0), 2.0);
        assert_eq!(gate.overlay_alpha(2.0), 1.0);
        assert!((gate.overlay_alpha(2.25) - 0.5).abs() < 1e-6);
        assert_eq!(gate.overlay_alpha(2.5), 0.0);
        assert!(!gate.overlay_visible(3.0));
    }

    #[test]
    fn test_nav_threshold_is_inclusive() {
        let mut nav = NavState::default();
        nav.set_scroll(49.9);
        assert!(!nav.scrolled);
        nav.set_scroll(50.0);
        assert!(nav.scrolled);
        nav.set_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_layout_mobile_breakpoints() {
        let mut layout = PageLayout::default();
        layout.update_for_screen(1280.0, 800.0);
        assert!(!layout.is_mobile);
        assert_eq!(layout.ui_scale, 1.0);

        layout.update_for_screen(640.0, 480.0);
        assert!(layout.is_mobile);
        assert_eq!(layout.ui_scale, 1.3);

        // Narrow portrait counts as mobile even below the width cutoff
        layout.update_for_screen(599.0, 900.0);
        assert!(layout.is_mobile);
    }

    #[test]
    fn test_scroll_to_unknown_anchor_is_a_no_op() {
        let mut layout = PageLayout::default();
        layout.record_section("projects", 740.0);

        assert!(layout.request_scroll("projects"));
        assert_eq!(layout.scroll_target, Some(740.0));

        layout.scroll_target = None;
        assert!(!layout.request_scroll("missing"));
        assert_eq!(layout.scroll_target, None);
    }

    #[test]
    fn test_project_selection_ignores_out_of_range() {
        let mut panel = ProjectPanel::default();
        assert!(panel.select(2, 1.0));
        assert_eq!(panel.selected, 2);

        assert!(!panel.select(PROJECTS.len(), 2.0));
        assert!(!panel.select(usize::MAX, 2.0));
        assert_eq!(panel.selected, 2);
        assert_eq!(panel.selected_at, 1.0);
    }

    #[test]
    fn test_project_reselect_keeps_detail_timestamp() {
        let mut panel = ProjectPanel::default();
        panel.select(1, 1.0);
        assert!(!panel.select(1, 5.0));
        assert_eq!(panel.selected_at, 1.0);
    }

    #[test]
    fn test_begin_submit_blocks_double_send() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit());
        assert!(form.submitting);
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_delivered_outcome_clears_fields() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
            submitting: true,
        };
        form.apply_outcome(&RelayOutcome::Delivered);
        assert!(!form.submitting);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_failed_outcome_preserves_fields() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
            submitting: true,
        };
        form.apply_outcome(&RelayOutcome::Failed(RelayError::Rejected { status: 400 }));
        assert!(!form.submitting);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hi");
    }

    #[test]
    fn test_notices_dismiss_in_order() {
        let mut notices = Notices::default();
        notices.push_failure("first");
        notices.push_success("second");

        assert_eq!(notices.current().map(|n| n.text.as_str()), Some("first"));
        notices.dismiss();
        assert_eq!(notices.current().map(|n| n.text.as_str()), Some("second"));
        notices.dismiss();
        assert!(notices.current().is_none());
        notices.dismiss();
    }

    #[test]
    fn test_cursor_trail_seeds_then_smooths() {
        let mut trail = CursorTrail::default();
        trail.retarget(Vec2::new(100.0, 50.0));
        assert_eq!(trail.pos, Vec2::new(100.0, 50.0));
        assert!(trail.visible);

        trail.retarget(Vec2::new(200.0, 50.0));
        assert_eq!(trail.pos, Vec2::new(100.0, 50.0));
        trail.advance(1.0 / 60.0);
        assert!(trail.pos.x > 100.0 && trail.pos.x < 200.0);

        trail.hide();
        assert!(!trail.visible);
    }
}
