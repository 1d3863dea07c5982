//! The portfolio page rendered with egui

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use scripsmith_core::boundary::{FALLBACK_DETAIL, FALLBACK_TITLE};
use scripsmith_core::content::{
    profile, ACHIEVEMENTS, ALL_PROJECTS_URL, CONTACT_CHANNELS, EXTRA_TECHNOLOGIES, HERO_TECH,
    INTERESTS, PROJECTS, SKILL_CATEGORIES, SOCIAL_LINKS,
};
use scripsmith_core::theme::{palette, Rgba};
use scripsmith_core::{
    smooth_factor, LoopWave, RevealKey, RevealRegistry, Section, SkillCategory, Tween,
};

use crate::app::{
    ContactForm, CursorTrail, LoadingGate, NavState, Notices, PageLayout, ProjectPanel, Reveals,
    ShowcaseSlot, Showcases,
};
use crate::relay::{submit_message, PendingOutcomes, RelaySettings};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Layout tracking runs in Update
        app.add_systems(Update, update_page_layout)
            // Main UI system runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
            .add_systems(EguiPrimaryContextPass, page_system);
    }
}

const NAV_HEIGHT: f32 = 56.0;
const CONTENT_WIDTH: f32 = 1100.0;
/// A block counts as in view once its top clears the bottom edge by this much
const REVEAL_MARGIN: f32 = 40.0;

const NAV_TWEEN: Tween = Tween::new(0.0, 0.5);
const HEADING_TWEEN: Tween = Tween::new(0.0, 0.6);
const CARD_TWEEN: Tween = Tween::new(0.0, 0.5);
const DETAIL_TWEEN: Tween = Tween::new(0.0, 0.5);
const CHEVRON_WAVE: LoopWave = LoopWave::new(2.0);

/// Update page layout based on window size
fn update_page_layout(windows: Query<&Window>, mut layout: ResMut<PageLayout>) {
    if let Ok(window) = windows.single() {
        let width = window.width();
        let height = window.height();

        // Only update if dimensions changed significantly
        if (layout.screen_width - width).abs() > 1.0
            || (layout.screen_height - height).abs() > 1.0
        {
            layout.update_for_screen(width, height);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn page_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    gate: Res<LoadingGate>,
    mut layout: ResMut<PageLayout>,
    mut nav: ResMut<NavState>,
    mut panel: ResMut<ProjectPanel>,
    mut form: ResMut<ContactForm>,
    mut notices: ResMut<Notices>,
    mut reveals: ResMut<Reveals>,
    mut showcases: ResMut<Showcases>,
    mut trail: ResMut<CursorTrail>,
    relay_settings: Res<RelaySettings>,
    pending: Res<PendingOutcomes>,
    mut theme_applied: Local<bool>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    if !*theme_applied {
        apply_page_theme(ctx);
        *theme_applied = true;
    }

    let now = time.elapsed_secs_f64();
    let t = time.elapsed_secs();
    let dt = time.delta_secs();

    showcases.clear_anchors();

    // Boot screen replaces the page until the gate opens
    if !gate.is_ready() {
        draw_loader(ctx, t, 1.0);
        trail.hide();
        return;
    }

    let is_mobile = layout.is_mobile;
    let ui_scale = layout.ui_scale;

    // Manual wheel input takes over from any smooth scroll in flight
    if ctx.input(|i| i.raw_scroll_delta.y.abs() > 0.0) {
        layout.scroll_target = None;
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
            if let Some(target) = layout.scroll_target {
                let step =
                    layout.scroll_offset + (target - layout.scroll_offset) * smooth_factor(0.15, dt);
                if (target - step).abs() < 1.0 {
                    area = area.vertical_scroll_offset(target);
                    layout.scroll_target = None;
                } else {
                    area = area.vertical_scroll_offset(step);
                }
            }

            let output = area.show(ui, |ui| {
                let origin = ui.cursor().top();

                layout.record_section(Section::Home.anchor(), 0.0);
                hero_section(
                    ui,
                    &mut layout,
                    &gate,
                    &mut showcases.hero,
                    t,
                    now,
                    ui_scale,
                );

                centered_column(ui, CONTENT_WIDTH, |ui| {
                    if showcases.orbit.boundary.is_failed() {
                        orbit_fallback(ui, 240.0);
                    } else {
                        showcase_frame(ui, &mut showcases.orbit, 240.0);
                    }
                });

                ui.add_space(90.0);
                layout.record_section(Section::Projects.anchor(), ui.cursor().top() - origin);
                projects_section(
                    ui,
                    is_mobile,
                    ui_scale,
                    &mut panel,
                    &mut reveals.0,
                    now,
                );

                ui.add_space(90.0);
                layout.record_section(Section::Skills.anchor(), ui.cursor().top() - origin);
                skills_section(
                    ui,
                    is_mobile,
                    ui_scale,
                    &mut showcases.skills,
                    &mut reveals.0,
                    now,
                );

                ui.add_space(90.0);
                layout.record_section(Section::About.anchor(), ui.cursor().top() - origin);
                about_section(ui, is_mobile, ui_scale, &mut reveals.0, now);

                ui.add_space(90.0);
                layout.record_section(Section::Contact.anchor(), ui.cursor().top() - origin);
                contact_section(
                    ui,
                    is_mobile,
                    ui_scale,
                    &mut showcases.contact,
                    &mut reveals.0,
                    &mut form,
                    &mut notices,
                    &relay_settings,
                    &pending,
                    now,
                );

                footer(ui);
            });

            layout.scroll_offset = output.state.offset.y;
        });

    nav.set_scroll(layout.scroll_offset);

    draw_nav(ctx, &gate, &mut nav, &mut layout, now, ui_scale);
    if is_mobile && nav.menu_open {
        draw_mobile_menu(ctx, &mut nav, &mut layout, ui_scale);
    }
    draw_notices(ctx, &mut notices);
    draw_cursor_trail(ctx, &mut trail, dt, is_mobile);

    // Exit fade of the boot screen over the finished page
    if gate.overlay_visible(now) {
        draw_loader(ctx, t, gate.overlay_alpha(now));
    }
}

/// Force the neon-on-dark look once at startup
fn apply_page_theme(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Dark);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = rgba(palette::DARKER);
    visuals.window_fill = rgba(palette::DARK);
    visuals.extreme_bg_color = rgba(palette::DARKER);
    visuals.faint_bg_color = rgba(palette::DARK);
    visuals.widgets.noninteractive.bg_fill = rgba(palette::DARK);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, rgba(palette::TEXT));
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, rgba(palette::BORDER_DIM));
    visuals.widgets.inactive.bg_fill = rgba(palette::DARK);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, rgba(palette::TEXT));
    visuals.widgets.hovered.bg_fill = rgba(palette::BORDER_DIM);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, rgba(palette::WHITE));
    visuals.widgets.active.bg_fill = rgba(palette::BLUE.with_alpha(200));
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, rgba(palette::DARKER));
    visuals.selection.bg_fill = rgba(palette::BLUE.with_alpha(60));
    visuals.selection.stroke = egui::Stroke::new(1.0, rgba(palette::BLUE));
    visuals.window_corner_radius = egui::CornerRadius::same(8);
    visuals.menu_corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.open.corner_radius = egui::CornerRadius::same(6);
    visuals.hyperlink_color = rgba(palette::BLUE);
    visuals.error_fg_color = rgba(palette::PINK);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(26.0));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(12.0));
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(14.0));
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    ctx.set_style(style);
}

// ---------------------------------------------------------------------------
// Boot screen

fn draw_loader(ctx: &egui::Context, t: f32, alpha: f32) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("boot_loader"),
    ));
    let screen = ctx.screen_rect();
    painter.rect_filled(screen, 0.0, faded(palette::DARKER, alpha));

    let center = screen.center();

    // Three rings spinning at different speeds, the middle one backwards
    let rings: [(f32, f32, Rgba); 3] = [
        (46.0, 2.0, palette::BLUE),
        (36.0, -3.0, palette::PURPLE),
        (26.0, 1.5, palette::GREEN),
    ];
    for (radius, period, color) in rings {
        let start = LoopWave::new(period).angle(t);
        paint_arc(
            &painter,
            center,
            radius,
            start,
            std::f32::consts::TAU * 0.75,
            egui::Stroke::new(3.0, faded(color, alpha)),
        );
    }

    for i in 0..3 {
        let wave = LoopWave::with_phase(1.5, -(i as f32) * 0.2 / 1.5);
        let pulse = wave.unit(t);
        let pos = egui::pos2(center.x + (i as f32 - 1.0) * 18.0, center.y + 80.0);
        painter.circle_filled(
            pos,
            3.0 + 2.0 * pulse,
            faded(palette::WHITE, alpha * (0.4 + 0.6 * pulse)),
        );
    }

    painter.text(
        center + egui::vec2(0.0, 120.0),
        egui::Align2::CENTER_CENTER,
        profile::LOADING_HEADLINE,
        egui::FontId::monospace(17.0),
        faded(palette::TEXT, alpha),
    );
}

// ---------------------------------------------------------------------------
// Navigation

fn draw_nav(
    ctx: &egui::Context,
    gate: &LoadingGate,
    nav: &mut NavState,
    layout: &mut PageLayout,
    now: f64,
    ui_scale: f32,
) {
    // Slide in from above once the gate opens
    let entered = gate.seconds_since_ready(now);
    let y = NAV_TWEEN.sample(entered, -(NAV_HEIGHT + 10.0), 0.0);

    let screen_width = layout.screen_width;
    let is_mobile = layout.is_mobile;
    let scrolled = nav.scrolled;

    egui::Area::new(egui::Id::new("page_nav"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(0.0, y))
        .show(ctx, |ui| {
            ui.set_width(screen_width);
            let fill = if scrolled {
                rgba(palette::DARKER.with_alpha(236))
            } else {
                egui::Color32::TRANSPARENT
            };
            egui::Frame::new()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(18, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let brand = gradient_job(
                            profile::WORDMARK,
                            palette::BLUE,
                            palette::PURPLE,
                            20.0 * ui_scale,
                        );
                        if ui
                            .add(egui::Button::new(brand).fill(egui::Color32::TRANSPARENT))
                            .clicked()
                        {
                            layout.request_scroll(Section::Home.anchor());
                            nav.menu_open = false;
                        }

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if is_mobile {
                                    let icon = if nav.menu_open { "✕" } else { "☰" };
                                    if ui
                                        .button(egui::RichText::new(icon).size(18.0 * ui_scale))
                                        .clicked()
                                    {
                                        nav.menu_open = !nav.menu_open;
                                    }
                                } else {
                                    for section in Section::ALL.iter().rev() {
                                        let label = egui::RichText::new(section.label())
                                            .size(14.0)
                                            .color(rgba(palette::TEXT_DIM));
                                        if ui
                                            .add(
                                                egui::Button::new(label)
                                                    .fill(egui::Color32::TRANSPARENT),
                                            )
                                            .clicked()
                                        {
                                            layout.request_scroll(section.anchor());
                                        }
                                    }
                                }
                            },
                        );
                    });
                });

            if scrolled {
                let bottom = ui.min_rect().bottom();
                ui.painter().line_segment(
                    [egui::pos2(0.0, bottom), egui::pos2(screen_width, bottom)],
                    egui::Stroke::new(1.0, rgba(palette::BORDER_DIM.with_alpha(160))),
                );
            }
        });
}

fn draw_mobile_menu(
    ctx: &egui::Context,
    nav: &mut NavState,
    layout: &mut PageLayout,
    ui_scale: f32,
) {
    let screen = ctx.screen_rect();

    // Dim layer behind the sheet closes the menu on tap
    egui::Area::new(egui::Id::new("menu_scrim"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
            if response.clicked() {
                nav.menu_open = false;
            }
        });

    let sheet_width = (screen.width() * 0.72).min(300.0);
    egui::Area::new(egui::Id::new("menu_sheet"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(screen.right() - sheet_width, 0.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(rgba(palette::DARK))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(sheet_width - 40.0);
                    ui.set_min_height(screen.height() - 40.0);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui
                            .button(egui::RichText::new("✕").size(20.0 * ui_scale))
                            .clicked()
                        {
                            nav.menu_open = false;
                        }
                    });
                    ui.add_space(16.0);

                    for section in Section::ALL {
                        let label = egui::RichText::new(section.label())
                            .size(18.0 * ui_scale)
                            .color(rgba(palette::TEXT));
                        if ui
                            .add(egui::Button::new(label).fill(egui::Color32::TRANSPARENT))
                            .clicked()
                        {
                            layout.request_scroll(section.anchor());
                            nav.menu_open = false;
                        }
                        ui.add_space(6.0);
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Sections

fn hero_section(
    ui: &mut egui::Ui,
    layout: &mut PageLayout,
    gate: &LoadingGate,
    slot: &mut ShowcaseSlot,
    t: f32,
    now: f64,
    ui_scale: f32,
) {
    let entered = gate.seconds_since_ready(now);
    let screen_h = layout.screen_height;

    // Dim wordmark standing in for the particle field when it is unavailable.
    // Painted before the copy so the hero text draws over it.
    if slot.boundary.is_failed() {
        let clip = ui.clip_rect();
        let top = ui.cursor().top();
        ui.painter().text(
            egui::pos2(clip.center().x, top + screen_h * 0.46),
            egui::Align2::CENTER_CENTER,
            "Developer",
            egui::FontId::proportional(64.0 * ui_scale),
            rgba(palette::BLUE.with_alpha(51)),
        );
    }

    let scope = ui.scope(|ui| {
        ui.set_min_height(screen_h * 0.92);
        ui.add_space(screen_h * 0.16);

        centered_column(ui, CONTENT_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                fade_block(ui, Tween::new(0.2, 0.8).progress(entered), |ui| {
                    ui.label(
                        egui::RichText::new("Hi, I'm")
                            .size(20.0 * ui_scale)
                            .color(rgba(palette::TEXT_DIM)),
                    );
                });

                fade_block(ui, Tween::new(0.4, 0.8).progress(entered), |ui| {
                    let name = gradient_job(
                        profile::NAME,
                        palette::BLUE,
                        palette::PURPLE,
                        58.0 * ui_scale,
                    );
                    ui.label(name);
                });

                fade_block(ui, Tween::new(0.6, 0.8).progress(entered), |ui| {
                    ui.label(subtitle_job(24.0 * ui_scale));
                });

                ui.add_space(10.0);
                fade_block(ui, Tween::new(0.8, 0.8).progress(entered), |ui| {
                    centered_column(ui, 760.0, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(profile::TAGLINE)
                                    .size(15.0 * ui_scale)
                                    .color(rgba(palette::TEXT_DIM)),
                            );
                        });
                    });
                });

                ui.add_space(20.0);
                fade_block(ui, Tween::new(1.0, 0.8).progress(entered), |ui| {
                    ui.horizontal(|ui| {
                        // Keep the pair roughly centered in the column
                        let pad = (ui.available_width() / 2.0 - 180.0).max(0.0);
                        ui.add_space(pad);

                        let work = egui::Button::new(
                            egui::RichText::new("View My Work")
                                .size(15.0 * ui_scale)
                                .strong()
                                .color(rgba(palette::DARKER)),
                        )
                        .fill(rgba(palette::BLUE))
                        .corner_radius(18.0)
                        .min_size(egui::vec2(150.0, 38.0));
                        if ui.add(work).clicked() {
                            layout.request_scroll(Section::Projects.anchor());
                        }

                        let resume = egui::Button::new(
                            egui::RichText::new("Download CV")
                                .size(15.0 * ui_scale)
                                .color(rgba(palette::PURPLE)),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::new(1.0, rgba(palette::PURPLE)))
                        .corner_radius(18.0)
                        .min_size(egui::vec2(150.0, 38.0));
                        if ui.add(resume).clicked() {
                            open_in_new_tab(ui.ctx(), profile::RESUME_URL);
                        }
                    });
                });

                ui.add_space(26.0);
                fade_block(ui, Tween::new(1.2, 0.8).progress(entered), |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (i, tech) in HERO_TECH.iter().enumerate() {
                            let alpha = Tween::new(1.6, 0.5).staggered(i, 0.1).progress(entered);
                            fade_block(ui, alpha, |ui| {
                                chip(ui, tech, palette::TEXT_DIM, ui_scale);
                            });
                        }
                    });
                });

                // Bouncing chevron pointing at the next section
                let bounce = CHEVRON_WAVE.between(t, 0.0, 10.0);
                ui.add_space(22.0 + bounce);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(26.0, 14.0), egui::Sense::hover());
                let c = rect.center();
                let stroke = egui::Stroke::new(2.0, rgba(palette::TEXT_FAINT));
                ui.painter()
                    .line_segment([egui::pos2(c.x - 9.0, c.y - 4.0), egui::pos2(c.x, c.y + 4.0)], stroke);
                ui.painter()
                    .line_segment([egui::pos2(c.x, c.y + 4.0), egui::pos2(c.x + 9.0, c.y - 4.0)], stroke);
            });
        });
    });

    // The particle backdrop fills the whole hero, not just the text column
    let clip = ui.clip_rect();
    let hero_rect = egui::Rect::from_min_max(
        egui::pos2(clip.left(), scope.response.rect.top()),
        egui::pos2(clip.right(), scope.response.rect.bottom()),
    );
    if !slot.boundary.is_failed() && hero_rect.intersects(clip) {
        slot.place(
            Vec2::new(hero_rect.center().x, hero_rect.center().y),
            Vec2::new(hero_rect.width(), hero_rect.height()),
        );
    }
}

fn projects_section(
    ui: &mut egui::Ui,
    is_mobile: bool,
    ui_scale: f32,
    panel: &mut ProjectPanel,
    reveals: &mut RevealRegistry,
    now: f64,
) {
    centered_column(ui, CONTENT_WIDTH, |ui| {
        section_heading(ui, reveals, Section::Projects, now, ui_scale);
        ui.add_space(26.0);

        if is_mobile {
            project_list(ui, panel, reveals, now, ui_scale);
            ui.add_space(18.0);
            project_detail(ui, panel, now, ui_scale);
        } else {
            ui.columns(2, |cols| {
                project_list(&mut cols[0], panel, reveals, now, ui_scale);
                project_detail(&mut cols[1], panel, now, ui_scale);
            });
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let all = egui::Button::new(
                egui::RichText::new("View All Projects")
                    .size(14.0 * ui_scale)
                    .color(rgba(palette::BLUE)),
            )
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, rgba(palette::BLUE)))
            .corner_radius(18.0)
            .min_size(egui::vec2(160.0, 36.0));
            if ui.add(all).clicked() {
                open_in_new_tab(ui.ctx(), ALL_PROJECTS_URL);
            }
        });
    });
}

fn project_list(
    ui: &mut egui::Ui,
    panel: &mut ProjectPanel,
    reveals: &mut RevealRegistry,
    now: f64,
    ui_scale: f32,
) {
    for (i, project) in PROJECTS.iter().enumerate() {
        let key = RevealKey::item("projects.card", i as u32);
        let alpha = reveal_progress(ui, reveals, key, now, CARD_TWEEN.staggered(i, 0.1));
        let accent = hex_or(project.color, palette::BLUE);
        let selected = panel.selected == i;

        fade_block(ui, alpha, |ui| {
            let stroke = if selected {
                egui::Stroke::new(2.0, rgba(accent))
            } else {
                egui::Stroke::new(1.0, rgba(palette::BORDER_DIM))
            };
            let inner = egui::Frame::new()
                .fill(rgba(palette::DARK.with_alpha(235)))
                .stroke(stroke)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let title_color = if selected { rgba(accent) } else { rgba(palette::WHITE) };
                    ui.label(
                        egui::RichText::new(project.title)
                            .size(17.0 * ui_scale)
                            .strong()
                            .color(title_color),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(project.description)
                            .size(13.0 * ui_scale)
                            .color(rgba(palette::TEXT_DIM)),
                    );
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in project.summary_tech() {
                            chip(ui, tag, accent, ui_scale);
                        }
                        if let Some(extra) = project.overflow_label() {
                            chip(ui, &extra, palette::TEXT_FAINT, ui_scale);
                        }
                    });
                });

            if inner.response.interact(egui::Sense::click()).clicked() {
                panel.select(i, now);
            }
        });
        ui.add_space(10.0);
    }
}

fn project_detail(ui: &mut egui::Ui, panel: &ProjectPanel, now: f64, ui_scale: f32) {
    let project = panel.selected_project();
    let accent = hex_or(project.color, palette::BLUE);

    // Re-runs from zero whenever another card is picked
    let elapsed = (now - panel.selected_at).max(0.0) as f32;
    let p = DETAIL_TWEEN.progress(elapsed);

    ui.scope(|ui| {
        ui.set_opacity(p.max(0.05));
        ui.add_space((1.0 - p) * 10.0);

        egui::Frame::new()
            .fill(rgba(palette::DARK.with_alpha(235)))
            .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                let (banner, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 150.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                painter.rect_filled(banner, 10.0, rgba(accent.with_alpha(36)));
                painter.rect_stroke(
                    banner,
                    10.0,
                    egui::Stroke::new(1.0, rgba(accent.with_alpha(120))),
                    egui::StrokeKind::Inside,
                );
                let initial = project.title.chars().next().unwrap_or('?');
                painter.text(
                    banner.center(),
                    egui::Align2::CENTER_CENTER,
                    initial,
                    egui::FontId::proportional(54.0),
                    rgba(accent),
                );
                painter.text(
                    banner.right_bottom() - egui::vec2(8.0, 6.0),
                    egui::Align2::RIGHT_BOTTOM,
                    project.image,
                    egui::FontId::monospace(10.0),
                    rgba(palette::TEXT_FAINT),
                );

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(project.title)
                        .size(21.0 * ui_scale)
                        .strong()
                        .color(rgba(palette::WHITE)),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(project.description)
                        .size(14.0 * ui_scale)
                        .color(rgba(palette::TEXT)),
                );

                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in project.tech {
                        chip(ui, tag, accent, ui_scale);
                    }
                });

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    let code = egui::Button::new(
                        egui::RichText::new("View Code")
                            .size(14.0 * ui_scale)
                            .color(rgba(palette::WHITE)),
                    )
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER)))
                    .corner_radius(8.0);
                    if ui.add(code).clicked() {
                        open_in_new_tab(ui.ctx(), project.github);
                    }

                    let live = egui::Button::new(
                        egui::RichText::new("Live Demo")
                            .size(14.0 * ui_scale)
                            .strong()
                            .color(rgba(palette::DARKER)),
                    )
                    .fill(rgba(accent))
                    .corner_radius(8.0);
                    if ui.add(live).clicked() {
                        open_in_new_tab(ui.ctx(), project.live);
                    }
                });
            });
    });
}

fn skills_section(
    ui: &mut egui::Ui,
    is_mobile: bool,
    ui_scale: f32,
    slot: &mut ShowcaseSlot,
    reveals: &mut RevealRegistry,
    now: f64,
) {
    centered_column(ui, CONTENT_WIDTH, |ui| {
        section_heading(ui, reveals, Section::Skills, now, ui_scale);
        ui.add_space(26.0);

        if is_mobile {
            for (ci, category) in SKILL_CATEGORIES.iter().enumerate() {
                skill_category(ui, ci, category, reveals, now, ui_scale);
                ui.add_space(14.0);
            }
        } else {
            ui.columns(3, |cols| {
                for (ci, category) in SKILL_CATEGORIES.iter().enumerate() {
                    skill_category(&mut cols[ci], ci, category, reveals, now, ui_scale);
                }
            });
        }

        ui.add_space(30.0);
        showcase_frame(ui, slot, 300.0);

        ui.add_space(26.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Additional Technologies")
                    .size(17.0 * ui_scale)
                    .strong()
                    .color(rgba(palette::WHITE)),
            );
        });
        ui.add_space(10.0);
        let extra = reveal_elapsed(ui, reveals, RevealKey::group("skills.extra"), now);
        ui.horizontal_wrapped(|ui| {
            for (i, tech) in EXTRA_TECHNOLOGIES.iter().enumerate() {
                let alpha = extra
                    .map(|e| Tween::new(0.0, 0.4).staggered(i, 0.05).progress(e))
                    .unwrap_or(0.0);
                fade_block(ui, alpha, |ui| {
                    hover_chip(ui, tech, ui_scale);
                });
            }
        });
    });
}

fn skill_category(
    ui: &mut egui::Ui,
    index: usize,
    category: &SkillCategory,
    reveals: &mut RevealRegistry,
    now: f64,
    ui_scale: f32,
) {
    let accent = hex_or(category.color, palette::BLUE);
    let key = RevealKey::item("skills.category", index as u32);
    let elapsed = reveal_elapsed(ui, reveals, key, now);
    let alpha = elapsed
        .map(|e| CARD_TWEEN.staggered(index, 0.2).progress(e))
        .unwrap_or(0.0);

    fade_block(ui, alpha, |ui| {
        egui::Frame::new()
            .fill(rgba(palette::DARK.with_alpha(235)))
            .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(category.title)
                        .size(16.0 * ui_scale)
                        .strong()
                        .color(rgba(accent)),
                );
                ui.add_space(10.0);

                for (si, skill) in category.skills.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(skill.name)
                                .size(13.0 * ui_scale)
                                .color(rgba(palette::TEXT)),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{}%", skill.level))
                                        .size(12.0 * ui_scale)
                                        .color(rgba(palette::TEXT_FAINT)),
                                );
                            },
                        );
                    });

                    // Bars sweep out one after another once the card is in view
                    let fill = elapsed
                        .map(|e| {
                            Tween::new(index as f32 * 0.2 + 0.3, 1.0)
                                .staggered(si, 0.1)
                                .progress(e)
                        })
                        .unwrap_or(0.0);
                    skill_bar(ui, skill.level, accent, fill);
                    ui.add_space(8.0);
                }
            });
    });
}

fn skill_bar(ui: &mut egui::Ui, level: u8, accent: Rgba, progress: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 8.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, rgba(palette::BORDER_DIM.with_alpha(120)));

    let width = rect.width() * (level as f32 / 100.0) * progress.clamp(0.0, 1.0);
    if width > 1.0 {
        let fill = egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
        painter.rect_filled(fill, 4.0, rgba(accent));
    }
}

fn about_section(
    ui: &mut egui::Ui,
    is_mobile: bool,
    ui_scale: f32,
    reveals: &mut RevealRegistry,
    now: f64,
) {
    centered_column(ui, CONTENT_WIDTH, |ui| {
        section_heading(ui, reveals, Section::About, now, ui_scale);
        ui.add_space(26.0);

        if is_mobile {
            about_story(ui, reveals, now, ui_scale);
            ui.add_space(18.0);
            about_portrait(ui, reveals, now, ui_scale);
        } else {
            ui.columns(2, |cols| {
                about_story(&mut cols[0], reveals, now, ui_scale);
                about_portrait(&mut cols[1], reveals, now, ui_scale);
            });
        }
    });
}

fn about_story(ui: &mut egui::Ui, reveals: &mut RevealRegistry, now: f64, ui_scale: f32) {
    let alpha = reveal_progress(ui, reveals, RevealKey::group("about.bio"), now, HEADING_TWEEN);
    fade_block(ui, alpha, |ui| {
        for paragraph in profile::BIO {
            ui.label(
                egui::RichText::new(paragraph)
                    .size(14.0 * ui_scale)
                    .color(rgba(palette::TEXT)),
            );
            ui.add_space(10.0);
        }
    });

    ui.add_space(8.0);
    for (i, achievement) in ACHIEVEMENTS.iter().enumerate() {
        let key = RevealKey::item("about.achievement", i as u32);
        let alpha = reveal_progress(ui, reveals, key, now, CARD_TWEEN.staggered(i, 0.2));
        fade_block(ui, alpha, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(achievement.glyph).size(22.0 * ui_scale));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(achievement.title)
                            .size(14.0 * ui_scale)
                            .strong()
                            .color(rgba(palette::WHITE)),
                    );
                    ui.label(
                        egui::RichText::new(achievement.description)
                            .size(12.0 * ui_scale)
                            .color(rgba(palette::TEXT_DIM)),
                    );
                });
            });
        });
        ui.add_space(10.0);
    }

    ui.add_space(6.0);
    let resume = egui::Button::new(
        egui::RichText::new("Download Resume")
            .size(14.0 * ui_scale)
            .color(rgba(palette::PURPLE)),
    )
    .fill(egui::Color32::TRANSPARENT)
    .stroke(egui::Stroke::new(1.0, rgba(palette::PURPLE)))
    .corner_radius(8.0);
    if ui.add(resume).clicked() {
        open_in_new_tab(ui.ctx(), profile::RESUME_URL);
    }
}

fn about_portrait(ui: &mut egui::Ui, reveals: &mut RevealRegistry, now: f64, ui_scale: f32) {
    let alpha = reveal_progress(
        ui,
        reveals,
        RevealKey::group("about.portrait"),
        now,
        HEADING_TWEEN,
    );
    fade_block(ui, alpha, |ui| {
        egui::Frame::new()
            .fill(rgba(palette::DARK.with_alpha(235)))
            .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(120.0, 120.0), egui::Sense::hover());
                    let painter = ui.painter();
                    painter.circle(
                        rect.center(),
                        54.0,
                        rgba(palette::PURPLE.with_alpha(40)),
                        egui::Stroke::new(2.0, rgba(palette::PURPLE)),
                    );
                    let initial = profile::NAME.chars().next().unwrap_or('?');
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        initial,
                        egui::FontId::proportional(46.0),
                        rgba(palette::WHITE),
                    );

                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(profile::NAME)
                            .size(19.0 * ui_scale)
                            .strong()
                            .color(rgba(palette::WHITE)),
                    );
                    ui.label(subtitle_job(13.0 * ui_scale));
                });
            });
    });

    ui.add_space(14.0);
    ui.label(
        egui::RichText::new("Beyond Development")
            .size(15.0 * ui_scale)
            .strong()
            .color(rgba(palette::WHITE)),
    );
    ui.add_space(6.0);

    let interest_accents = [palette::BLUE, palette::GREEN, palette::PURPLE];
    for (i, interest) in INTERESTS.iter().enumerate() {
        let key = RevealKey::item("about.interest", i as u32);
        let alpha = reveal_progress(
            ui,
            reveals,
            key,
            now,
            Tween::new(0.6, 0.5).staggered(i, 0.1),
        );
        let accent = interest_accents[i % interest_accents.len()];
        fade_block(ui, alpha, |ui| {
            egui::Frame::new()
                .fill(rgba(palette::DARK.with_alpha(200)))
                .stroke(egui::Stroke::new(1.0, rgba(accent.with_alpha(90))))
                .corner_radius(10.0)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(interest.title)
                            .size(13.0 * ui_scale)
                            .strong()
                            .color(rgba(accent)),
                    );
                    ui.label(
                        egui::RichText::new(interest.description)
                            .size(12.0 * ui_scale)
                            .color(rgba(palette::TEXT_DIM)),
                    );
                });
        });
        ui.add_space(8.0);
    }
}

#[allow(clippy::too_many_arguments)]
fn contact_section(
    ui: &mut egui::Ui,
    is_mobile: bool,
    ui_scale: f32,
    contact_slot: &mut ShowcaseSlot,
    reveals: &mut RevealRegistry,
    form: &mut ContactForm,
    notices: &mut Notices,
    relay_settings: &RelaySettings,
    pending: &PendingOutcomes,
    now: f64,
) {
    centered_column(ui, CONTENT_WIDTH, |ui| {
        section_heading(ui, reveals, Section::Contact, now, ui_scale);
        ui.add_space(26.0);

        if is_mobile {
            contact_channels(ui, contact_slot, reveals, now, ui_scale);
            ui.add_space(18.0);
            contact_form(ui, form, notices, relay_settings, pending, ui_scale);
        } else {
            ui.columns(2, |cols| {
                contact_channels(&mut cols[0], contact_slot, reveals, now, ui_scale);
                contact_form(&mut cols[1], form, notices, relay_settings, pending, ui_scale);
            });
        }
    });
}

fn contact_channels(
    ui: &mut egui::Ui,
    slot: &mut ShowcaseSlot,
    reveals: &mut RevealRegistry,
    now: f64,
    ui_scale: f32,
) {
    let alpha = reveal_progress(
        ui,
        reveals,
        RevealKey::group("contact.channels"),
        now,
        HEADING_TWEEN,
    );
    fade_block(ui, alpha, |ui| {
        egui::Frame::new()
            .fill(rgba(palette::DARK.with_alpha(235)))
            .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new("Get in Touch")
                        .size(18.0 * ui_scale)
                        .strong()
                        .color(rgba(palette::WHITE)),
                );
                ui.add_space(10.0);

                for channel in CONTACT_CHANNELS {
                    let accent = hex_or(channel.color, palette::BLUE);
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(32.0, 32.0),
                            egui::Sense::hover(),
                        );
                        let painter = ui.painter();
                        painter.circle(
                            rect.center(),
                            15.0,
                            rgba(accent.with_alpha(30)),
                            egui::Stroke::new(1.0, rgba(accent)),
                        );
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            channel.glyph,
                            egui::FontId::proportional(12.0),
                            rgba(accent),
                        );
                        ui.label(
                            egui::RichText::new(channel.value)
                                .size(13.0 * ui_scale)
                                .color(rgba(palette::TEXT)),
                        );
                    });
                    ui.add_space(4.0);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    for link in SOCIAL_LINKS {
                        let accent = hex_or(link.color, palette::BLUE);
                        let button = egui::Button::new(
                            egui::RichText::new(link.name)
                                .size(13.0 * ui_scale)
                                .color(rgba(accent)),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::new(1.0, rgba(accent.with_alpha(140))))
                        .corner_radius(8.0);
                        if ui.add(button).clicked() {
                            open_in_new_tab(ui.ctx(), link.url);
                        }
                    }
                });
            });
    });

    ui.add_space(16.0);
    showcase_frame(ui, slot, 190.0);

    ui.add_space(16.0);
    egui::Frame::new()
        .fill(rgba(palette::DARK.with_alpha(160)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(profile::RESPONSE_NOTE)
                    .size(12.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
        });
}

fn contact_form(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    notices: &mut Notices,
    relay_settings: &RelaySettings,
    pending: &PendingOutcomes,
    ui_scale: f32,
) {
    egui::Frame::new()
        .fill(rgba(palette::DARK.with_alpha(235)))
        .stroke(egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                egui::RichText::new("Name")
                    .size(12.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.name)
                    .hint_text("Your name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("Email")
                    .size(12.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text("you@example.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("Message")
                    .size(12.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Tell me about your project...")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(14.0);

            let sending = form.submitting;
            let label = if sending { "Sending..." } else { "Send Message" };
            let button = egui::Button::new(
                egui::RichText::new(label)
                    .size(15.0 * ui_scale)
                    .strong()
                    .color(rgba(palette::DARKER)),
            )
            .fill(rgba(palette::PINK))
            .corner_radius(8.0);

            let response = ui
                .add_enabled_ui(!sending, |ui| {
                    ui.add_sized([ui.available_width(), 40.0], button)
                })
                .inner;

            if response.clicked() {
                let payload = form.payload();
                match payload.validate() {
                    Err(error) => notices.push_failure(error.to_string()),
                    Ok(()) => {
                        if form.begin_submit() {
                            submit_message(&relay_settings.config, payload, pending);
                        }
                    }
                }
            }

            if sending {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label(
                        egui::RichText::new("Delivering your message")
                            .size(12.0 * ui_scale)
                            .color(rgba(palette::TEXT_DIM)),
                    );
                });
            }
        });
}

fn footer(ui: &mut egui::Ui) {
    ui.add_space(60.0);
    ui.separator();
    ui.add_space(18.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(profile::FOOTER)
                .size(12.0)
                .color(rgba(palette::TEXT_FAINT)),
        );
    });
    ui.add_space(26.0);
}

// ---------------------------------------------------------------------------
// Overlays

fn draw_notices(ctx: &egui::Context, notices: &mut Notices) {
    let Some(notice) = notices.current().cloned() else {
        return;
    };

    let title = if notice.success {
        "Message Sent"
    } else {
        "Something Went Wrong"
    };
    egui::Window::new(title)
        .order(egui::Order::Foreground)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            let color = if notice.success {
                rgba(palette::GREEN)
            } else {
                rgba(palette::PINK)
            };
            ui.colored_label(color, &notice.text);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                notices.dismiss();
            }
        });
}

fn draw_cursor_trail(ctx: &egui::Context, trail: &mut CursorTrail, dt: f32, is_mobile: bool) {
    if is_mobile {
        trail.hide();
        return;
    }

    match ctx.pointer_latest_pos() {
        Some(pos) => trail.retarget(Vec2::new(pos.x, pos.y)),
        None => trail.hide(),
    }
    if !trail.visible {
        return;
    }
    trail.advance(dt);

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("cursor_glow"),
    ));
    let pos = egui::pos2(trail.pos.x, trail.pos.y);
    painter.circle(
        pos,
        13.0,
        rgba(palette::BLUE.with_alpha(26)),
        egui::Stroke::new(1.5, rgba(palette::BLUE.with_alpha(150))),
    );
    painter.circle_filled(pos, 3.0, rgba(palette::BLUE));
}

// ---------------------------------------------------------------------------
// Shared widgets

fn section_heading(
    ui: &mut egui::Ui,
    reveals: &mut RevealRegistry,
    section: Section,
    now: f64,
    ui_scale: f32,
) {
    let Some(heading) = section.heading() else {
        return;
    };

    let key = RevealKey::group(section.anchor());
    let p = reveal_progress(ui, reveals, key, now, HEADING_TWEEN);
    fade_block(ui, p, |ui| {
        ui.add_space((1.0 - p) * 12.0);
        ui.vertical_centered(|ui| {
            let from = hex_or(heading.gradient.0, palette::BLUE);
            let to = hex_or(heading.gradient.1, palette::PURPLE);
            ui.label(gradient_job(heading.title, from, to, 30.0 * ui_scale));
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(heading.subtitle)
                    .size(14.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
        });
    });
}

/// Reserve a page region for a 3D group, or show its fallback card
fn showcase_frame(ui: &mut egui::Ui, slot: &mut ShowcaseSlot, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );

    if slot.boundary.is_failed() {
        fallback_card(ui.painter(), rect);
        return;
    }

    ui.painter().rect_stroke(
        rect,
        12.0,
        egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)),
        egui::StrokeKind::Inside,
    );
    if ui.is_rect_visible(rect) {
        slot.place(
            Vec2::new(rect.center().x, rect.center().y),
            Vec2::new(rect.width(), rect.height()),
        );
    }
}

/// Static logo names shown in place of the orbit when its scene failed
fn orbit_fallback(ui: &mut egui::Ui, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 12.0, rgba(palette::DARK.with_alpha(50)));
    painter.rect_stroke(
        rect,
        12.0,
        egui::Stroke::new(1.0, rgba(palette::BLUE.with_alpha(50))),
        egui::StrokeKind::Inside,
    );

    let names = [
        ("React", palette::BLUE),
        ("Three.js", palette::PURPLE),
        ("Node.js", palette::GREEN),
    ];
    for (i, (name, accent)) in names.iter().enumerate() {
        let x = rect.left() + rect.width() * (i as f32 + 0.5) / names.len() as f32;
        painter.text(
            egui::pos2(x, rect.center().y),
            egui::Align2::CENTER_CENTER,
            *name,
            egui::FontId::proportional(18.0),
            rgba(*accent),
        );
    }
}

fn fallback_card(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 12.0, rgba(palette::DARK));
    painter.rect_stroke(
        rect,
        12.0,
        egui::Stroke::new(1.0, rgba(palette::BORDER_DIM)),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center() - egui::vec2(0.0, 10.0),
        egui::Align2::CENTER_CENTER,
        FALLBACK_TITLE,
        egui::FontId::proportional(16.0),
        rgba(palette::TEXT),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        FALLBACK_DETAIL,
        egui::FontId::proportional(12.0),
        rgba(palette::TEXT_FAINT),
    );
}

fn chip(ui: &mut egui::Ui, text: &str, accent: Rgba, ui_scale: f32) {
    egui::Frame::new()
        .fill(rgba(accent.with_alpha(24)))
        .stroke(egui::Stroke::new(1.0, rgba(accent.with_alpha(120))))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(12.0 * ui_scale)
                    .color(rgba(accent)),
            );
        });
}

/// Chip that brightens its border under the pointer
fn hover_chip(ui: &mut egui::Ui, text: &str, ui_scale: f32) {
    let response = egui::Frame::new()
        .fill(rgba(palette::TEXT_DIM.with_alpha(24)))
        .stroke(egui::Stroke::new(1.0, rgba(palette::TEXT_DIM.with_alpha(120))))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(12.0 * ui_scale)
                    .color(rgba(palette::TEXT_DIM)),
            );
        })
        .response
        .interact(egui::Sense::hover());

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            10.0,
            egui::Stroke::new(1.0, rgba(palette::BLUE)),
            egui::StrokeKind::Inside,
        );
    }
}

// ---------------------------------------------------------------------------
// Helpers

/// Latch the key once the next widget would be on screen; elapsed since
fn reveal_elapsed(
    ui: &egui::Ui,
    reveals: &mut RevealRegistry,
    key: RevealKey,
    now: f64,
) -> Option<f32> {
    let visible = ui.cursor().top() < ui.clip_rect().bottom() - REVEAL_MARGIN;
    reveals.sample(key, visible, now)
}

fn reveal_progress(
    ui: &egui::Ui,
    reveals: &mut RevealRegistry,
    key: RevealKey,
    now: f64,
    tween: Tween,
) -> f32 {
    reveal_elapsed(ui, reveals, key, now)
        .map(|elapsed| tween.progress(elapsed))
        .unwrap_or(0.0)
}

fn fade_block(ui: &mut egui::Ui, alpha: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.scope(|ui| {
        ui.set_opacity(alpha.clamp(0.0, 1.0));
        add_contents(ui);
    });
}

/// A horizontally centered column capped at `max_width`
fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(max_width);
    let pad = ((ui.available_width() - width) * 0.5).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

/// Title text with a left-to-right color sweep
fn gradient_job(text: &str, from: Rgba, to: Rgba, size: f32) -> egui::text::LayoutJob {
    let font = egui::FontId::proportional(size);
    let mut job = egui::text::LayoutJob::default();
    let chars: Vec<char> = text.chars().collect();
    let span = chars.len().saturating_sub(1).max(1) as f32;
    for (i, ch) in chars.iter().enumerate() {
        let color = from.lerp(to, i as f32 / span);
        job.append(
            &ch.to_string(),
            0.0,
            egui::TextFormat {
                font_id: font.clone(),
                color: rgba(color),
                ..Default::default()
            },
        );
    }
    job
}

/// The hero subtitle with its accented segments on one line
fn subtitle_job(size: f32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for (i, (text, accent)) in profile::SUBTITLE.iter().enumerate() {
        let color = if accent.is_empty() {
            rgba(palette::TEXT)
        } else {
            rgba(hex_or(accent, palette::TEXT))
        };
        let leading = if i == 0 { 0.0 } else { 8.0 };
        job.append(
            text,
            leading,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color,
                ..Default::default()
            },
        );
    }
    job
}

fn paint_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    stroke: egui::Stroke,
) {
    let segments = 24;
    let points: Vec<egui::Pos2> = (0..=segments)
        .map(|i| {
            let angle = start + sweep * (i as f32 / segments as f32);
            egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect();
    painter.add(egui::Shape::line(points, stroke));
}

fn rgba(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn faded(color: Rgba, alpha: f32) -> egui::Color32 {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    rgba(color.with_alpha(a))
}

fn hex_or(hex: &str, fallback: Rgba) -> Rgba {
    Rgba::from_hex(hex).unwrap_or(fallback)
}

fn open_in_new_tab(ctx: &egui::Context, url: &str) {
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_job_colors_every_char() {
        let job = gradient_job("Projects", palette::BLUE, palette::PURPLE, 30.0);
        assert_eq!(job.sections.len(), "Projects".chars().count());
        assert_eq!(job.sections[0].format.color, rgba(palette::BLUE));
        assert_eq!(
            job.sections.last().map(|s| s.format.color),
            Some(rgba(palette::PURPLE))
        );
    }

    #[test]
    fn test_gradient_job_single_char_uses_start_color() {
        let job = gradient_job("X", palette::GREEN, palette::PINK, 20.0);
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].format.color, rgba(palette::GREEN));
    }

    #[test]
    fn test_subtitle_job_keeps_segment_count() {
        let job = subtitle_job(24.0);
        assert_eq!(job.sections.len(), profile::SUBTITLE.len());
    }

    #[test]
    fn test_hex_or_falls_back_on_garbage() {
        assert_eq!(hex_or("#00D4FF", palette::PINK), palette::BLUE);
        assert_eq!(hex_or("not-a-color", palette::PINK), palette::PINK);
    }

    #[test]
    fn test_faded_scales_alpha() {
        assert_eq!(faded(palette::WHITE, 1.0), rgba(palette::WHITE));
        assert_eq!(faded(palette::WHITE, 0.0).a(), 0);
        let half = faded(palette::WHITE, 0.5);
        assert!(half.a() >= 127 && half.a() <= 128);
    }
}
