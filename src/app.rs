//! The eframe application: paints a [`Page`] every frame.

use std::path::Path;

use eframe::egui::{
    self, Align, Align2, Color32, FontFamily, FontId, Layout, RichText, Rounding, Stroke, Vec2,
    pos2, vec2,
};

use crate::config::{self, Config};
use crate::contact::{self, MailHandoff};
use crate::cursor::{self, CursorFollower};
use crate::glitch::TitleFont;
use crate::i18n::{Language, SOCIAL_LINKS, STATUS_BADGE, WHATSAPP_URL};
use crate::page::Page;
use crate::particles::{Link, ParticleField};
use crate::theme::{Palette, alpha_to_u8};

const RTL_FONT_NAME: &str = "rtl-fallback";

const PAGE_MARGIN: f32 = 48.0;
const GRID_SPACING: f32 = 40.0;
const GLOW_RADIUS: f32 = 368.0;
const GLOW_RINGS: usize = 16;

const PURPLE: [u8; 3] = [168, 85, 247];
const AMBER: [u8; 3] = [234, 179, 8];
const WHATSAPP_GREEN: Color32 = Color32::from_rgb(37, 211, 102);

/// Opens URLs through egui's platform output, which eframe forwards to the
/// OS handler.
struct OpenUrlHandoff<'a>(&'a egui::Context);

impl MailHandoff for OpenUrlHandoff<'_> {
    fn hand_off(&mut self, uri: &str) {
        open_url(self.0, uri);
    }
}

fn open_url(ctx: &egui::Context, url: &str) {
    ctx.output_mut(|o| o.open_url = Some(egui::output::OpenUrl::same_tab(url)));
}

pub struct LandingApp {
    config: Config,
    /// Created on the first frame, once the window size is known.
    page: Option<Page>,
    cursor: CursorFollower,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        install_fonts(&cc.egui_ctx, config.rtl_font.as_deref());
        cc.egui_ctx.set_visuals(config.theme.visuals());
        Self {
            config,
            page: None,
            cursor: CursorFollower::default(),
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (now, screen, pointer) =
            ctx.input(|i| (i.time, i.screen_rect(), i.pointer.hover_pos()));
        let viewport = [screen.width(), screen.height()];

        let config = &self.config;
        let page = self
            .page
            .get_or_insert_with(|| Page::new(config, viewport, now));
        page.resize(viewport);

        if let Some(pos) = pointer {
            let pos = cgmath::vec2(pos.x, pos.y);
            page.field_mut().set_pointer(pos);
            self.cursor.on_pointer_move(pos, now);
        }

        page.step_field();
        paint_background(ctx, page, screen);

        let theme = page.theme();
        header(ctx, page, now);
        if page.theme() != theme {
            ctx.set_visuals(page.theme().visuals());
        }
        footer(ctx, page);
        body(ctx, page, now);
        contact_modal(ctx, page);
        paint_cursor(ctx, &self.cursor, page.theme().palette(), screen.width(), now);

        ctx.request_repaint();
    }
}

fn install_fonts(ctx: &egui::Context, rtl_font: Option<&Path>) {
    let Some(path) = rtl_font else {
        return;
    };

    match config::read_font(path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert(RTL_FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(RTL_FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
            log::info!("loaded fallback font {}", path.display());
        }
        Err(err) => log::warn!("{err}; Farsi and Pashto text will show missing glyphs"),
    }
}

fn to_pos(v: cgmath::Vector2<f32>) -> egui::Pos2 {
    pos2(v.x, v.y)
}

fn with_alpha([r, g, b]: [u8; 3], alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, alpha_to_u8(alpha))
}

/// Slow 0.4..1.0 opacity oscillation for pulsing elements.
fn pulse(now: f64) -> f32 {
    0.7 + 0.3 * (now * std::f64::consts::PI).cos() as f32
}

fn row_layout(rtl: bool) -> Layout {
    if rtl {
        Layout::right_to_left(Align::Center)
    } else {
        Layout::left_to_right(Align::Center)
    }
}

/// A horizontal strip of fixed height that runs in the reading direction.
fn row<R>(ui: &mut egui::Ui, rtl: bool, height: f32, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.allocate_ui_with_layout(vec2(ui.available_width(), height), row_layout(rtl), add)
        .inner
}

fn paint_background(ctx: &egui::Context, page: &Page, screen: egui::Rect) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let palette = page.theme().palette();

    painter.rect_filled(screen, Rounding::none(), palette.background);

    let glows = [
        (
            pos2(screen.max.x - 160.0, screen.min.y + screen.height() * 0.25 + 240.0),
            palette.line_rgb,
            0.2,
        ),
        (
            pos2(screen.min.x + 160.0, screen.min.y + screen.height() * 0.75 - 240.0),
            PURPLE,
            0.1,
        ),
    ];
    for (center, rgb, peak) in glows {
        for ring in 0..GLOW_RINGS {
            let radius = GLOW_RADIUS * (1.0 - ring as f32 / GLOW_RINGS as f32);
            painter.circle_filled(center, radius, with_alpha(rgb, peak / GLOW_RINGS as f32));
        }
    }

    let grid = Stroke::new(1.0, palette.grid);
    let mut x = screen.min.x;
    while x <= screen.max.x {
        painter.line_segment([pos2(x, screen.min.y), pos2(x, screen.max.y)], grid);
        x += GRID_SPACING;
    }
    let mut y = screen.min.y;
    while y <= screen.max.y {
        painter.line_segment([pos2(screen.min.x, y), pos2(screen.max.x, y)], grid);
        y += GRID_SPACING;
    }

    if page.has_surface() {
        paint_field(&painter, page.field(), palette);
    }
}

fn paint_field(painter: &egui::Painter, field: &ParticleField, palette: &Palette) {
    let paint_link = |link: &Link| {
        painter.line_segment(
            [to_pos(link.from), to_pos(link.to)],
            Stroke::new(link.width, palette.line(link.alpha)),
        );
    };

    field.links().iter().for_each(paint_link);
    field.pointer_links().iter().for_each(paint_link);

    for particle in &field.particles {
        painter.circle_filled(to_pos(particle.position), particle.radius, palette.particle);
    }
}

fn header(ctx: &egui::Context, page: &mut Page, now: f64) {
    let rtl = page.language().is_rtl();
    egui::TopBottomPanel::top("header")
        .frame(egui::Frame::none().inner_margin(egui::style::Margin::symmetric(PAGE_MARGIN, 24.0)))
        .show(ctx, |ui| {
            row(ui, rtl, 48.0, |ui| {
                logo(ui, page.theme().palette());
                ui.label(
                    RichText::new(page.text().company_name)
                        .monospace()
                        .strong()
                        .size(18.0),
                );
                row(ui, !rtl, 48.0, |ui| {
                    if ui
                        .button(RichText::new(page.theme().toggle_icon()).size(18.0))
                        .on_hover_text("Toggle Theme")
                        .clicked()
                    {
                        page.toggle_theme();
                    }
                    language_selector(ui, page, now);
                });
            });
        });
}

fn logo(ui: &mut egui::Ui, palette: &Palette) {
    let (rect, _) = ui.allocate_exact_size(vec2(48.0, 48.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect.shrink(6.0), Rounding::same(8.0), palette.accent);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Z",
        FontId::monospace(22.0),
        palette.background,
    );
}

fn language_selector(ui: &mut egui::Ui, page: &mut Page, now: f64) {
    let mut selected = page.language();
    egui::ComboBox::from_id_source("language")
        .width(72.0)
        .selected_text(RichText::new(format!("🌐 {}", selected.label())).monospace().strong())
        .show_ui(ui, |ui| {
            for language in Language::ALL {
                ui.selectable_value(&mut selected, language, language.label());
            }
        });
    page.set_language(selected, now);
}

fn body(ctx: &egui::Context, page: &mut Page, now: f64) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().inner_margin(egui::style::Margin::symmetric(PAGE_MARGIN, 0.0)))
        .show(ctx, |ui| {
            if page.is_loading(now) {
                loading_view(ui, page, now);
            } else {
                content_view(ui, page, now);
            }
        });
}

fn loading_view(ui: &mut egui::Ui, page: &Page, now: f64) {
    let accent = page.theme().palette().line_rgb;
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 60.0).max(0.0));
        ui.label(
            RichText::new(">_")
                .monospace()
                .size(40.0)
                .color(with_alpha(accent, pulse(now))),
        );
        ui.add_space(12.0);
        ui.label(
            RichText::new(page.text().building)
                .monospace()
                .color(Color32::GRAY.linear_multiply(pulse(now))),
        );
        ui.add_space(12.0);
        ui.add(egui::ProgressBar::new(page.loading_progress(now)).desired_width(192.0));
    });
}

fn content_view(ui: &mut egui::Ui, page: &mut Page, now: f64) {
    let rtl = page.language().is_rtl();
    let text = page.text();
    let accent = page.theme().palette().accent;
    let align = if rtl { Align::Max } else { Align::Min };

    ui.with_layout(Layout::top_down(align), |ui| {
        ui.add_space((ui.available_height() / 2.0 - 200.0).max(0.0));
        status_badge(ui, now);
        ui.add_space(32.0);

        glitch_title(ui, page, now);
        ui.add_space(16.0);

        row(ui, rtl, 32.0, |ui| {
            ui.label(RichText::new(text.subtitle).size(22.0).weak());
            ui.label(RichText::new(page.host()).monospace().size(22.0).color(accent));
            ui.label(RichText::new(".").size(22.0).weak());
        });
        ui.add_space(48.0);

        row(ui, rtl, 56.0, |ui| {
            ui.spacing_mut().item_spacing.x = 24.0;
            let background = page.theme().palette().background;
            let foreground = ui.visuals().strong_text_color();

            let contact = egui::Button::new(
                RichText::new(format!("{}  ✉", text.contact))
                    .strong()
                    .color(background),
            )
            .fill(foreground)
            .min_size(vec2(0.0, 52.0));
            if ui.add(contact).clicked() {
                open_url(ui.ctx(), &contact::plain_mailto());
            }

            let build = egui::Button::new(RichText::new(format!("{}  🔨", text.cta)).strong())
                .stroke(Stroke::new(1.5, accent))
                .min_size(vec2(0.0, 52.0));
            if ui.add(build).clicked() {
                page.open_contact();
            }

            let whatsapp = egui::Button::new(
                RichText::new(format!("{}  📞", text.whatsapp))
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(WHATSAPP_GREEN)
            .min_size(vec2(0.0, 52.0));
            if ui.add(whatsapp).clicked() {
                open_url(ui.ctx(), WHATSAPP_URL);
            }
        });
    });
}

fn status_badge(ui: &mut egui::Ui, now: f64) {
    egui::Frame::none()
        .fill(with_alpha(AMBER, 0.1))
        .stroke(Stroke::new(1.0, with_alpha(AMBER, 0.3)))
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::style::Margin::symmetric(12.0, 4.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(vec2(8.0, 8.0), egui::Sense::hover());
                // Expanding ring behind a solid dot.
                let ping = (now % 1.0) as f32;
                ui.painter().circle_filled(
                    rect.center(),
                    4.0 + 4.0 * ping,
                    with_alpha(AMBER, 0.75 * (1.0 - ping)),
                );
                ui.painter()
                    .circle_filled(rect.center(), 4.0, with_alpha(AMBER, 1.0));
                ui.label(
                    RichText::new(STATUS_BADGE)
                        .monospace()
                        .small()
                        .color(with_alpha(AMBER, 1.0)),
                );
            });
        });
}

fn title_text(text: &str, font: TitleFont, color: Color32) -> RichText {
    let rich = RichText::new(text).size(72.0).color(color);
    match font {
        TitleFont::Sans => rich.strong(),
        TitleFont::Mono => rich.family(FontFamily::Monospace).strong(),
        TitleFont::Serif => rich.italics(),
        TitleFont::Impact => rich.strong().size(78.0),
        TitleFont::Courier => rich.family(FontFamily::Monospace).italics(),
        TitleFont::Tahoma => rich.size(68.0),
        TitleFont::Arial => rich.strong().italics(),
    }
}

fn glitch_title(ui: &mut egui::Ui, page: &mut Page, now: f64) {
    let color = ui.visuals().strong_text_color();
    let title = page.title();
    let label = egui::Label::new(title_text(title.text(), title.font(now), color))
        .sense(egui::Sense::hover());
    let hovered = ui.add(label).hovered();
    page.title_mut().set_hovered(hovered, now);
}

fn footer(ctx: &egui::Context, page: &Page) {
    let rtl = page.language().is_rtl();
    egui::TopBottomPanel::bottom("footer")
        .frame(egui::Frame::none().inner_margin(egui::style::Margin::symmetric(PAGE_MARGIN, 24.0)))
        .show(ctx, |ui| {
            row(ui, rtl, 24.0, |ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                for link in SOCIAL_LINKS {
                    let label = RichText::new(link.name.to_uppercase()).monospace();
                    if ui.link(label).on_hover_text(link.url).clicked() {
                        open_url(ui.ctx(), link.url);
                    }
                }
                row(ui, !rtl, 24.0, |ui| {
                    ui.label(
                        RichText::new(page.text().rights)
                            .monospace()
                            .small()
                            .color(Color32::GRAY),
                    );
                });
            });
        });
}

fn contact_modal(ctx: &egui::Context, page: &mut Page) {
    if !page.contact.is_open() {
        return;
    }

    let screen = ctx.screen_rect();
    let backdrop_clicked = egui::Area::new("contact_backdrop")
        .order(egui::Order::PanelResizeLine)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, Rounding::none(), Color32::from_black_alpha(153));
            response.clicked()
        })
        .inner;

    let text = &page.text().modal;
    let rtl = page.language().is_rtl();
    let mut open = true;
    let mut cancel = false;
    let mut send = false;

    egui::Window::new(RichText::new(text.title).monospace().strong())
        .id(egui::Id::new("contact_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(420.0)
        .show(ctx, |ui| {
            let align = if rtl { Align::Max } else { Align::Min };
            ui.with_layout(Layout::top_down_justified(align), |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut page.contact.name)
                        .hint_text(text.name_placeholder)
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut page.contact.message)
                        .hint_text(text.message_placeholder)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                let can_submit = page.contact.can_submit();
                row(ui, rtl, 40.0, |ui| {
                    cancel = ui.button(text.cancel).clicked();
                    send = ui
                        .add_enabled(
                            can_submit,
                            egui::Button::new(RichText::new(format!("{}  ➤", text.send)).strong()),
                        )
                        .clicked();
                });
            });
        });

    if send {
        page.submit_contact(&mut OpenUrlHandoff(ctx));
    } else if cancel || backdrop_clicked || !open {
        page.contact.close();
    }
}

fn paint_cursor(
    ctx: &egui::Context,
    follower: &CursorFollower,
    palette: &Palette,
    viewport_width: f32,
    now: f64,
) {
    if !cursor::is_enabled(viewport_width) {
        return;
    }
    ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::None);

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("cursor_follower"),
    ));
    if let Some(outline) = follower.outline(now) {
        painter.circle_stroke(
            to_pos(outline),
            20.0,
            Stroke::new(2.0, with_alpha(palette.line_rgb, 0.5)),
        );
    }
    if let Some(dot) = follower.dot() {
        painter.circle_filled(to_pos(dot), 4.0, palette.accent);
    }
}
