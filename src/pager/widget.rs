//! egui rendering for [`Pager`].
//!
//! Layout, top to bottom:
//! - a button group: «, one link per page, »
//! - the page-size selector and the result counter on one row
//!
//! Clicks are collected while drawing and dispatched once the frame's UI
//! closures have returned, so at most one transition runs per frame.

use egui::{Button, RichText, Stroke};

use super::controller::Pager;
use super::transition::{PageChange, PageTransition};
use crate::theme::WidgetPalette;

/// What one frame of [`Pager::show_with_palette`] drew and emitted.
#[derive(Debug, Clone)]
pub struct PagerResponse {
    /// Change dispatched this frame, if any
    pub change: Option<PageChange>,
    /// The « link
    pub previous: egui::Response,
    /// One link per page, in order
    pub pages: Vec<(u64, egui::Response)>,
    /// The » link
    pub next: egui::Response,
    /// Page-size combo box, when the selector is enabled
    pub take_selector: Option<egui::Response>,
    /// Result counter, when extra info is displayed
    pub counter: Option<egui::Response>,
}

impl PagerResponse {
    /// Link of page `page`, if it was drawn.
    pub fn page(&self, page: u64) -> Option<&egui::Response> {
        self.pages
            .iter()
            .find(|(number, _)| *number == page)
            .map(|(_, response)| response)
    }
}

impl Pager {
    /// Draws the pager with a palette matching the current visuals.
    ///
    /// Returns the change emitted this frame, if any. The page-change
    /// callback has already been called when this returns `Some`.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PageChange> {
        let palette = WidgetPalette::for_visuals(ui.visuals());
        self.show_with_palette(ui, &palette).change
    }

    pub fn show_with_palette(&mut self, ui: &mut egui::Ui, palette: &WidgetPalette) -> PagerResponse {
        let state = self.state();
        let total = self.total();
        let max_page = self.max_page();
        let config = self.config();
        let mut requested: Option<PageTransition> = None;

        let (previous, pages, next) = ui
            .horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                apply_link_visuals(ui.visuals_mut(), palette);

                let has_previous = !state.is_first_page();
                let previous = ui
                    .add_enabled(has_previous, link(palette, "«", LinkKind::for_nav(has_previous)))
                    .on_hover_text("Previous");
                if previous.clicked() {
                    requested = Some(PageTransition::Previous);
                }

                let mut pages = Vec::new();
                for page in 1..=max_page {
                    let active = page == state.page();
                    let kind = if active { LinkKind::Active } else { LinkKind::Normal };
                    let response = ui.add_enabled(!active, link(palette, page.to_string(), kind));
                    if response.clicked() {
                        requested = Some(PageTransition::JumpTo(page));
                    }
                    pages.push((page, response));
                }

                let has_next = !state.is_last_page(total);
                let next = ui
                    .add_enabled(has_next, link(palette, "»", LinkKind::for_nav(has_next)))
                    .on_hover_text("Next");
                if next.clicked() {
                    requested = Some(PageTransition::Next);
                }
                (previous, pages, next)
            })
            .inner;

        let mut take_selector = None;
        let mut counter_response = None;
        if config.is_take_change_enable || config.is_extra_info_display {
            ui.horizontal(|ui| {
                if config.is_take_change_enable {
                    ui.label(&config.nb_by_page_message);
                    let mut selected = state.take();
                    let combo = egui::ComboBox::from_id_salt(ui.id().with("pager_take"))
                        .selected_text(config.take_label(selected))
                        .show_ui(ui, |ui| {
                            for option in &config.takes {
                                ui.selectable_value(&mut selected, option.id(), option.label());
                            }
                        });
                    take_selector = Some(combo.response);
                    if selected != state.take() {
                        if let Some(option) = config.takes.iter().find(|o| o.id() == selected) {
                            requested = Some(PageTransition::ChangeTake(option.clone()));
                        }
                    }
                }

                if config.is_extra_info_display {
                    let text = config.summary_text(state.result_range(total));
                    let inner = ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        counter(ui, palette, text)
                    });
                    counter_response = Some(inner.inner);
                }
            });
        }

        PagerResponse {
            change: requested.and_then(|transition| self.dispatch(transition)),
            previous,
            pages,
            next,
            take_selector,
            counter: counter_response,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Normal,
    Active,
    Disabled,
}

impl LinkKind {
    fn for_nav(enabled: bool) -> Self {
        if enabled {
            LinkKind::Normal
        } else {
            LinkKind::Disabled
        }
    }
}

/// Link backgrounds come from the widget visuals so the hover fill follows
/// the pointer; only the active page overrides its fill.
fn apply_link_visuals(visuals: &mut egui::Visuals, palette: &WidgetPalette) {
    let widgets = &mut visuals.widgets;
    widgets.noninteractive.weak_bg_fill = palette.link_background;
    widgets.inactive.weak_bg_fill = palette.link_background;
    widgets.hovered.weak_bg_fill = palette.hover_background;
    widgets.active.weak_bg_fill = palette.hover_background;
}

fn link(palette: &WidgetPalette, text: impl Into<String>, kind: LinkKind) -> Button<'static> {
    let text = RichText::new(text.into());
    match kind {
        LinkKind::Normal => Button::new(text.color(palette.link_text))
            .stroke(Stroke::new(1.0, palette.link_border)),
        LinkKind::Disabled => Button::new(text.color(palette.disabled_text))
            .stroke(Stroke::new(1.0, palette.link_border)),
        LinkKind::Active => Button::new(text.color(palette.active_text))
            .fill(palette.active_background)
            .stroke(Stroke::new(1.0, palette.active_background)),
    }
}

fn counter(ui: &mut egui::Ui, palette: &WidgetPalette, text: String) -> egui::Response {
    egui::Frame::new()
        .fill(palette.counter_background)
        .stroke(Stroke::new(1.0, palette.link_border))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(palette.counter_text));
        })
        .response
}
