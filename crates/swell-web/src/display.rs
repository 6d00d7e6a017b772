use crate::constants::*;
use crate::dom::{html_element_by_id, set_style, set_text_by_id};
use swell_core::{DisplayCache, DisplaySink, DisplayState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes gauge snapshots into the page. Missing widgets are skipped one by
/// one; a snapshot is re-applied only when it or the needle track width changed.
pub struct DomDisplay {
    document: web::Document,
    cache: DisplayCache,
}

impl DomDisplay {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            cache: DisplayCache::default(),
        }
    }

    /// Width of the glow's parent, the track the needle slides along.
    fn track_width(&self) -> f32 {
        html_element_by_id(&self.document, GLOW_ID)
            .and_then(|glow| glow.parent_element())
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
            .map(|p| p.offset_width() as f32)
            .unwrap_or(0.0)
    }

    fn apply_harpoon(&self, state: &DisplayState, track_width: f32) {
        let doc = &self.document;
        let (Some(needle), Some(glow)) = (
            html_element_by_id(doc, NEEDLE_ID),
            html_element_by_id(doc, GLOW_ID),
        ) else {
            return;
        };
        set_style(
            &needle,
            "left",
            &format!("{}px", state.needle_offset_px(track_width)),
        );
        set_style(&glow, "width", &state.fill_width());
        set_style(&needle, "animation", state.level.needle_animation());

        if let Some(level) = html_element_by_id(doc, LEVEL_ID) {
            level.set_text_content(Some(state.level.label()));
            set_style(&level, "color", state.level.color());
        }
    }

    fn apply_lighthouse(&self, state: &DisplayState) {
        let doc = &self.document;
        if let Some(fill) = html_element_by_id(doc, POWER_FILL_ID) {
            set_style(&fill, "width", &state.fill_width());
        }
        set_text_by_id(doc, POWER_NUMERIC_ID, &state.power_text());
        if let Some(core) = html_element_by_id(doc, LIGHT_CORE_ID) {
            set_style(&core, "transform", &state.core_transform());
            set_style(&core, "filter", &state.core_filter());
        }
        if let Some(beam) = html_element_by_id(doc, LIGHT_BEAM_ID) {
            set_style(&beam, "opacity", &state.beam_opacity_text());
        }
        set_text_by_id(doc, INTENSITY_LABEL_ID, state.intensity.label());
    }
}

impl DisplaySink for DomDisplay {
    fn apply(&mut self, state: &DisplayState) {
        let track_width = self.track_width();
        if !self.cache.update(state, track_width) {
            return;
        }
        set_text_by_id(&self.document, ENERGY_VALUE_ID, &state.energy_text());
        self.apply_harpoon(state, track_width);
        self.apply_lighthouse(state);
    }
}
