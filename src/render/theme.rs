use crate::{deck::model::CaptionTone, foundation::core::Rgba8};

/// Visual style for slides. All lengths are world units.
///
/// Every field has a default matching the stock palette, so a deck file only
/// lists the fields it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub node_fill: Rgba8,
    pub node_stroke: Rgba8,
    pub node_stroke_width: f64,
    pub node_corner_radius: f64,
    pub label_color: Rgba8,
    /// Outline drawn behind node label glyphs.
    pub label_outline: Rgba8,
    pub label_size: f64,
    pub font_family: String,
    pub edge_color: Rgba8,
    pub edge_width: f64,
    /// Draw a pulsing halo behind each node.
    pub glow: bool,
    pub glow_color: Rgba8,
    pub glow_radius: f64,
    /// Halo opacity at the trough of the pulse.
    pub glow_opacity: f64,
    /// Extra halo opacity at the crest of the pulse.
    pub glow_amplitude: f64,
    pub header_color: Rgba8,
    pub header_size: f64,
    pub text_color: Rgba8,
    pub text_size: f64,
    pub caption_size: f64,
    pub caption_neutral: Rgba8,
    pub caption_start: Rgba8,
    pub caption_intermediate: Rgba8,
    pub caption_final: Rgba8,
    /// Vertical gradient stops, top to bottom. Empty means no background.
    pub background: Vec<Rgba8>,
}

impl Default for Theme {
    fn default() -> Self {
        let blue = Rgba8::rgb(0x00, 0x09, 0xff);
        Self {
            node_fill: blue,
            node_stroke: blue,
            node_stroke_width: 0.03,
            node_corner_radius: 0.15,
            label_color: Rgba8::WHITE,
            label_outline: blue,
            label_size: 0.34,
            font_family: "Orbitron".to_string(),
            edge_color: Rgba8::rgb(0xbb, 0xbb, 0xbb),
            edge_width: 0.03,
            glow: false,
            glow_color: blue,
            glow_radius: 0.5,
            glow_opacity: 0.3,
            glow_amplitude: 0.4,
            header_color: Rgba8::WHITE,
            header_size: 0.45,
            text_color: Rgba8::WHITE,
            text_size: 0.3,
            caption_size: 0.3,
            caption_neutral: Rgba8::WHITE,
            caption_start: Rgba8::rgb(0xff, 0x00, 0x1d),
            caption_intermediate: Rgba8::rgb(0xfe, 0xfe, 0x00),
            caption_final: Rgba8::rgb(0x00, 0xfe, 0x2d),
            background: vec![
                Rgba8::rgb(0x00, 0x00, 0x2b),
                Rgba8::rgb(0x13, 0x00, 0x3d),
                Rgba8::rgb(0x21, 0x00, 0x51),
            ],
        }
    }
}

impl Theme {
    pub fn caption_color(&self, tone: CaptionTone) -> Rgba8 {
        match tone {
            CaptionTone::Neutral => self.caption_neutral,
            CaptionTone::Start => self.caption_start,
            CaptionTone::Intermediate => self.caption_intermediate,
            CaptionTone::Final => self.caption_final,
        }
    }

    /// Halo opacity at `time_s` seconds into the presentation.
    pub fn glow_opacity_at(&self, time_s: f64) -> f64 {
        let phase = ((1.5 * time_s).sin() + 1.0) / 2.0;
        (self.glow_opacity + self.glow_amplitude * phase).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/theme.rs"]
mod tests;
