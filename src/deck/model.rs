use serde::Deserialize as _;

use crate::{
    animation::{ease::Ease, morph::Morph},
    foundation::core::Point,
    foundation::error::{SplayError, SplayResult},
    layout::engine::{LayoutParams, TreeLayout, layout},
    render::theme::Theme,
    tree::{flat::FlatTree, model::Node},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A slide deck: ordered slides plus the layout and style shared by all of them.
///
/// Decks are plain data, loaded from and saved to JSON. Every tree is
/// supplied fully built; the deck never derives one tree from another.
pub struct Deck {
    /// Title slide heading.
    pub title: String,
    /// Title slide byline.
    #[serde(default)]
    pub subtitle: String,
    /// Layout parameters applied to every step.
    #[serde(default)]
    pub layout: LayoutParams,
    /// Visual style.
    #[serde(default)]
    pub theme: Theme,
    /// Easing used for transitions between consecutive steps.
    #[serde(default)]
    pub ease: Ease,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One slide: a header, optional bullet text, and optional tree steps.
pub struct Slide {
    /// Heading shown at the top edge.
    pub header: String,
    /// Bullet lines, shown when the slide has no steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    /// Tree snapshots shown one after another.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One tree snapshot with its caption.
pub struct Step {
    /// Caption drawn under the tree.
    pub caption: String,
    /// Caption color role.
    #[serde(default)]
    pub tone: CaptionTone,
    /// Tree to show. Accepts the nested form or a flat `{root, nodes}` table.
    #[serde(
        serialize_with = "serialize_tree",
        deserialize_with = "deserialize_tree"
    )]
    pub tree: Node,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Color role of a step caption.
pub enum CaptionTone {
    /// Plain text color.
    #[default]
    Neutral,
    /// The tree before an operation.
    Start,
    /// A state between rotations.
    Intermediate,
    /// The final tree.
    Final,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Geometry for every step of one slide.
pub struct SlideLayout {
    pub header: String,
    pub steps: Vec<StepLayout>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct StepLayout {
    pub caption: String,
    pub tone: CaptionTone,
    pub layout: TreeLayout,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TreeSource {
    Nested(Node),
    Flat(FlatTree),
}

/// Trees deeper than this are written as a flat table. serde_json stops
/// reading nested input at 128 levels, and the deck wrapper uses a few.
const MAX_NESTED_DEPTH: u32 = 100;

fn serialize_tree<S>(tree: &Node, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if tree.depth() < MAX_NESTED_DEPTH {
        serde::Serialize::serialize(tree, serializer)
    } else {
        serde::Serialize::serialize(&FlatTree::from(tree), serializer)
    }
}

fn deserialize_tree<'de, D>(deserializer: D) -> Result<Node, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match TreeSource::deserialize(deserializer)? {
        TreeSource::Nested(node) => Ok(node),
        TreeSource::Flat(flat) => flat.into_tree().map_err(serde::de::Error::custom),
    }
}

impl Deck {
    pub fn from_json_str(s: &str) -> SplayResult<Self> {
        let deck: Self = serde_json::from_str(s)?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn to_json_pretty(&self) -> SplayResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SplayResult<()> {
        if self.title.trim().is_empty() {
            return Err(SplayError::validation("deck title must be non-empty"));
        }
        self.layout.validate()?;
        for (idx, slide) in self.slides.iter().enumerate() {
            if slide.header.trim().is_empty() {
                return Err(SplayError::validation(format!(
                    "slide {idx} header must be non-empty"
                )));
            }
            if slide.bullets.is_empty() && slide.steps.is_empty() {
                return Err(SplayError::validation(format!(
                    "slide {idx} ('{}') needs bullets or steps",
                    slide.header
                )));
            }
        }
        Ok(())
    }

    pub fn slide(&self, slide: usize) -> SplayResult<&Slide> {
        self.slides.get(slide).ok_or_else(|| {
            SplayError::validation(format!(
                "slide {slide} is out of range (deck has {})",
                self.slides.len()
            ))
        })
    }

    pub fn step(&self, slide: usize, step: usize) -> SplayResult<&Step> {
        let s = self.slide(slide)?;
        s.steps.get(step).ok_or_else(|| {
            SplayError::validation(format!(
                "step {step} is out of range (slide {slide} has {})",
                s.steps.len()
            ))
        })
    }

    /// Lay out one step, centered on the origin.
    pub fn layout_step(&self, slide: usize, step: usize) -> SplayResult<TreeLayout> {
        let step = self.step(slide, step)?;
        self.layout.validate()?;
        Ok(layout(&step.tree, &self.layout).centered_at(Point::ORIGIN))
    }

    /// Transition from `step` to the step after it on the same slide.
    pub fn morph_step(&self, slide: usize, step: usize) -> SplayResult<Morph> {
        let from = self.layout_step(slide, step)?;
        let to = self.layout_step(slide, step + 1)?;
        Ok(Morph::between(&from, &to))
    }

    /// Lay out every step of every slide. Bullet-only slides yield no steps.
    #[tracing::instrument(level = "debug", skip(self), fields(slides = self.slides.len()))]
    pub fn layout_slides(&self) -> SplayResult<Vec<SlideLayout>> {
        self.validate()?;
        let out = self
            .slides
            .iter()
            .map(|slide| SlideLayout {
                header: slide.header.clone(),
                steps: slide
                    .steps
                    .iter()
                    .map(|s| StepLayout {
                        caption: s.caption.clone(),
                        tone: s.tone,
                        layout: layout(&s.tree, &self.layout).centered_at(Point::ORIGIN),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(
            steps = out.iter().map(|s| s.steps.len()).sum::<usize>(),
            "deck laid out"
        );
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
