use super::*;
use crate::tree::model::Label;

fn tree_slides(deck: &Deck) -> impl Iterator<Item = &Slide> {
    deck.slides.iter().filter(|s| !s.steps.is_empty())
}

#[test]
fn builtin_deck_validates_and_lays_out() {
    let deck = splay_rotations();
    deck.validate().unwrap();
    let laid = deck.layout_slides().unwrap();
    assert_eq!(laid.len(), deck.slides.len());
    assert_eq!(tree_slides(&deck).count(), 9);
}

#[test]
fn rotation_steps_keep_the_same_keys() {
    let deck = splay_rotations();
    for slide in tree_slides(&deck) {
        if slide.header.contains("Insert") || slide.header.contains("Delete") {
            continue;
        }
        let mut first: Vec<Label> = slide.steps[0]
            .tree
            .labels_preorder()
            .into_iter()
            .cloned()
            .collect();
        first.sort();
        for s in &slide.steps[1..] {
            let mut keys: Vec<Label> = s.tree.labels_preorder().into_iter().cloned().collect();
            keys.sort();
            assert_eq!(keys, first, "{}: {}", slide.header, s.caption);
        }
    }
}

#[test]
fn captions_progress_from_start_to_result() {
    let deck = splay_rotations();
    for slide in tree_slides(&deck) {
        let last = slide.steps.last().unwrap();
        assert_eq!(last.tone, CaptionTone::Final, "{}", slide.header);
    }
}

#[test]
fn zig_zig_result_is_a_right_spine() {
    let deck = splay_rotations();
    let slide = deck
        .slides
        .iter()
        .find(|s| s.header.starts_with("Zig-Zig"))
        .unwrap();
    let after = &slide.steps[1].tree;
    assert_eq!(after.label(), &Label::Int(3));
    assert!(after.left().is_none());
    assert_eq!(after.depth(), 3);
}

#[test]
fn bullet_slides_keep_every_line() {
    let deck = splay_rotations();
    let counts: Vec<(&str, usize)> = deck
        .slides
        .iter()
        .filter(|s| s.steps.is_empty())
        .map(|s| (s.header.as_str(), s.bullets.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Introduction", 5),
            ("Problem Statement and Motivation", 4),
            ("Technical Background", 4),
            ("Solution", 5),
            ("Variants and Optimizations", 4),
            ("Extensions to Other Data Structures", 3),
            ("Amortized Complexity", 4),
            ("Conclusion", 5),
            ("Thank You", 1),
        ]
    );
}

#[test]
fn title_slide_carries_the_byline() {
    let deck = splay_rotations();
    assert_eq!(deck.title, "Analysis of Splay Trees");
    assert!(deck.subtitle.starts_with("By: Dhruv Patel"));
    assert_eq!(deck.slides.len(), 18);
}
