//! The stock splay-tree walkthrough deck.

use crate::{
    animation::ease::Ease,
    deck::model::{CaptionTone, Deck, Slide, Step},
    layout::engine::LayoutParams,
    render::theme::Theme,
    tree::model::Node,
};

fn n(label: i32) -> Node {
    Node::leaf(label)
}

fn step(caption: &str, tone: CaptionTone, tree: Node) -> Step {
    Step {
        caption: caption.to_string(),
        tone,
        tree,
    }
}

fn bullets(header: &str, lines: &[&str]) -> Slide {
    Slide {
        header: header.to_string(),
        bullets: lines.iter().map(|s| (*s).to_string()).collect(),
        steps: Vec::new(),
    }
}

fn steps(header: &str, steps: Vec<Step>) -> Slide {
    Slide {
        header: header.to_string(),
        bullets: Vec::new(),
        steps,
    }
}

/// 6 with left 4 (children 3, 5) and right 7.
fn left_heavy() -> Node {
    n(6).with_left(n(4).with_left(n(3)).with_right(n(5)))
        .with_right(n(7))
}

/// 4 with left 3 and right 6 (children 5, 7).
fn right_heavy() -> Node {
    n(4).with_left(n(3))
        .with_right(n(6).with_left(n(5)).with_right(n(7)))
}

/// 1 with left 2 and right 4 (children 3, 8); the start of the method slides.
fn method_start() -> Node {
    n(1).with_left(n(2))
        .with_right(n(4).with_left(n(3)).with_right(n(8)))
}

/// Deck covering the six splay rotations and the search, insert and delete
/// walkthroughs. Every tree is written out in full.
pub fn splay_rotations() -> Deck {
    use CaptionTone::{Final, Intermediate, Neutral, Start};

    let slides = vec![
        bullets(
            "Introduction",
            &[
                "BSTs support insertion, deletion, and lookup efficiently.",
                "Traditional BSTs like AVL/red-black enforce balance → complexity.",
                "Sleator and Tarjan introduced splay trees: self-adjusting via access.",
                "Splaying moves accessed node to root, improving locality.",
                "No need for metadata; simple implementation with good performance.",
            ],
        ),
        bullets(
            "Problem Statement and Motivation",
            &[
                "Goal: Efficient BSTs for sequences, not just individual ops.",
                "Balanced trees are complex, static optimal trees lack adaptability.",
                "Finger and biased trees use metadata or assumptions.",
                "Need: Simpler, adaptive structure without metadata.",
            ],
        ),
        bullets(
            "Technical Background",
            &[
                "Splaying: Rotations (Zig, Zag, Zig-Zig, Zag-Zag, Zig-Zag, Zag-Zig).",
                "No extra metadata (e.g., height).",
                "Amortized analysis via potential function.",
                "Key theorems: Balance, Static Optimality, Working Set, Static Finger.",
            ],
        ),
        steps(
            "Splaying Rotations: Zig, Zag, Zig-Zig, Zag-Zag, Zig-Zag, Zag-Zig",
            vec![
                step("Pre-Zig(4) (Single Right Rotation)", Start, left_heavy()),
                step(
                    "Post-Zig(4) (Single Right Rotation)",
                    Final,
                    right_heavy(),
                ),
            ],
        ),
        steps(
            "Zag (Single Left Rotation)",
            vec![
                step("Pre-Zag(6) (Single Left Rotation)", Start, right_heavy()),
                step("Post-Zag(6) (Single Left Rotation)", Final, left_heavy()),
            ],
        ),
        steps(
            "Zig-Zig (Double Right Rotation)",
            vec![
                step("Pre-Zig-Zig(3) (Double Right Rotation)", Start, left_heavy()),
                step(
                    "Post-Zig-Zig(3) (Double Right Rotation)",
                    Final,
                    n(3).with_right(
                        n(4).with_right(n(6).with_left(n(5)).with_right(n(7))),
                    ),
                ),
            ],
        ),
        steps(
            "Zag-Zag (Double Left Rotation)",
            vec![
                step("Pre-Zag-Zag(7) (Double Left Rotation)", Start, right_heavy()),
                step(
                    "Post-Zag-Zag(7) (Double Left Rotation)",
                    Final,
                    n(7).with_left(n(6).with_left(n(4).with_left(n(3)).with_right(n(5)))),
                ),
            ],
        ),
        steps(
            "Zig-Zag Rotation",
            vec![
                step("0. Original Splay Tree, Zig-Zag(5)", Start, right_heavy()),
                step(
                    "1. Zig Rotation(6)",
                    Intermediate,
                    n(4).with_left(n(3))
                        .with_right(n(5).with_right(n(6).with_right(n(7)))),
                ),
                step(
                    "2. Zag Rotation(4)",
                    Final,
                    n(5).with_left(n(4).with_left(n(3)))
                        .with_right(n(6).with_right(n(7))),
                ),
            ],
        ),
        steps(
            "Zag-Zig Rotation",
            vec![
                step("0. Original Splay Tree, Zag-Zig(5)", Start, left_heavy()),
                step(
                    "1. Zag Rotation(3)",
                    Intermediate,
                    n(6).with_left(n(5).with_left(n(4).with_left(n(3))))
                        .with_right(n(7)),
                ),
                step(
                    "2. Zig Rotation(6)",
                    Final,
                    n(5).with_left(n(4).with_left(n(3)))
                        .with_right(n(6).with_right(n(7))),
                ),
            ],
        ),
        bullets(
            "Solution",
            &[
                "Search: Find node, splay to root.",
                "Insert: Split, insert node, splay new root.",
                "Delete: Splay node, join left/right subtrees.",
                "Join or Split defined using splaying.",
                "Elegance: Frequently accessed nodes move toward root.",
            ],
        ),
        steps(
            "Splay Trees Method: Search()",
            vec![
                step("0. Original Splay Tree", Start, method_start()),
                step(
                    "1. Zig for Search(3)",
                    Intermediate,
                    n(1).with_left(n(2))
                        .with_right(n(3).with_right(n(4).with_right(n(8)))),
                ),
                step(
                    "2. Zag for Search(3)",
                    Final,
                    n(3).with_left(n(1).with_left(n(2)))
                        .with_right(n(4).with_right(n(8))),
                ),
            ],
        ),
        steps(
            "Splay Trees Method: Insert()",
            vec![
                step("0. Original Splay Tree", Neutral, method_start()),
                step(
                    "1. Insert(0)",
                    Start,
                    n(1).with_left(n(2).with_left(n(0)))
                        .with_right(n(4).with_left(n(3)).with_right(n(8))),
                ),
                step(
                    "2. Zig, Insert(0)",
                    Intermediate,
                    n(2).with_left(n(0)).with_right(
                        n(1).with_left(n(3)).with_right(n(4).with_right(n(8))),
                    ),
                ),
                step(
                    "3. Zig, Insert(0)",
                    Final,
                    n(0).with_right(
                        n(2).with_right(
                            n(1).with_left(n(3)).with_right(n(4).with_right(n(8))),
                        ),
                    ),
                ),
            ],
        ),
        steps(
            "Splay Trees Method: Delete()",
            vec![
                step("0. Original Splay Tree", Start, method_start()),
                step(
                    "1. Delete(3)",
                    Intermediate,
                    n(1).with_left(n(2)).with_right(n(4).with_right(n(8))),
                ),
                step(
                    "2. Zag",
                    Final,
                    n(4).with_left(n(1).with_left(n(2))).with_right(n(8)),
                ),
            ],
        ),
        bullets(
            "Variants and Optimizations",
            &[
                "Top-Down Splaying: One-pass traversal and restructure.",
                "Semi-Splaying: Less restructuring, simpler logic.",
                "Conditional Splaying: Triggered by path length/frequency.",
                "Snapshot Optimization: Temporarily stop splaying.",
            ],
        ),
        bullets(
            "Extensions to Other Data Structures",
            &[
                "Lexicographic Trees: For efficient string search.",
                "Link/Cut Trees: Dynamic trees for network problems.",
                "Splaying helps maintain efficient access.",
            ],
        ),
        bullets(
            "Amortized Complexity",
            &[
                "Potential function: log-based ranks of nodes.",
                "Amortized cost = Actual Cost + change in Potential.",
                "Splaying cost less than or equal to 3(log W - log w) + 1.",
                "Sequence average is O(log n) per operation.",
            ],
        ),
        bullets(
            "Conclusion",
            &[
                "Splay trees: Simplicity + adaptability.",
                "Avoid balance factors and metadata.",
                "Match optimal performance over sequences.",
                "Generalizable technique for other structures.",
                "Valuable lesson in amortized analysis.",
            ],
        ),
        bullets(
            "Thank You",
            &[
                "We appreciate your support CS 3511 TA team. We couldn't have done it without you all!",
            ],
        ),
    ];

    Deck {
        title: "Analysis of Splay Trees".to_string(),
        subtitle: "By: Dhruv Patel, Ashton Holland, Adam Kulikowski, Aditya Behara".to_string(),
        layout: LayoutParams::default(),
        theme: Theme::default(),
        ease: Ease::Smooth,
        slides,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/builtin.rs"]
mod tests;
