//! Draw output.
//!
//! Controls record [`SceneNode`]s while the frame is declared. Every root
//! container records into its own segment so that `end()` can reorder whole
//! windows by z-index without touching the nodes inside them.

use std::fmt::Write as _;

use crate::{Color, FontId, Icon, Rect, RenderBackend, Vec2};

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
    },
    /// One pixel outline.
    Border {
        rect: Rect,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
        font: FontId,
        size: u16,
    },
    Icon {
        icon: Icon,
        rect: Rect,
        color: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

impl Scene {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn replay(&self, backend: &mut dyn RenderBackend) {
        for node in &self.nodes {
            match node {
                SceneNode::Rect { rect, color } => backend.fill_rect(*rect, *color),
                SceneNode::Border { rect, color } => backend.stroke_rect(*rect, *color),
                SceneNode::Text {
                    pos,
                    text,
                    color,
                    font,
                    size,
                } => backend.text(*font, *size, text, *pos, *color),
                SceneNode::Icon { icon, rect, color } => backend.icon(*icon, *rect, *color),
                SceneNode::PushClip { rect } => backend.push_clip(*rect),
                SceneNode::PopClip => backend.pop_clip(),
            }
        }
    }

    /// Compact one-node-per-line listing, used by snapshot tests and the
    /// showcase's logging backend.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for node in &self.nodes {
            if matches!(node, SceneNode::PopClip) {
                depth = depth.saturating_sub(1);
            }
            let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(node));
            if matches!(node, SceneNode::PushClip { .. }) {
                depth += 1;
            }
        }
        out
    }
}

fn rect_str(r: &Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.w, r.h)
}

pub fn describe(node: &SceneNode) -> String {
    match node {
        SceneNode::Rect { rect, color } => format!("rect {} {}", rect_str(rect), color.to_hex()),
        SceneNode::Border { rect, color } => {
            format!("border {} {}", rect_str(rect), color.to_hex())
        }
        SceneNode::Text {
            pos, text, color, ..
        } => format!("text {},{} {:?} {}", pos.x, pos.y, text, color.to_hex()),
        SceneNode::Icon { icon, rect, color } => {
            format!("icon {:?} {} {}", icon, rect_str(rect), color.to_hex())
        }
        SceneNode::PushClip { rect } => format!("clip {}", rect_str(rect)),
        SceneNode::PopClip => "unclip".to_string(),
    }
}

/// Per-root draw segments for the frame being declared.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    segments: Vec<Vec<SceneNode>>,
    active: Vec<usize>,
    loose: Vec<SceneNode>,
}

impl CommandList {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.active.clear();
        self.loose.clear();
    }

    /// Opens a segment for a root container and returns its head marker.
    pub fn begin_segment(&mut self) -> usize {
        self.segments.push(Vec::new());
        let head = self.segments.len() - 1;
        self.active.push(head);
        head
    }

    /// Closes the innermost segment and returns its tail marker.
    pub fn end_segment(&mut self) -> usize {
        match self.active.pop() {
            Some(head) => self.segments[head].len(),
            None => 0,
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        match self.active.last() {
            Some(&head) => self.segments[head].push(node),
            None => self.loose.push(node),
        }
    }

    pub fn segment(&self, head: usize) -> &[SceneNode] {
        self.segments.get(head).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Concatenates segments in the given `(head, tail)` order. Nodes
    /// recorded outside every root container come first.
    pub fn splice(&mut self, order: &[(usize, usize)]) -> Scene {
        let mut nodes = std::mem::take(&mut self.loose);
        for &(head, tail) in order {
            if let Some(seg) = self.segments.get_mut(head) {
                let end = tail.min(seg.len());
                nodes.extend(seg.drain(..end));
            }
        }
        self.clear();
        Scene { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32) -> SceneNode {
        SceneNode::Rect {
            rect: Rect::new(x, 0, 1, 1),
            color: Color::WHITE,
        }
    }

    #[test]
    fn splice_follows_given_order() {
        let mut c = CommandList::default();
        let a = c.begin_segment();
        c.push(rect(1));
        let a_tail = c.end_segment();
        let b = c.begin_segment();
        c.push(rect(2));
        c.push(rect(3));
        let b_tail = c.end_segment();

        let scene = c.splice(&[(b, b_tail), (a, a_tail)]);
        assert_eq!(scene.nodes, vec![rect(2), rect(3), rect(1)]);
    }

    #[test]
    fn nested_segments_stay_separate() {
        let mut c = CommandList::default();
        let outer = c.begin_segment();
        c.push(rect(1));
        let inner = c.begin_segment();
        c.push(rect(2));
        let inner_tail = c.end_segment();
        c.push(rect(3));
        let outer_tail = c.end_segment();

        assert_eq!(c.segment(outer), &[rect(1), rect(3)]);
        let scene = c.splice(&[(outer, outer_tail), (inner, inner_tail)]);
        assert_eq!(scene.nodes, vec![rect(1), rect(3), rect(2)]);
    }

    #[test]
    fn dump_indents_clipped_runs() {
        let scene = Scene {
            nodes: vec![
                SceneNode::PushClip {
                    rect: Rect::new(0, 0, 10, 10),
                },
                SceneNode::Text {
                    pos: Vec2::new(1, 2),
                    text: "hi".into(),
                    color: Color::WHITE,
                    font: FontId::DEFAULT,
                    size: 12,
                },
                SceneNode::PopClip,
            ],
        };
        insta::assert_snapshot!(scene.dump(), @r#"
        clip 0,0 10x10
          text 1,2 "hi" #FFFFFF
        unclip
        "#);
    }
}
