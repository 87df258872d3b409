//! Host-independent scene-graph values
//!
//! Builders describe the subtree they want as a [`Node`] value; the host
//! materializes it in a single `insert_child` call. Keeping construction as
//! plain data means a failed build never leaves half a subtree attached to
//! the document.

use serde::{Deserialize, Serialize};

use super::color::{Rgb, Rgba};
use super::font::FontName;

/// Host-assigned identifier of a page or node
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Host-assigned hash of a decoded image
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHash(String);

impl ImageHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Page,
    Frame,
    Text,
    Ellipse,
    Rectangle,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Page => "PAGE",
            NodeKind::Frame => "FRAME",
            NodeKind::Text => "TEXT",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Rectangle => "RECTANGLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    Fixed,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Align {
    Min,
    Center,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Auto-layout settings of a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub padding: Padding,
    pub item_spacing: f32,
    /// Sizing along the stacking axis
    pub primary_sizing: SizingMode,
    /// Sizing across the stacking axis
    pub counter_sizing: SizingMode,
    pub counter_align: Align,
}

impl AutoLayout {
    pub fn vertical() -> Self {
        Self {
            mode: LayoutMode::Vertical,
            padding: Padding::ZERO,
            item_spacing: 0.0,
            primary_sizing: SizingMode::Auto,
            counter_sizing: SizingMode::Auto,
            counter_align: Align::Min,
        }
    }

    pub fn horizontal() -> Self {
        Self {
            mode: LayoutMode::Horizontal,
            ..Self::vertical()
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_sizing(mut self, primary: SizingMode, counter: SizingMode) -> Self {
        self.primary_sizing = primary;
        self.counter_sizing = counter;
        self
    }

    pub fn centered(mut self) -> Self {
        self.counter_align = Align::Center;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const fn uniform(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub const fn top(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }

    pub const fn bottom(r: f32) -> Self {
        Self {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == CornerRadii::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Rgb },
    Image { image_hash: ImageHash },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    pub color: Rgba,
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub spread: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(DropShadow),
}

/// Visual properties shared by every node kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub layout: Option<AutoLayout>,
    /// Stretch across the parent's counter axis
    pub stretch: bool,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f32,
    pub corner_radii: CornerRadii,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub characters: String,
    pub font: FontName,
    pub font_size: f32,
    pub color: Rgb,
    pub hyperlink: Option<String>,
    pub line_height: Option<f32>,
}

impl TextProps {
    pub fn new(characters: impl Into<String>, font: &FontName, font_size: f32, color: Rgb) -> Self {
        Self {
            characters: characters.into(),
            font: font.clone(),
            font_size,
            color,
            hyperlink: None,
            line_height: None,
        }
    }

    pub fn with_hyperlink(mut self, url: impl Into<String>) -> Self {
        self.hyperlink = Some(url.into());
        self
    }

    pub fn with_line_height(mut self, px: f32) -> Self {
        self.line_height = Some(px);
        self
    }
}

/// Description of a scene-graph subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub name: String,
    pub locked: bool,
    pub style: NodeStyle,
    pub text: Option<TextProps>,
    pub children: Vec<Node>,
}

impl Node {
    fn empty(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            locked: false,
            style: NodeStyle::default(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::empty(NodeKind::Frame, name)
    }

    pub fn text(name: impl Into<String>, props: TextProps) -> Self {
        let mut node = Self::empty(NodeKind::Text, name);
        node.text = Some(props);
        node
    }

    pub fn ellipse(name: impl Into<String>, diameter: f32) -> Self {
        Self::empty(NodeKind::Ellipse, name).with_size(diameter, diameter)
    }

    pub fn rectangle(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self::empty(NodeKind::Rectangle, name).with_size(width, height)
    }

    pub fn with_layout(mut self, layout: AutoLayout) -> Self {
        self.style.layout = Some(layout);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.style.width = Some(width);
        self.style.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.style.fills.push(paint);
        self
    }

    pub fn with_solid_fill(self, color: Rgb) -> Self {
        self.with_fill(Paint::Solid { color })
    }

    pub fn with_stroke(mut self, color: Rgb, weight: f32) -> Self {
        self.style.strokes.push(Paint::Solid { color });
        self.style.stroke_weight = weight;
        self
    }

    pub fn with_corner_radii(mut self, radii: CornerRadii) -> Self {
        self.style.corner_radii = radii;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.style.effects.push(effect);
        self
    }

    pub fn stretched(mut self) -> Self {
        self.style.stretch = true;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark the subtree root as edit-protected
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Text characters, if this is a text node
    pub fn characters(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.characters.as_str())
    }

    /// Depth-first search for the first descendant (or self) with `name`
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Number of nodes in the subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_descends_depth_first() {
        let font = FontName::new("Inter", "Regular");
        let tree = Node::frame("root").with_child(
            Node::frame("row").with_child(Node::text(
                "label",
                TextProps::new("hello", &font, 12.0, Rgb::BLACK),
            )),
        );

        assert_eq!(tree.find("label").and_then(Node::characters), Some("hello"));
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.subtree_len(), 3);
    }

    #[test]
    fn test_corner_radii_helpers() {
        let top = CornerRadii::top(4.0);
        assert_eq!(top.top_left, 4.0);
        assert_eq!(top.bottom_left, 0.0);

        let bottom = CornerRadii::bottom(8.0);
        assert_eq!(bottom.top_right, 0.0);
        assert_eq!(bottom.bottom_right, 8.0);
        assert!(CornerRadii::default().is_zero());
    }

    #[test]
    fn test_locked_builder() {
        let node = Node::frame("entry").locked();
        assert!(node.locked);
    }
}
