pub mod color;
pub mod entry;
pub mod font;
pub mod node;

pub use color::{Rgb, Rgba};
pub use entry::{ChangeType, ChangelogEntry, UserInfo};
pub use font::{FontCollection, FontName, FontRole, FontSet, FontTier, FontTiers, ResolvedFont};
pub use node::{
    Align, AutoLayout, CornerRadii, DropShadow, Effect, ImageHash, LayoutMode, Node, NodeId,
    NodeKind, NodeStyle, Padding, Paint, SizingMode, TextProps,
};
