pub use crate::clip::Clip;
pub use crate::color::Color;
pub use crate::container::{Container, ContainerRef};
pub use crate::context::Context;
pub use crate::error::{UsageError, fatal};
pub use crate::events::{Event, EventKind};
pub use crate::geometry::{Axis, Rect, Sides, Vec2};
pub use crate::id::{Id, IdSource, ptr_bytes};
pub use crate::input::{Key, MouseButton, Options, Response};
pub use crate::render_api::{RenderBackend, TextMetrics};
pub use crate::scene::{Scene, SceneNode};
pub use crate::style::{ColorId, FontId, Icon, Style};
