//! # Immediate-mode engine
//!
//! Stencil redraws the whole interface every frame. Application code calls
//! `begin()`, declares windows and controls in order, and calls `end()`; the
//! engine remembers just enough between frames (focus, hover, window
//! positions, scroll offsets, which tree nodes are expanded) to make the
//! declared controls interactive.
//!
//! ```rust
//! use stencil_core::*;
//!
//! struct Mono;
//! impl TextMetrics for Mono {
//!     fn text_width(&self, _: FontId, _: u16, text: &str) -> i32 {
//!         text.len() as i32 * 7
//!     }
//!     fn text_height(&self, _: FontId, _: u16) -> i32 {
//!         12
//!     }
//! }
//!
//! let mut ctx = Context::new(Mono);
//! ctx.input_mouse_move(50, 50);
//! ctx.begin();
//! if ctx.begin_window("Hello", Rect::new(10, 10, 200, 120)) {
//!     ctx.layout_row(&[-1], 0);
//!     let r = ctx.layout_next();
//!     ctx.draw_control_text("Hi", r, ColorId::Text, Options::empty());
//!     ctx.end_window();
//! }
//! ctx.end();
//! assert!(!ctx.scene().is_empty());
//! ```
//!
//! ## Identity
//!
//! Every control is recognised across frames by an [`Id`] hashed from its
//! label and the ids of the scopes around it (windows, panels, tree nodes,
//! or anything pushed with `push_id`). Two buttons labelled "Ok" in the same
//! window collide; push an index around one of them.
//!
//! ## Layout
//!
//! `layout_row(&[widths], height)` configures a row, `layout_next()` hands
//! out the next cell. Width `0` means the style default, negative widths are
//! measured from the right edge of the body. Columns nest with
//! `layout_begin_column`/`layout_end_column`.
//!
//! ## Usage errors
//!
//! Unbalanced begin/end or push/pop pairs, and overflowing a fixed-size
//! stack, are programming errors. They are logged and then panic; see
//! [`error`].
//!
//! ## Output
//!
//! `end()` produces a [`Scene`]: a flat list of rectangles, borders, text,
//! icons and clip brackets with root windows already in z-order. Hand it to a
//! [`RenderBackend`].

pub mod clip;
pub mod color;
pub mod container;
pub mod context;
pub mod error;
pub mod events;
pub mod geometry;
pub mod id;
pub mod input;
pub mod layout;
pub mod pool;
pub mod prelude;
pub mod render_api;
pub mod scene;
pub mod stack;
pub mod style;


pub use clip::*;
pub use color::*;
pub use container::*;
pub use context::*;
pub use events::*;
pub use geometry::*;
pub use id::*;
pub use input::*;
pub use layout::{Layout, MAX_WIDTHS};
pub use pool::*;
pub use render_api::*;
pub use scene::*;
pub use style::*;
