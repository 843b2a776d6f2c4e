//! Email content block model.
//!
//! This module provides:
//! - The closed vocabulary of block kinds (`greeting`, `button`, `details-table`, ...)
//! - `VisualTemplate`, an ordered composition of blocks plus banner metadata
//! - Shape validation reporting `InvalidBlock` errors before a template is saved
//! - A typed per-kind view (`BlockView`) used by the renderer
//!
//! # Example
//!
//! ```ignore
//! let template = VisualTemplate::new("Payment Received", "#16a34a")
//!     .with_block(Block::new(BlockKind::Greeting, "Hi {{userName}},"))
//!     .with_block(
//!         Block::new(BlockKind::Button, "View payment")
//!             .with_property("url", "{{paymentUrl}}")
//!             .with_property("color", "success"),
//!     );
//!
//! template.validate()?;
//! ```

mod types;
mod view;

pub use types::{
    normalize_hex_color, Block, BlockKind, BlockResult, InvalidBlock, VisualTemplate,
    DEFAULT_HEADER_COLOR, DEFAULT_HEADER_TITLE,
};
pub use view::{
    AmountStyle, BlockView, ButtonColor, CalloutTone, DetailRow, HeadingSize, PropertyChoice,
};
