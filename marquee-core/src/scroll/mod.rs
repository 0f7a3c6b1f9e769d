//! Scrolling state
//!
//! The scroll buffer is a sliding window over the message's column stream.
//! Each scroll step shifts one column in at the right edge and drops the
//! oldest column off the left edge.

pub mod buffer;
pub mod stream;

pub use buffer::{ScrollBuffer, MAX_COLUMNS};
pub use stream::{ColumnStream, StreamPosition, COLUMNS_PER_CHARACTER, SPACER_COLUMN};
