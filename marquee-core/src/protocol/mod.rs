//! MAX7219 chain protocol
//!
//! Register map, (address, data) frames and the transaction builders that
//! position a real register write at one device of a daisy chain.
//!
//! # Daisy chain addressing
//!
//! Every device is a 16-bit shift register. A transaction shifts one frame
//! per device through the chain; on chip-select release each device latches
//! the frame that ended up inside it. To write a register on just one device,
//! the transaction carries the real frame at that device's slot and no-op
//! frames in every other slot:
//!
//! ```text
//! slot:      0        1        2        3
//!         ┌───────┬────────┬───────┬───────┐
//!         │ NOOP  │ (j, v) │ NOOP  │ NOOP  │   target = 1, chain = 4
//!         └───────┴────────┴───────┴───────┘
//! ```

pub mod frame;
pub mod register;
pub mod render;

pub use frame::{broadcast, column_transaction, Frame, ProtocolError, Transaction};
pub use register::{column_registers, display_test, is_column_register, reg, shutdown, COLUMNS_PER_DEVICE};
pub use render::{render_plan, transactions_per_render, RenderPlan, RenderStep};
