//! Full-chain render plan
//!
//! Rendering re-sends the whole scroll buffer. Each (column register, device)
//! pair gets its own transaction, so a chain of N devices takes 8*N
//! transactions of N frames each. The plan is a pure iterator so the exact
//! wire traffic can be inspected without hardware.

use super::frame::{column_transaction, Frame, Transaction};
use super::register::{reg, COLUMNS_PER_DEVICE};
use crate::scroll::ScrollBuffer;

/// One transaction of a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStep {
    /// Column register being written (1-8)
    pub register: u8,
    /// Device whose register is written
    pub device: usize,
    /// Frames to send, slot 0 first
    pub frames: Transaction,
}

/// Iterator over every transaction of one render pass
///
/// Columns are the outer loop, devices the inner one.
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    buffer: &'a ScrollBuffer,
    register: u8,
    device: usize,
}

/// Plan the transactions that put `buffer` on the chain
pub fn render_plan(buffer: &ScrollBuffer) -> RenderPlan<'_> {
    RenderPlan {
        buffer,
        register: reg::COLUMN_1,
        device: 0,
    }
}

impl Iterator for RenderPlan<'_> {
    type Item = RenderStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.register > reg::COLUMN_8 {
            return None;
        }

        let register = self.register;
        let device = self.device;
        let value = self.buffer.column(device, register)?;
        let frames = column_transaction(device, self.buffer.chain_length(), register, value).ok()?;

        self.device += 1;
        if self.device == self.buffer.chain_length().get() {
            self.device = 0;
            self.register += 1;
        }

        Some(RenderStep {
            register,
            device,
            frames,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let devices = self.buffer.chain_length().get();
        let remaining = if self.register > reg::COLUMN_8 {
            0
        } else {
            let columns_left = (reg::COLUMN_8 - self.register) as usize;
            columns_left * devices + (devices - self.device)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RenderPlan<'_> {}

/// Number of transactions in a full render of `devices` devices
pub const fn transactions_per_render(devices: usize) -> usize {
    devices * COLUMNS_PER_DEVICE
}

impl RenderStep {
    /// The single frame in this step that is not a no-op
    pub fn payload(&self) -> Frame {
        self.frames[self.device]
    }
}
