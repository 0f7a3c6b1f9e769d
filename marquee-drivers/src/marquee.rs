//! Scroll loop
//!
//! Pairs every column shift with a full render, then waits out the scroll
//! delay. One call to [`Marquee::step`] moves the text one column left.
//!
//! ```text
//!   ColumnStream ──next()──► ScrollBuffer::shift_in ──► Max7219Chain::render ──► delay
//!        ▲                                                                        │
//!        └────────────────────────────────────────────────────────────────────────┘
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use marquee_core::config::DeviceSettings;
use marquee_core::scroll::{ColumnStream, ScrollBuffer, StreamPosition};
use marquee_core::text::Message;
use marquee_core::traits::SerialTransport;

use crate::max7219::{ChainError, Max7219Chain};

/// Errors surfaced by the scroll loop
pub type MarqueeError<E> = ChainError<E>;

/// Scrolling text display
pub struct Marquee<'a, T, D> {
    chain: Max7219Chain<T>,
    settings: DeviceSettings,
    buffer: ScrollBuffer,
    stream: ColumnStream<'a>,
    delay: D,
    scroll_delay_us: u32,
}

impl<'a, T: SerialTransport, D: DelayNs> Marquee<'a, T, D> {
    /// Create a marquee for `message`
    ///
    /// The buffer is sized from the chain; nothing is sent until
    /// [`start`](Self::start).
    pub fn new(
        chain: Max7219Chain<T>,
        settings: DeviceSettings,
        message: Message<'a>,
        delay: D,
        scroll_delay_us: u32,
    ) -> Self {
        let buffer = ScrollBuffer::new(chain.chain_length());
        Self {
            chain,
            settings,
            buffer,
            stream: ColumnStream::new(message),
            delay,
            scroll_delay_us,
        }
    }

    /// Program the chain, blank it and rewind to the start of the message
    pub fn start(&mut self) -> Result<(), MarqueeError<T::Error>> {
        self.chain.initialize(&self.settings)?;
        self.chain.clear()?;
        self.buffer.clear();
        self.stream.reset();
        Ok(())
    }

    /// Advance the text by one column
    pub fn step(&mut self) -> Result<(), MarqueeError<T::Error>> {
        // The stream is endless
        if let Some(column) = self.stream.next() {
            self.buffer.shift_in(column);
        }
        self.chain.render(&self.buffer)?;
        self.delay.delay_us(self.scroll_delay_us);
        Ok(())
    }

    /// Start, then scroll until the transport fails
    pub fn run(&mut self) -> Result<Infallible, MarqueeError<T::Error>> {
        self.start()?;
        loop {
            self.step()?;
        }
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    /// Position of the next column in the message
    pub fn position(&self) -> StreamPosition {
        self.stream.position()
    }

    /// Delay between columns, in microseconds
    pub fn scroll_delay_us(&self) -> u32 {
        self.scroll_delay_us
    }

    /// Borrow the chain driver
    pub fn chain(&self) -> &Max7219Chain<T> {
        &self.chain
    }
}
