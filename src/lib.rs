#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod draw;
pub mod encoder;
pub mod frame_scheduler;
pub mod strip;

pub use bounds::LedSpan;
pub use command::{CommandQueue, CommandReceiver, CommandSender, DrawCommand};
pub use draw::{
    BlinkState, Direction, DrawAction, DrawContext, DrawDuration, DrawObject, Expiry,
    ObjectRegistry, bind,
};
pub use encoder::{BitPattern, LinkSpeed};
pub use frame_scheduler::{FrameResult, FrameScheduler, SchedulerConfig};
pub use strip::{ConfigError, Strip, StripState, WriteError};

pub use color::{ColorCycle, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract waveform transport
///
/// Implement this trait to push encoded frames out of a clocked serial
/// peripheral (SPI, I2S, ...). The link must run at the clock of the strip's
/// [`LinkSpeed`], and the line has to stay low for the reset gap after each
/// frame.
pub trait WaveformSink {
    /// Transmit one encoded frame
    fn write(&mut self, waveform: &[u8]);
}
