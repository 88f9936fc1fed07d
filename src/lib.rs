//! swatch generates color palettes. Colors are drawn at random in either the
//! hex or the HSL encoding, individual palette positions can be locked across
//! regenerations, and palettes can be saved for later.

#![deny(missing_docs)]

mod clipboard;
mod color;
mod config;
mod convert;
mod error;
mod hsl;
mod math;
mod notify;
mod palette;
mod random;
mod rgb;
mod store;
mod studio;


pub use clipboard::{Clipboard, MemoryClipboard};
pub use color::{Color, Component, Components, Format};
pub use config::{Settings, MAX_PALETTE_SIZE, PALETTE_SIZES};
pub use convert::{hex_to_hsl, hsl_to_hex};
pub use error::{ClipboardError, Error, PaletteError, ParseColorError, StoreError};
pub use hsl::Hsl;
pub use notify::{Notification, Toast, TOAST_DURATION};
pub use palette::{Palette, Swatch};
pub use random::{random_color, random_hex, random_hsl, HSL_LIGHTNESS, HSL_SATURATION};
pub use rgb::Rgb;
pub use store::{now_timestamp, JsonFileStore, MemoryStore, Snapshot, SnapshotStore};
pub use studio::Studio;
