//! Ties a palette to its collaborators.
//!
//! [`Studio`] handles the user actions: generate, lock, copy, save and
//! clear. Each action reports back through the [`Toast`].

use std::time::Instant;

use rand::{rngs::ThreadRng, Rng};

use crate::{
    clipboard::Clipboard,
    config::{MAX_PALETTE_SIZE, PALETTE_SIZES},
    error::{Error, PaletteError},
    notify::Toast,
    palette::{Palette, Swatch},
    store::{now_timestamp, Snapshot, SnapshotStore},
    Format,
};

/// A palette together with the store, clipboard and notification area it
/// reports to.
#[derive(Debug)]
pub struct Studio<S, C, R = ThreadRng> {
    palette: Palette,
    toast: Toast,
    store: S,
    clipboard: C,
    rng: R,
}

impl<S: SnapshotStore, C: Clipboard> Studio<S, C> {
    /// Create a studio with an empty palette drawing from the thread local
    /// random number generator.
    pub fn new(store: S, clipboard: C) -> Self {
        Self::with_rng(store, clipboard, rand::rng())
    }
}

impl<S: SnapshotStore, C: Clipboard, R: Rng> Studio<S, C, R> {
    /// Create a studio with an empty palette drawing from `rng`.
    pub fn with_rng(store: S, clipboard: C, rng: R) -> Self {
        Self {
            palette: Palette::new(),
            toast: Toast::default(),
            store,
            clipboard,
            rng,
        }
    }

    /// Regenerate the palette, then save it. Sizes above
    /// [`MAX_PALETTE_SIZE`] are refused and leave the palette untouched.
    pub fn generate(&mut self, size: usize, format: Format) -> Result<Vec<Swatch>, Error> {
        if size > MAX_PALETTE_SIZE {
            return Err(PaletteError::TooLarge {
                size,
                max: MAX_PALETTE_SIZE,
            }
            .into());
        }
        if !PALETTE_SIZES.contains(&size) {
            tracing::warn!(size, offered = ?PALETTE_SIZES, "unusual palette size");
        }

        let len = self.palette.regenerate(size, format, &mut self.rng).len();
        self.notify(format!("Palette of {len} colors generated"));
        self.save()?;
        Ok(self.palette.swatches())
    }

    /// Flip the lock of one position and return the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, Error> {
        let locked = self.palette.toggle_lock(index)?;
        self.notify(if locked { "Color locked" } else { "Color unlocked" });
        Ok(locked)
    }

    /// Copy the hex encoding of one position to the clipboard. A failed copy
    /// is reported through the toast and is not retried.
    pub fn copy(&mut self, index: usize) -> bool {
        let Some(hex) = self.palette.get(index).map(|c| c.to_rgb().to_string()) else {
            tracing::warn!(index, len = self.palette.len(), "copy outside of palette");
            return false;
        };

        match self.clipboard.write_text(&hex) {
            Ok(()) => {
                self.notify(format!("Copied: {hex}"));
                true
            }
            Err(err) => {
                tracing::error!(%err, "could not copy");
                self.notify("Could not copy");
                false
            }
        }
    }

    /// Append the current palette to the store.
    pub fn save(&mut self) -> Result<(), Error> {
        self.store
            .append(self.palette.snapshot(now_timestamp()))?;
        self.notify("Palette saved");
        Ok(())
    }

    /// Remove every saved palette.
    pub fn clear_saved(&mut self) -> Result<(), Error> {
        self.store.clear()?;
        self.notify("Palettes cleared");
        Ok(())
    }

    /// Every saved palette, oldest first.
    pub fn saved(&self) -> Result<Vec<Snapshot>, Error> {
        Ok(self.store.list()?)
    }

    /// The current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current palette, for seeding or direct manipulation.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The notification area.
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// The message visible right now, if any.
    pub fn message(&self) -> Option<&str> {
        self.toast.current(Instant::now())
    }

    /// The clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.toast.show(message, Instant::now());
    }
}
