//! Explicit memoization of per-view derived data.
//!
//! The kernel keeps no hidden state. A caller that redraws the same view
//! every frame keeps a [`ViewCache`] and hands it the current [`ViewKey`];
//! the cached value is rebuilt only when the key changes.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::hyperbolic::poincare::mobius;
use crate::hyperbolic::DiskPoint;

/// Identity of a view: camera center, zoom, and a caller-bumped epoch that
/// changes whenever the underlying positions do.
///
/// Keys compare by bit pattern with every NaN treated as one value, so a
/// NaN zoom or camera still hits its own cached entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewKey {
    pub camera: DiskPoint,
    pub zoom: f64,
    pub epoch: u64,
}

#[inline]
fn key_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for ViewKey {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch
            && key_bits(self.zoom) == key_bits(other.zoom)
            && key_bits(self.camera.re) == key_bits(other.camera.re)
            && key_bits(self.camera.im) == key_bits(other.camera.im)
    }
}

impl Eq for ViewKey {}

/// Single-slot memo keyed by [`ViewKey`].
#[derive(Debug, Clone)]
pub struct ViewCache<T> {
    entry: Option<(ViewKey, T)>,
    hits: u64,
    misses: u64,
}

impl<T> Default for ViewCache<T> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<T> ViewCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, computing it with `build` on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: ViewKey, build: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if matches!(&self.entry, Some((cached, _)) if *cached == key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(epoch = key.epoch, zoom = key.zoom, "view cache miss");
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key, build()));
        value
    }

    /// Cached value if it was built for exactly `key`.
    pub fn get(&self, key: &ViewKey) -> Option<&T> {
        self.entry
            .as_ref()
            .filter(|(cached, _)| cached == key)
            .map(|(_, value)| value)
    }

    /// Drop the cached value.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

/// Map world positions into the frame centered on `camera`.
#[inline]
pub fn project_positions(camera: DiskPoint, positions: &[DiskPoint]) -> Vec<DiskPoint> {
    positions.iter().map(|&p| mobius(camera, p)).collect()
}

/// Memo of [`project_positions`] per view.
#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    cache: ViewCache<Vec<DiskPoint>>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected positions for `key`. `positions` is only read on a miss,
    /// so the caller must bump `key.epoch` whenever it changes.
    pub fn project(&mut self, key: ViewKey, positions: &[DiskPoint]) -> &[DiskPoint] {
        self.cache
            .get_or_insert_with(key, || project_positions(key.camera, positions))
    }

    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    pub fn stats(&self) -> (u64, u64) {
        self.cache.stats()
    }
}
