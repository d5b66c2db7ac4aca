// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless surface that records transforms and redraw requests.

use kurbo::{Affine, Size};
use log::info;
use serde::{Deserialize, Serialize};
use zoomview_gesture::RenderSurface;

/// Opaque state a real video surface might persist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Stream the surface was showing.
    pub media_uri: String,
    /// Playback position in milliseconds.
    pub position_ms: u64,
}

/// Stand-in for a video texture: keeps every transform it receives.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transforms: Vec<Affine>,
    redraws: usize,
    playback: PlaybackState,
}

impl RecordingSurface {
    /// Creates a surface of the given pixel size.
    pub fn new(size: Size, playback: PlaybackState) -> Self {
        Self {
            size,
            transforms: Vec::new(),
            redraws: 0,
            playback,
        }
    }

    /// Resizes the surface, as a rotation or layout pass would.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Every transform applied so far, oldest first.
    pub fn transforms(&self) -> &[Affine] {
        &self.transforms
    }

    /// Number of redraws requested.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Playback state carried by this surface.
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }
}

impl RenderSurface for RecordingSurface {
    type State = PlaybackState;

    fn size(&self) -> Size {
        self.size
    }

    fn set_transform(&mut self, transform: Affine) {
        let [s, _, _, _, tx, ty] = transform.as_coeffs();
        info!("transform: scale {s:.3}, translate ({tx:.1}, {ty:.1})");
        self.transforms.push(transform);
    }

    fn invalidate(&mut self) {
        self.redraws += 1;
    }

    fn save_state(&self) -> PlaybackState {
        self.playback.clone()
    }

    fn restore_state(&mut self, state: PlaybackState) {
        self.playback = state;
    }
}
