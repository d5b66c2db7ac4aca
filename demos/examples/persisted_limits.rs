// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load zoom limits from JSON, then save and restore them across a
//! simulated surface re-creation (for example a screen rotation).
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p zoomview_demos --example persisted_limits`

use kurbo::Size;
use zoomview_demos::recording_surface::{PlaybackState, RecordingSurface};
use zoomview_gesture::{SavedState, ZoomLimits, ZoomableSurface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Limits as a host might ship them in a layout or settings file.
    let limits: ZoomLimits = serde_json::from_str(r#"{ "minScale": 1.0, "maxScale": 3.5 }"#)?;

    let playback = PlaybackState {
        media_uri: "https://example.com/live/master.m3u8".to_owned(),
        position_ms: 42_000,
    };
    let portrait = RecordingSurface::new(Size::new(720.0, 1280.0), playback);
    let zoomable = ZoomableSurface::with_limits(portrait, limits);

    let saved = serde_json::to_string_pretty(&zoomable.save_state())?;
    println!("saved state:\n{saved}");

    // The surface is torn down and re-created in landscape with default limits.
    let landscape = RecordingSurface::new(Size::new(1280.0, 720.0), PlaybackState::default());
    let mut recreated = ZoomableSurface::new(landscape);
    let state: SavedState<PlaybackState> = serde_json::from_str(&saved)?;
    recreated.restore_state(state)?;

    let restored = recreated.engine().limits();
    println!(
        "restored limits [{}, {}] at {} ms into {}",
        restored.min_scale(),
        restored.max_scale(),
        recreated.surface().playback().position_ms,
        recreated.surface().playback().media_uri
    );

    // Invalid bounds are rejected before they reach the engine.
    match serde_json::from_str::<ZoomLimits>(r#"{ "minScale": 0.5, "maxScale": 2.0 }"#) {
        Ok(_) => println!("unexpectedly accepted invalid limits"),
        Err(err) => println!("rejected invalid limits: {err}"),
    }

    Ok(())
}
