// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted pinch, drag and pinch-out on a headless video surface.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p zoomview_demos --example pinch_replay`

use kurbo::{Point, Size};
use zoomview_demos::recording_surface::{PlaybackState, RecordingSurface};
use zoomview_demos::touch_script::TouchScript;
use zoomview_gesture::ZoomableSurface;

fn main() {
    env_logger::init();

    let surface = RecordingSurface::new(
        Size::new(1280.0, 720.0),
        PlaybackState {
            media_uri: "https://example.com/live/master.m3u8".to_owned(),
            position_ms: 0,
        },
    );
    let mut zoomable = ZoomableSurface::new(surface);

    let mut frames: Vec<Vec<Point>> = Vec::new();

    // Two fingers spread apart around the center: zoom in.
    frames.push(vec![Point::new(600.0, 360.0)]);
    for step in 0..=10 {
        let half = 40.0 + 16.0 * f64::from(step);
        frames.push(vec![
            Point::new(640.0 - half, 360.0),
            Point::new(640.0 + half, 360.0),
        ]);
    }
    frames.push(vec![Point::new(640.0 - 200.0, 360.0)]);
    frames.push(vec![]);

    // One finger drags far to the right: the pan stops at the content edge.
    for step in 0..=10 {
        frames.push(vec![Point::new(200.0 + 100.0 * f64::from(step), 300.0)]);
    }
    frames.push(vec![]);

    // Pinch back in past the minimum: the scale clamps at 1.0.
    frames.push(vec![Point::new(300.0, 200.0)]);
    for step in 0..=10 {
        let half = 300.0 - 28.0 * f64::from(step);
        frames.push(vec![
            Point::new(300.0 - half, 200.0),
            Point::new(300.0 + half, 200.0),
        ]);
    }
    frames.push(vec![]);

    let mut script = TouchScript::new();
    for fingers in &frames {
        if let Some(event) = script.frame(fingers) {
            zoomable.on_pointer_event(&event);
            let t = zoomable.engine().current_transform();
            println!(
                "{:<12} scale {:>5.2}  translate ({:>8.1}, {:>8.1})",
                format!("{:?}", event.action),
                t.scale(),
                t.translation().x,
                t.translation().y
            );
        }
    }

    let surface = zoomable.surface();
    println!(
        "{} transforms applied, {} redraws requested while showing {}",
        surface.transforms().len(),
        surface.redraws(),
        surface.playback().media_uri
    );
}
