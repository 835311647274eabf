//! Gesture task
//!
//! Samples the button every debounce tick, drains queued rotary steps and
//! applies the resulting gestures to the UI. A committed selection becomes
//! the pending outbound status for the remote worker.

use log::{debug, info, warn};
use statusknob_core::input::{
    ButtonSample, Gesture, GestureRecognizer, RotaryTracker, DEBOUNCE_INTERVAL_MS,
};
use statusknob_core::status::OutboundStatus;
use statusknob_hal::{ButtonPin, WallClock};

use crate::context::AppContext;
use crate::scheduler::{CooperativeTask, TaskError};

pub struct GestureTask<'a, B, W> {
    button: B,
    wall: W,
    recognizer: GestureRecognizer,
    rotary: &'a RotaryTracker,
}

impl<'a, B, W> GestureTask<'a, B, W>
where
    B: ButtonPin,
    W: WallClock,
{
    pub fn new(button: B, wall: W, rotary: &'a RotaryTracker) -> Self {
        Self {
            button,
            wall,
            recognizer: GestureRecognizer::new(),
            rotary,
        }
    }

    fn dispatch(&self, ctx: &mut AppContext, gesture: Gesture, now_ms: u32) {
        if gesture.is_rotation() {
            debug!("Gesture: {:?}", gesture);
        } else {
            info!("Gesture: {:?}", gesture);
        }

        let before = ctx.ui.mode();
        let selection = ctx.ui.handle_gesture(gesture, &mut ctx.statuses, now_ms);
        if ctx.ui.mode() != before {
            debug!("Mode {:?} -> {:?}", before, ctx.ui.mode());
        }

        if let Some(selection) = selection {
            if let Some(item) = ctx.statuses.get(selection.index) {
                info!(
                    "Committing \"{}\" for {} minutes",
                    item.display_text(),
                    item.expiry_minutes()
                );
                ctx.bridge.submit(OutboundStatus::from_item(item, &self.wall));
            }
        }
    }
}

impl<'a, B, W> CooperativeTask for GestureTask<'a, B, W>
where
    B: ButtonPin,
    W: WallClock,
{
    fn name(&self) -> &'static str {
        "Gesture"
    }

    fn poll(&mut self, ctx: &mut AppContext, now_ms: u32) -> Result<(), TaskError> {
        let sample = ButtonSample::new(self.button.is_pressed(), now_ms);
        if let Some(gesture) = self.recognizer.sample(sample)? {
            self.dispatch(ctx, gesture, now_ms);
        }

        while let Some(gesture) = self.rotary.try_next() {
            self.dispatch(ctx, gesture, now_ms);
        }

        let dropped = self.rotary.take_dropped();
        if dropped > 0 {
            warn!("Dropped {} rotary steps", dropped);
        }
        Ok(())
    }

    fn next_delay_ms(&self, _ctx: &AppContext) -> u32 {
        DEBOUNCE_INTERVAL_MS
    }
}
