//! Display task
//!
//! Pulls the latest fetched status into the UI, handles screen sleep, and
//! repaints dirty regions. Runs every 10 ms while the screen is on and
//! every 250 ms while it is off.

use log::{debug, info};
use statusknob_core::state::ScreenPower;
use statusknob_core::timing::IntervalGate;
use statusknob_core::traits::{Frame, Renderer};

use crate::context::AppContext;
use crate::scheduler::{CooperativeTask, TaskError};

/// Repaint cadence while the screen is on
pub const ACTIVE_INTERVAL_MS: u32 = 10;

/// Poll cadence while the screen is off
pub const IDLE_INTERVAL_MS: u32 = 250;

/// Cadence of the sleep countdown log line
const SLEEP_REMINDER_MS: u32 = 5 * 60 * 1000;

pub struct DisplayTask<R> {
    renderer: R,
    panel_asleep: bool,
    sleep_reminder: IntervalGate,
}

impl<R: Renderer> DisplayTask<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            panel_asleep: false,
            sleep_reminder: IntervalGate::new(SLEEP_REMINDER_MS),
        }
    }

    #[cfg(test)]
    fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: Renderer> CooperativeTask for DisplayTask<R> {
    fn name(&self) -> &'static str {
        "Display"
    }

    fn poll(&mut self, ctx: &mut AppContext, now_ms: u32) -> Result<(), TaskError> {
        if let Some(top) = ctx.bridge.fetched.take() {
            ctx.ui.set_top_status(top);
        }

        match ctx.ui.update_power(now_ms) {
            Some(ScreenPower::Slept) => info!("Screen off after inactivity"),
            Some(ScreenPower::Woke) => info!("Screen on"),
            None => {}
        }

        if !ctx.ui.is_screen_on() {
            if !self.panel_asleep {
                self.renderer.set_sleep(true)?;
                self.panel_asleep = true;
            }
            return Ok(());
        }

        if self.panel_asleep {
            self.renderer.set_sleep(false)?;
            self.panel_asleep = false;
        }

        if self.sleep_reminder.has_passed(now_ms) {
            debug!("Screen sleep in {} minutes", ctx.ui.minutes_until_sleep(now_ms));
        }

        if ctx.ui.needs_repaint() {
            let frame = Frame {
                ui: &ctx.ui,
                list: &ctx.statuses,
                link: &ctx.link,
                regions: ctx.ui.dirty(),
            };
            self.renderer.render(&frame)?;
            ctx.ui.mark_clean();
        }
        Ok(())
    }

    fn next_delay_ms(&self, ctx: &AppContext) -> u32 {
        if ctx.ui.is_screen_on() {
            ACTIVE_INTERVAL_MS
        } else {
            IDLE_INTERVAL_MS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusknob_core::input::Gesture;
    use statusknob_core::state::{DirtyRegions, TopStatus};
    use statusknob_core::traits::RenderError;

    use crate::tasks::test_support::context;

    #[derive(Default)]
    struct Recording {
        regions: Vec<DirtyRegions>,
        sleeps: Vec<bool>,
        fail: bool,
    }

    impl Renderer for Recording {
        fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::Bus);
            }
            self.regions.push(frame.regions);
            Ok(())
        }

        fn set_sleep(&mut self, asleep: bool) -> Result<(), RenderError> {
            self.sleeps.push(asleep);
            Ok(())
        }
    }

    #[test]
    fn test_first_poll_paints_everything_once() {
        let mut task = DisplayTask::new(Recording::default());
        let mut ctx = context(4);
        task.poll(&mut ctx, 0).unwrap();
        task.poll(&mut ctx, 10).unwrap();
        assert_eq!(task.renderer().regions, [DirtyRegions::ALL]);
    }

    #[test]
    fn test_fetched_status_repaints_top_only() {
        let mut task = DisplayTask::new(Recording::default());
        let mut ctx = context(4);
        task.poll(&mut ctx, 0).unwrap();

        ctx.bridge.publish_top_status(TopStatus::new("Ada", Some("Lunch")));
        task.poll(&mut ctx, 10).unwrap();
        assert_eq!(ctx.ui.top_status().name(), "Ada");
        assert_eq!(
            task.renderer().regions[1],
            DirtyRegions {
                top: true,
                bottom: false,
                body: false
            }
        );
    }

    #[test]
    fn test_sleep_and_wake() {
        let mut task = DisplayTask::new(Recording::default());
        let mut ctx = context(4);
        let off_ms = ctx.ui.minutes_until_sleep(0) * 60_000;

        task.poll(&mut ctx, 0).unwrap();
        task.poll(&mut ctx, off_ms).unwrap();
        task.poll(&mut ctx, off_ms + 250).unwrap();
        assert!(!ctx.ui.is_screen_on());
        assert_eq!(task.next_delay_ms(&ctx), IDLE_INTERVAL_MS);
        assert_eq!(task.renderer().sleeps, [true]);

        ctx.ui
            .handle_gesture(Gesture::Click, &mut ctx.statuses, off_ms + 300);
        task.poll(&mut ctx, off_ms + 500).unwrap();
        assert!(ctx.ui.is_screen_on());
        assert_eq!(task.renderer().sleeps, [true, false]);
        assert_eq!(task.renderer().regions.last(), Some(&DirtyRegions::ALL));
        assert_eq!(task.next_delay_ms(&ctx), ACTIVE_INTERVAL_MS);
    }

    #[test]
    fn test_render_failure_keeps_regions_dirty() {
        let mut task = DisplayTask::new(Recording {
            fail: true,
            ..Recording::default()
        });
        let mut ctx = context(4);
        assert!(matches!(
            task.poll(&mut ctx, 0),
            Err(TaskError::Recoverable(_))
        ));
        assert!(ctx.ui.needs_repaint());
    }
}
