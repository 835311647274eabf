//! Statusknob - Status Display Appliance
//!
//! Turn to browse status presets, click to publish one, double-click to
//! pick how long it lasts, long-press for network details.
//!
//! This binary runs the appliance on a desktop using the host
//! collaborators, with the knob typed on stdin. Board builds swap in their
//! own button, encoder, panel, network and remote client.

use std::env;
use std::process;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use embassy_executor::Executor;
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use log::{error, info};
use static_cell::StaticCell;

use statusknob_core::bridge::{Bridge, WatchdogCounter};
use statusknob_core::input::RotaryTracker;
use statusknob_firmware::config::{config_path, load, CONFIG_ENV};
use statusknob_firmware::context::{AppContext, SharedContext};
use statusknob_firmware::host::{
    AlwaysConnected, ConsoleButton, ConsoleKnob, HostTimeSync, LogRenderer, LoopbackRemote,
    StdDelay, SystemClock,
};
use statusknob_firmware::remote::{RemoteWorker, WorkerReport};
use statusknob_firmware::scheduler::{run_task, EmbassyClock, TaskFailure};
use statusknob_firmware::tasks::{
    heartbeat, ClockSyncTask, DisplayTask, GestureTask, NetworkTask, TelemetryTask,
};
use statusknob_hal::MonotonicClock;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

// Shared with the remote worker thread for the life of the process
static BRIDGE: StaticCell<Bridge> = StaticCell::new();

static CONTEXT: StaticCell<SharedContext> = StaticCell::new();

// Fed by the encoder interrupt on boards, by the console knob here
static ROTARY: RotaryTracker = RotaryTracker::new(0);

// First fatal task failure
static SHUTDOWN: Signal<CriticalSectionRawMutex, TaskFailure> = Signal::new();

#[embassy_executor::task]
async fn gesture_task(ctx: &'static SharedContext, button: ConsoleButton) {
    let task = GestureTask::new(button, SystemClock::new(), &ROTARY);
    SHUTDOWN.signal(run_task(task, ctx).await);
}

#[embassy_executor::task]
async fn display_task(ctx: &'static SharedContext) {
    SHUTDOWN.signal(run_task(DisplayTask::new(LogRenderer::new()), ctx).await);
}

#[embassy_executor::task]
async fn network_task(ctx: &'static SharedContext, link: AlwaysConnected) {
    let task = NetworkTask::new(link, SystemClock::new());
    SHUTDOWN.signal(run_task(task, ctx).await);
}

#[embassy_executor::task]
async fn clock_sync_task(ctx: &'static SharedContext) {
    SHUTDOWN.signal(run_task(ClockSyncTask::new(HostTimeSync), ctx).await);
}

#[embassy_executor::task]
async fn telemetry_task(ctx: &'static SharedContext) {
    SHUTDOWN.signal(run_task(TelemetryTask::new(), ctx).await);
}

/// Keeps the remote worker alive until a task fails, then exits
#[embassy_executor::task]
async fn heartbeat_task(watchdog: &'static WatchdogCounter, worker: JoinHandle<WorkerReport>) {
    let failure = match select(heartbeat(watchdog), SHUTDOWN.wait()).await {
        Either::First(()) => return,
        Either::Second(failure) => failure,
    };
    error!("Shutting down: {}", failure);

    // Without heartbeats the worker drains its budget and exits
    match worker.join() {
        Ok(report) => info!("Remote worker stopped after {} iterations", report.iterations),
        Err(_) => error!("Remote worker panicked"),
    }
    process::exit(1);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Statusknob starting...");

    let path = config_path(env::args_os().nth(1), env::var_os(CONFIG_ENV));
    let config = load(&path).with_context(|| format!("loading {}", path.display()))?;
    info!("Configuration loaded");

    let runtime = config.runtime;
    let bridge: &'static Bridge = BRIDGE.init(Bridge::new(runtime.watchdog_budget));
    let ctx: &'static SharedContext = CONTEXT.init(
        AppContext::new(config.statuses, bridge, &runtime, EmbassyClock.now_ms()).into_shared(),
    );

    let knob = ConsoleKnob::new(&ROTARY);
    let button = knob.button();
    knob.spawn().context("spawning console knob")?;
    info!("Knob on stdin: + / - turn, c click, d double-click, l long press");

    let worker = RemoteWorker::new(
        LoopbackRemote::new("Statusknob User"),
        EmbassyClock,
        StdDelay,
        bridge,
        &runtime,
    )
    .spawn()
    .context("spawning remote worker")?;

    let link = AlwaysConnected::new(config.wifi.ssid.as_str());
    let telemetry = runtime.telemetry;

    let executor = EXECUTOR.init(Executor::new());
    executor.run(move |spawner| {
        // Each task is spawned once, so its single pool slot is free
        spawner.spawn(heartbeat_task(&bridge.watchdog, worker)).unwrap();
        spawner.spawn(gesture_task(ctx, button)).unwrap();
        spawner.spawn(display_task(ctx)).unwrap();
        spawner.spawn(network_task(ctx, link)).unwrap();
        spawner.spawn(clock_sync_task(ctx)).unwrap();
        if telemetry {
            spawner.spawn(telemetry_task(ctx)).unwrap();
        }
        info!("All tasks spawned, firmware running");
    })
}
