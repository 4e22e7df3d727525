use crate::renderer::Renderer;
use dragspin_input::{DragRotation, PointerEvent};
use dragspin_scene::Scene;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cloneable handle that ends a [`FrameLoop`].
///
/// May be triggered from any thread; the loop notices before its next frame.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl Default for StopHandle {
    fn default() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Source of frame timing and of the pointer input gathered between frames.
pub trait FrameScheduler {
    /// Wait until the next frame is due, appending any pointer events that
    /// arrived since the previous frame to `input` in arrival order.
    ///
    /// Returns `false` when no further frames will be produced.
    fn next_frame(&mut self, input: &mut Vec<PointerEvent>) -> bool;
}

/// Produces a fixed number of frames, optionally paced at a fixed interval,
/// and replays scripted pointer events at given frame indices.
#[derive(Debug)]
pub struct FixedScheduler {
    remaining: u64,
    frame: u64,
    interval: Option<Duration>,
    deadline: Option<Instant>,
    script: VecDeque<(u64, PointerEvent)>,
}

impl FixedScheduler {
    /// Run `frames` frames as fast as possible.
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            frame: 0,
            interval: None,
            deadline: None,
            script: VecDeque::new(),
        }
    }

    /// Pace frames at `fps` frames per second. Zero disables pacing.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.interval = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        self
    }

    /// Deliver `event` just before frame `frame` (0-based).
    ///
    /// Events for the same frame are delivered in the order they were added.
    pub fn with_event(mut self, frame: u64, event: PointerEvent) -> Self {
        let at = self.script.partition_point(|(f, _)| *f <= frame);
        self.script.insert(at, (frame, event));
        self
    }

    /// Frames still to be produced.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };
        let now = Instant::now();
        let deadline = self.deadline.map_or(now, |d| d + interval);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.deadline = Some(deadline.max(now));
    }
}

impl FrameScheduler for FixedScheduler {
    fn next_frame(&mut self, input: &mut Vec<PointerEvent>) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.wait();
        while self.script.front().is_some_and(|(f, _)| *f <= self.frame) {
            if let Some((_, event)) = self.script.pop_front() {
                input.push(event);
            }
        }
        self.remaining -= 1;
        self.frame += 1;
        true
    }
}

/// Drives the drag controller and a renderer once per frame.
#[derive(Debug, Default)]
pub struct FrameLoop {
    controller: DragRotation,
    stop: StopHandle,
    frames: u64,
}

impl FrameLoop {
    pub fn new(controller: DragRotation) -> Self {
        Self {
            controller,
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    pub fn controller(&self) -> &DragRotation {
        &self.controller
    }

    /// Forward a pointer event to the controller.
    pub fn handle(&mut self, event: PointerEvent) {
        self.controller.handle(event);
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        self.stop.is_running()
    }

    /// Frames produced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tick the controller against the cube's orientation, then draw.
    pub fn frame<R: Renderer>(&mut self, scene: &mut Scene, renderer: &mut R) -> R::Output {
        let _span = tracing::trace_span!("frame", n = self.frames).entered();
        self.controller.tick(scene.orientation_mut());
        self.frames += 1;
        renderer.render(scene)
    }

    /// Run frames until stopped or until `scheduler` runs dry. Each frame's
    /// output is passed to `on_frame` with the frame number (1-based).
    ///
    /// Returns the number of frames produced by this call.
    pub fn run<R, S, F>(
        &mut self,
        scene: &mut Scene,
        renderer: &mut R,
        scheduler: &mut S,
        mut on_frame: F,
    ) -> u64
    where
        R: Renderer,
        S: FrameScheduler,
        F: FnMut(u64, R::Output),
    {
        let start = self.frames;
        let mut pending = Vec::new();
        tracing::debug!(start, "frame loop started");

        while self.is_running() && scheduler.next_frame(&mut pending) {
            for event in pending.drain(..) {
                self.controller.handle(event);
            }
            let output = self.frame(scene, renderer);
            on_frame(self.frames, output);
        }

        let produced = self.frames - start;
        tracing::debug!(produced, stopped = !self.is_running(), "frame loop finished");
        produced
    }
}
