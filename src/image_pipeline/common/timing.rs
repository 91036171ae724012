use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Ordered per-step durations of one filter run.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    totals: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.totals.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    /// Times `f` and records it under `name`.
    pub fn record<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let value = f();
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
        value
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.totals.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            debug!(
                "{:<20} {:>10.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        debug!("{:<20} {:>10.3}ms", "total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}
