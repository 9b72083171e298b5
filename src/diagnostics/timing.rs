use serde::Serialize;
use std::time::Instant;

/// Wall time spent in one render stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of a render, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

/// Lap timer producing a [`TimingBreakdown`].
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
    lap: Instant,
    stages: Vec<StageTiming>,
}

impl StageClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            lap: now,
            stages: Vec::new(),
        }
    }

    /// Close the current stage under `label` and start the next one.
    pub fn lap(&mut self, label: &str) {
        let now = Instant::now();
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms: millis_between(self.lap, now),
        });
        self.lap = now;
    }

    pub fn finish(self) -> TimingBreakdown {
        TimingBreakdown {
            total_ms: millis_between(self.started, Instant::now()),
            stages: self.stages,
        }
    }
}

fn millis_between(from: Instant, to: Instant) -> f64 {
    to.duration_since(from).as_secs_f64() * 1000.0
}
