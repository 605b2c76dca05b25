use std::{
    fmt,
    time::{Duration, Instant},
};

use toruslife::Dimensions;

/// Periodic generations-per-second report
pub struct Throughput {
    generation: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl Throughput {
    const REPORT_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, generation: u64, alive: usize) {
        self.generation = generation;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= Self::REPORT_INTERVAL
    }

    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{}, alive:{}",
            gens_per_sec, self.generation, self.alive
        )
    }
}

/// Timing summary of a headless fixed-length run
pub struct BenchReport {
    pub steps: u64,
    pub dims: Dimensions,
    pub threads: usize,
    pub elapsed: Duration,
}
impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed.as_secs_f64() * 1000.0;
        let steps = self.steps.max(1) as f64;
        let cells = steps * self.dims.area() as f64;
        write!(
            f,
            "steps={} width={} height={} threads={} time_ms={:.3} per_step_ms={:.6} per_cell_us={:.6}",
            self.steps,
            self.dims.width(),
            self.dims.height(),
            self.threads,
            ms,
            ms / steps,
            ms * 1000.0 / cells
        )
    }
}
