// I am not using indicatif for this, because it cannot output progress to non-tty
use {
    std::time::{Duration, Instant},
    tracing::info,
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String) -> Self {
        Self {
            message,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if now - self.reported_at >= REPORT_INTERVAL {
            self.reported_at = now;
            self.report(now);
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        self.report(Instant::now());
    }

    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }

    fn report(&self, now: Instant) {
        let elapsed = (now - self.started_at).as_secs_f32();
        if elapsed > 0.0 {
            let rate = (self.total_processed as f32) / elapsed;
            info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, rate);
        } else {
            info!("{}: {} total", self.message, self.total_processed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_updates_without_reporting_early() {
        let mut progress = Progress::new("classifying comments".to_owned());

        assert!(!progress.update());
        assert!(!progress.update());
        assert_eq!(progress.total_processed(), 2);
    }
}
