use std::time::{Duration, Instant};

/// Play statistics for one terminal session, across restarts.
pub struct SessionMetrics {
    run_started: Instant,
    elapsed: Duration,
    games_started: u32,
    wins: u32,
    fastest_win: Option<Duration>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            elapsed: Duration::ZERO,
            games_started: 1,
            wins: 0,
            fastest_win: None,
        }
    }

    /// Refresh the elapsed clock for the current run. The mode calls this
    /// once per frame while the game is running; pausing or winning freezes
    /// the displayed time by not calling it.
    pub fn update(&mut self) {
        self.elapsed = self.run_started.elapsed();
    }

    pub fn on_restart(&mut self) {
        self.run_started = Instant::now();
        self.elapsed = Duration::ZERO;
        self.games_started += 1;
    }

    pub fn on_win(&mut self) {
        self.wins += 1;
        let time = self.elapsed;
        if self.fastest_win.map_or(true, |best| time < best) {
            self.fastest_win = Some(time);
        }
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn fastest_win(&self) -> Option<Duration> {
        self.fastest_win
    }

    pub fn format_elapsed(&self) -> String {
        format_mm_ss(self.elapsed)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_mm_ss(d: Duration) -> String {
    let total_secs = d.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
