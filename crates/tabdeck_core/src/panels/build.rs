//! Simulated build comparison (Turbopack panel).

use crate::constants::{TURBOPACK_BUILD_MS, WEBPACK_BUILD_MS};

/// Which bundler a simulated build stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    Webpack,
    Turbopack,
}

impl BuildKind {
    pub fn label(self) -> &'static str {
        match self {
            BuildKind::Webpack => "Webpack",
            BuildKind::Turbopack => "Turbopack",
        }
    }

    /// Total simulated duration for this bundler.
    pub fn duration_ms(self) -> u64 {
        match self {
            BuildKind::Webpack => WEBPACK_BUILD_MS,
            BuildKind::Turbopack => TURBOPACK_BUILD_MS,
        }
    }
}

/// Progress of one simulated build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildRun {
    pub kind: BuildKind,
    pub elapsed_ms: u64,
}

impl BuildRun {
    /// Completion fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms as f32 / self.kind.duration_ms() as f32).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.kind.duration_ms()
    }
}

/// Format a millisecond count the way the progress readout shows it.
pub fn format_seconds(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// State for the Turbopack panel.
///
/// At most one build runs at a time; both triggers are disabled while one is
/// running. The finished run stays around so the elapsed total remains
/// visible.
#[derive(Debug, Default)]
pub struct BuildPanel {
    run: Option<BuildRun>,
    running: bool,
}

impl BuildPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The current (or last finished) run.
    pub fn run(&self) -> Option<&BuildRun> {
        self.run.as_ref()
    }

    /// Start a build of `kind` from zero elapsed time.
    ///
    /// # Returns
    /// `false` when a build is already running.
    pub fn start(&mut self, kind: BuildKind) -> bool {
        if self.running {
            return false;
        }
        self.run = Some(BuildRun { kind, elapsed_ms: 0 });
        self.running = true;
        true
    }

    /// Apply a progress tick from the timer.
    ///
    /// Ticks for a kind that is no longer running are dropped; this covers a
    /// straggler tick arriving just after completion.
    pub fn on_tick(&mut self, kind: BuildKind, elapsed_ms: u64) {
        if !self.running {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            if run.kind == kind {
                run.elapsed_ms = elapsed_ms.min(kind.duration_ms());
            }
        }
    }

    /// Mark the running build as finished, pinning elapsed to the full duration.
    pub fn on_done(&mut self, kind: BuildKind) {
        if let Some(run) = self.run.as_mut() {
            if run.kind == kind {
                run.elapsed_ms = kind.duration_ms();
                self.running = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_tick_done_lifecycle() {
        let mut panel = BuildPanel::new();
        assert!(panel.start(BuildKind::Turbopack));
        assert!(panel.is_running());
        assert!(!panel.start(BuildKind::Webpack));

        panel.on_tick(BuildKind::Turbopack, 1_500);
        let run = panel.run().expect("run");
        assert_eq!(run.elapsed_ms, 1_500);
        assert!((run.progress() - 0.5).abs() < 1e-6);
        assert!(!run.is_finished());

        panel.on_done(BuildKind::Turbopack);
        assert!(!panel.is_running());
        let run = panel.run().expect("finished run");
        assert_eq!(run.elapsed_ms, TURBOPACK_BUILD_MS);
        assert!(run.is_finished());

        // A new build can start once the previous one finished.
        assert!(panel.start(BuildKind::Webpack));
    }

    #[test]
    fn ticks_for_other_kinds_are_ignored() {
        let mut panel = BuildPanel::new();
        panel.start(BuildKind::Webpack);
        panel.on_tick(BuildKind::Turbopack, 2_000);
        assert_eq!(panel.run().expect("run").elapsed_ms, 0);

        panel.on_done(BuildKind::Turbopack);
        assert!(panel.is_running());
    }

    #[test]
    fn tick_elapsed_is_clamped_to_duration() {
        let mut panel = BuildPanel::new();
        panel.start(BuildKind::Turbopack);
        panel.on_tick(BuildKind::Turbopack, TURBOPACK_BUILD_MS + 500);
        let run = panel.run().expect("run");
        assert_eq!(run.elapsed_ms, TURBOPACK_BUILD_MS);
        assert!((run.progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn durations_match_the_comparison() {
        assert_eq!(BuildKind::Webpack.duration_ms(), 15_000);
        assert_eq!(BuildKind::Turbopack.duration_ms(), 3_000);
        assert_eq!(format_seconds(1_340), "1.3s");
        assert_eq!(format_seconds(15_000), "15.0s");
    }
}
