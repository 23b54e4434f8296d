//! Lane run report rendering.

use lanebridge_runner::RunReport;

use super::output::{Output, Report};

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.error {
            None => out.preformatted(&format!(
                "✓ lane '{}' finished in {:.1}s",
                self.lane,
                self.elapsed.as_secs_f64()
            )),
            Some(error) => out.error(&format!(
                "lane '{}' failed after {} minute(s): {}",
                self.lane, self.elapsed_minutes, error
            )),
        }
    }
}
