//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match self.format_result(result) {
            Ok(line) => println!("{line}"),
            Err(line) => eprintln!("{line}"),
        }
    }

    /// The line for `result`: `Ok` for an answer, `Err` for a failure.
    fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        let prefix = if self.quiet {
            format!("Solution {}", result.part)
        } else {
            format!("{}/{:02} Solution {}", result.year, result.day, result.part)
        };

        match &result.answer {
            Ok(answer) if self.quiet => Ok(format!("{prefix}: {answer}")),
            Ok(answer) => {
                let parse = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                Ok(format!(
                    "{prefix}: {answer} ({parse}solve: {})",
                    format_duration(result.solve_duration)
                ))
            }
            Err(e) => Err(format!("{prefix}: error: {e}")),
        }
    }

    /// Totals and wall-clock time; nothing in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{line}");
        }
    }
}

fn summary_lines(results: &[SolverResult], elapsed: std::time::Duration) -> Vec<String> {
    let solved: Vec<&SolverResult> = results.iter().filter(|r| r.answer.is_ok()).collect();
    let failures = results.len() - solved.len();

    let total_parse: TimeDelta = solved.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve: TimeDelta = solved.iter().map(|r| r.solve_duration).sum();
    let elapsed = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::MAX);

    let mut lines = vec![
        String::new(),
        "--- Summary ---".to_string(),
        format!("Solvers: {} solved, {} failed", solved.len(), failures),
        format!("Total parse time: {}", format_duration(total_parse)),
        format!("Total solve time: {}", format_duration(total_solve)),
        format!("Elapsed wall-clock time: {}", format_duration(elapsed)),
    ];
    if let (Some(compute), Some(wall)) = (
        (total_parse + total_solve).num_microseconds(),
        elapsed.num_microseconds(),
    ) && wall > 0
    {
        lines.push(format!("Speedup factor: {:.2}x", compute as f64 / wall as f64));
    }
    lines
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};
    use std::time::Duration;

    fn solved(day: u8, part: u8, answer: &str) -> SolverResult {
        SolverResult {
            year: 2023,
            day,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(3),
        }
    }

    fn failed(day: u8, part: u8) -> SolverResult {
        let error: ArcExecutorError = ExecutorError::ThreadPool("boom".to_string()).into();
        SolverResult {
            year: 2023,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_quiet_line_matches_script_output() {
        let formatter = OutputFormatter::new(true);
        assert_eq!(
            formatter.format_result(&solved(5, 1, "35")),
            Ok("Solution 1: 35".to_string())
        );
        assert!(formatter.format_result(&failed(5, 2)).is_err());
    }

    #[test]
    fn test_full_line_has_timings() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_result(&solved(5, 1, "35")),
            Ok("2023/05 Solution 1: 35 (parse: 12µs, solve: 3µs)".to_string())
        );
        assert_eq!(
            formatter.format_result(&failed(16, 2)),
            Err("2023/16 Solution 2: error: thread pool creation failed: boom".to_string())
        );
    }

    #[test]
    fn test_summary_counts_and_speedup() {
        let results = vec![solved(1, 1, "a"), solved(1, 2, "b"), failed(2, 1)];
        let lines = summary_lines(&results, Duration::from_micros(10));
        assert_eq!(lines[2], "Solvers: 2 solved, 1 failed");
        assert_eq!(lines[3], "Total parse time: 24µs");
        assert_eq!(lines[4], "Total solve time: 6µs");
        assert_eq!(lines[6], "Speedup factor: 3.00x");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
