use serde::Serialize;
use std::fmt;

use crate::timing::intervals::Interval;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectTiming {
    /// 1-based position in the sequence.
    pub object: usize,
    pub unhide: f64,
    pub hide: f64,
}

/// Results of one calculation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total: usize,
    pub objects: Vec<ObjectTiming>,
}

impl Report {
    pub fn new(intervals: &[Interval]) -> Self {
        let objects = intervals
            .iter()
            .enumerate()
            .map(|(i, interval)| ObjectTiming {
                object: i + 1,
                unhide: interval.start,
                hide: interval.end,
            })
            .collect();
        Self {
            total: intervals.len(),
            objects,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Objects: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Timings:")?;
        for timing in &self.objects {
            writeln!(
                f,
                "Object {}: Unhide at {:.2}s, Hide at {:.2}s",
                timing.object, timing.unhide, timing.hide
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_with_two_decimals() {
        let report = Report::new(&[Interval::new(0.0, 0.453125), Interval::new(0.1, 1.0)]);
        let expected = "Total Objects: 2\n\nTimings:\n\
                        Object 1: Unhide at 0.00s, Hide at 0.45s\n\
                        Object 2: Unhide at 0.10s, Hide at 1.00s\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn empty_report_still_has_header() {
        let report = Report::new(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.to_string(), "Total Objects: 0\n\nTimings:\n");
    }

    #[test]
    fn json_keeps_order_and_indices() {
        let report = Report::new(&[Interval::new(0.0, 0.5), Interval::new(0.5, 1.0)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["objects"][1]["object"], 2);
        assert_eq!(value["objects"][1]["unhide"], 0.5);
    }
}
