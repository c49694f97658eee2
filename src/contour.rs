//! Duration contour: (cumulative time, duration) pairs handed to an optional
//! renderer once the numeric stages are done.

use std::error::Error;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContourPoint {
    /// Offset time of the unit: sum of all durations up to and including it.
    pub time: f64,
    pub duration: f64,
}

pub fn duration_contour(durations: &[f64]) -> Vec<ContourPoint> {
    let mut time = 0.0;
    durations
        .iter()
        .map(|&duration| {
            time += duration;
            ContourPoint { time, duration }
        })
        .collect()
}

pub fn contour_csv(points: &[ContourPoint]) -> String {
    let mut csv = String::from("time,duration\n");
    for p in points {
        csv.push_str(&format!("{:.6},{:.6}\n", p.time, p.duration));
    }
    csv
}

/// Receives the finished contour. Implemented for plain closures so callers
/// can pass a callback.
pub trait ContourSink {
    fn render(&mut self, contour: &[ContourPoint]) -> Result<(), Box<dyn Error>>;
}

impl<F> ContourSink for F
where
    F: FnMut(&[ContourPoint]) -> Result<(), Box<dyn Error>>,
{
    fn render(&mut self, contour: &[ContourPoint]) -> Result<(), Box<dyn Error>> {
        self(contour)
    }
}

/// Keeps every contour it is given.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub renders: Vec<Vec<ContourPoint>>,
}

impl ContourSink for CollectingSink {
    fn render(&mut self, contour: &[ContourPoint]) -> Result<(), Box<dyn Error>> {
        self.renders.push(contour.to_vec());
        Ok(())
    }
}
