//! Per-generation statistics rows, and the single-run / sweep-mode
//! accumulators that print or write them as CSV.

use std::io;

pub const CSV_HEADER: &str = "gen,evals,repeated,bestfit,worstfit,meanfit,maxsize,minsize,meansize,betterCxChild,worseCxChild";

#[derive(Clone, Copy, Debug)]
pub struct StatsRow {
    pub gen: usize,
    pub evals: usize,
    pub repeated: usize,
    pub best_fit: f64,
    pub worst_fit: f64,
    pub mean_fit: f64,
    pub max_size: usize,
    pub min_size: usize,
    pub mean_size: f64,
    pub better_children: f64,
    pub worse_children: f64,
}

impl StatsRow {
    fn to_csv_fields(&self) -> (usize, usize, usize, f64, f64, f64, usize, usize, f64, f64, f64) {
        (
            self.gen,
            self.evals,
            self.repeated,
            self.best_fit,
            self.worst_fit,
            self.mean_fit,
            self.max_size,
            self.min_size,
            self.mean_size,
            self.better_children,
            self.worse_children,
        )
    }

    pub fn to_csv_row(&self) -> String {
        let (gen, evals, repeated, best, worst, mean, maxs, mins, means, better, worse) = self.to_csv_fields();
        format!(
            "{},{},{},{:.4},{:.4},{:.4},{},{},{:.4},{},{}",
            gen, evals, repeated, best, worst, mean, maxs, mins, means, better as i64, worse as i64
        )
    }
}

/// Collects statistics rows either from a single run, or across a 30-seed
/// sweep for later per-generation averaging.
#[derive(Default)]
pub struct StatsAccumulator {
    runs: Vec<Vec<StatsRow>>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        return StatsAccumulator { runs: Vec::new() };
    }

    pub fn push_run(&mut self, rows: Vec<StatsRow>) {
        self.runs.push(rows);
    }

    /// One averaged row per generation index: every column except `gen`
    /// is the arithmetic mean across runs at that generation; `gen`
    /// becomes the row index itself.
    pub fn averaged(&self) -> Vec<StatsRow> {
        if self.runs.is_empty() {
            return Vec::new();
        }
        let gens = self.runs[0].len();
        let n_runs = self.runs.len() as f64;
        let mut out = Vec::with_capacity(gens);
        for g in 0..gens {
            let mut evals = 0.0;
            let mut repeated = 0.0;
            let mut best_fit = 0.0;
            let mut worst_fit = 0.0;
            let mut mean_fit = 0.0;
            let mut max_size = 0.0;
            let mut min_size = 0.0;
            let mut mean_size = 0.0;
            let mut better_children = 0.0;
            let mut worse_children = 0.0;
            for run in &self.runs {
                let row = &run[g];
                evals += row.evals as f64;
                repeated += row.repeated as f64;
                best_fit += row.best_fit;
                worst_fit += row.worst_fit;
                mean_fit += row.mean_fit;
                max_size += row.max_size as f64;
                min_size += row.min_size as f64;
                mean_size += row.mean_size;
                better_children += row.better_children;
                worse_children += row.worse_children;
            }
            out.push(StatsRow {
                gen: g,
                evals: (evals / n_runs).round() as usize,
                repeated: (repeated / n_runs).round() as usize,
                best_fit: best_fit / n_runs,
                worst_fit: worst_fit / n_runs,
                mean_fit: mean_fit / n_runs,
                max_size: (max_size / n_runs).round() as usize,
                min_size: (min_size / n_runs).round() as usize,
                mean_size: mean_size / n_runs,
                better_children: better_children / n_runs,
                worse_children: worse_children / n_runs,
            });
        }
        return out;
    }

    pub fn write_csv<W: io::Write>(rows: &[StatsRow], writer: W) -> io::Result<()> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        for field in CSV_HEADER.split(',') {
            writer.write_field(field)?;
        }
        writer.write_record(None::<&[u8]>)?;
        for row in rows {
            writer.write_record(row.to_csv_row().split(','))?;
        }
        writer.flush()?;
        return Ok(());
    }
}
