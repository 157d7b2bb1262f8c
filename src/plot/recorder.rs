use std::io::{self, Write};

use crate::plot::{AxesSpec, Series, Surface};

/// Surface that keeps every drawn series in memory.
#[derive(Debug, Clone, Default)]
pub struct SeriesRecorder {
    pub series: Vec<Series>,
    pub axes: Option<AxesSpec>,
}

impl Surface for SeriesRecorder {
    fn draw(&mut self, series: Series) {
        self.series.push(series);
    }

    fn set_axes(&mut self, axes: AxesSpec) {
        self.axes = Some(axes);
    }
}

impl SeriesRecorder {
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// One row per point: `figure, series, style, x, y`. No header.
    pub fn write_tsv<W: Write>(&self, figure: &str, w: &mut W) -> io::Result<()> {
        for series in &self.series {
            let label = series.label.replace('\n', "\\n").replace('\t', " ");
            for (x, y) in series.x.iter().zip(&series.y) {
                writeln!(w, "{}\t{}\t{}\t{}\t{}", figure, label, series.style, x, y)?;
            }
        }
        Ok(())
    }
}
