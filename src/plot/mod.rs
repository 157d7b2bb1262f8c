//! Figure construction against an explicit drawing surface.
//!
//! Figures never render anything themselves; they emit typed series and axis
//! settings onto whatever [`Surface`] the caller passes in.

pub mod figures;
pub mod recorder;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepWhere {
    Pre,
    #[default]
    Post,
    Mid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    #[default]
    Step,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPos {
    #[default]
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesStyle {
    Step(StepWhere),
    Line,
    /// Single marked point, used for binary predictors.
    Marker,
    /// Dashed guide line.
    Reference,
}

impl fmt::Display for SeriesStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesStyle::Step(StepWhere::Pre) => write!(f, "step-pre"),
            SeriesStyle::Step(StepWhere::Post) => write!(f, "step-post"),
            SeriesStyle::Step(StepWhere::Mid) => write!(f, "step-mid"),
            SeriesStyle::Line => write!(f, "line"),
            SeriesStyle::Marker => write!(f, "marker"),
            SeriesStyle::Reference => write!(f, "reference"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CurveStyle {
    pub kind: CurveKind,
    pub step_where: StepWhere,
}

impl CurveStyle {
    pub fn series_style(&self) -> SeriesStyle {
        match self.kind {
            CurveKind::Step => SeriesStyle::Step(self.step_where),
            CurveKind::Line => SeriesStyle::Line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxesSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub legend: LegendPos,
}

pub trait Surface {
    fn draw(&mut self, series: Series);
    fn set_axes(&mut self, axes: AxesSpec);
}

/// `"name (metric = 87.50%)"`, or the two-line variant for legends placed outside.
pub fn legend_label(name: &str, metric: &str, score: f64, legend: LegendPos) -> String {
    match legend {
        LegendPos::Inside => format!("{} ({} = {:.2}%)", name, metric, 100.0 * score),
        LegendPos::Outside => format!("{}\n({} = {:.2}%)", name, metric, 100.0 * score),
    }
}
