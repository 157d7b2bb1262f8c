use serde::Serialize;

use crate::error::CurveError;

/// What a query outside `[min x, max x]` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainPolicy {
    #[default]
    Strict,
    /// Return the value of the nearest boundary knot.
    Clamp,
}

/// Right-continuous step interpolant: `eval(q)` is the y of the first knot with `x >= q`.
///
/// Knots are stably sorted by x, so among equal x values the first one in input
/// order wins.
#[derive(Debug, Clone)]
pub struct NextInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
    policy: DomainPolicy,
}

impl NextInterpolant {
    pub fn new(x: &[f64], y: &[f64], policy: DomainPolicy) -> Result<Self, CurveError> {
        if x.len() != y.len() {
            return Err(CurveError::mismatch(x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(CurveError::empty());
        }

        let mut idx: Vec<usize> = (0..x.len()).collect();
        idx.sort_by(|&a, &b| x[a].total_cmp(&x[b]));

        Ok(Self {
            x: idx.iter().map(|&i| x[i]).collect(),
            y: idx.iter().map(|&i| y[i]).collect(),
            policy,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn eval(&self, query: f64) -> Result<f64, CurveError> {
        let (min, max) = self.domain();
        if query < min || query > max || query.is_nan() {
            return match self.policy {
                DomainPolicy::Strict => Err(CurveError::OutOfDomain { query, min, max }),
                DomainPolicy::Clamp if query < min => Ok(self.y[0]),
                DomainPolicy::Clamp if query > max => Ok(self.y[self.y.len() - 1]),
                DomainPolicy::Clamp => Err(CurveError::OutOfDomain { query, min, max }),
            };
        }
        let idx = self.x.partition_point(|&k| k < query);
        Ok(self.y[idx])
    }

    pub fn eval_many(&self, queries: &[f64]) -> Result<Vec<f64>, CurveError> {
        queries.iter().map(|&q| self.eval(q)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/curve/interp.rs"]
mod tests;
