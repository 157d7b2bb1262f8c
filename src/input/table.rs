use std::io::BufRead;
use std::path::Path;

use crate::input::gz::{open_maybe_gz, table_stem};
use crate::input::{InputError, PredictionSet};

/// Reads one prediction table.
///
/// Long form is `label<TAB>score`; wide form adds score columns, one per model,
/// all sharing the first (label) column. A header row is recognised by a first
/// field that is not a label and at least one non-numeric score field; its
/// remaining fields name the models.
pub fn parse_prediction_table(path: &Path) -> Result<Vec<PredictionSet>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let path_str = path.display().to_string();
    let mut buf = String::new();
    let mut line_no = 0usize;

    let mut names: Option<Vec<String>> = None;
    let mut width: Option<usize> = None;
    let mut labels: Vec<bool> = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').map(str::trim).collect();

        if width.is_none() {
            if cols.len() < 2 {
                return Err(InputError::Parse {
                    path: path_str,
                    line: line_no,
                    msg: "expected at least 2 columns (label, score)".to_string(),
                });
            }
            width = Some(cols.len());
            columns = vec![Vec::new(); cols.len() - 1];
            if is_header(&cols) {
                names = Some(cols[1..].iter().map(|s| s.to_string()).collect());
                continue;
            }
        }

        let expected = width.unwrap_or(cols.len());
        if cols.len() != expected {
            return Err(InputError::Parse {
                path: path_str,
                line: line_no,
                msg: format!("expected {} columns, found {}", expected, cols.len()),
            });
        }

        let label = parse_label(cols[0]).ok_or_else(|| InputError::NonBinaryLabel {
            path: path_str.clone(),
            line: line_no,
            value: cols[0].to_string(),
        })?;
        labels.push(label);

        for (j, raw) in cols[1..].iter().enumerate() {
            let score = parse_score(raw).ok_or_else(|| InputError::Parse {
                path: path_str.clone(),
                line: line_no,
                msg: format!("invalid score {:?}", raw),
            })?;
            columns[j].push(score);
        }
    }

    if labels.is_empty() {
        return Err(InputError::Parse {
            path: path_str,
            line: line_no,
            msg: "prediction table has no data rows".to_string(),
        });
    }

    let stem = table_stem(path);
    let n_models = columns.len();
    let names = names.unwrap_or_else(|| {
        if n_models == 1 {
            vec![stem.clone()]
        } else {
            (1..=n_models).map(|j| format!("{stem}_{j}")).collect()
        }
    });

    tracing::info!(
        rows = labels.len(),
        models = n_models,
        path = %path_str,
        "loaded prediction table"
    );

    Ok(names
        .into_iter()
        .zip(columns)
        .map(|(name, scores)| PredictionSet::new(name, scores, labels.clone()))
        .collect())
}

pub fn parse_label(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        other => match other.parse::<f64>() {
            Ok(v) if v == 1.0 => Some(true),
            Ok(v) if v == 0.0 => Some(false),
            _ => None,
        },
    }
}

// A first row with numeric scores is data, so a bad label there is reported.
fn is_header(cols: &[&str]) -> bool {
    parse_label(cols[0]).is_none() && cols[1..].iter().any(|raw| raw.parse::<f64>().is_err())
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
