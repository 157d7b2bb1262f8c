use crate::report::{SummaryData, format_f64_6, format_percent};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Precision-Recall Curve Averaging Report\n");
    out.push_str("=======================================\n\n");

    out.push_str("1. Inputs\n");
    for path in &data.inputs {
        out.push_str(&format!("Input: {}\n", path));
    }
    out.push_str(&format!("Models: {}\n", data.models.len()));
    out.push_str(&format!(
        "Label column: {}\n\n",
        if data.shared_labels {
            "shared across models"
        } else {
            "per model"
        }
    ));

    out.push_str("2. Per-model metrics\n");
    out.push_str("name\tn\tpositives\tweight\tauPRC\tauROC\n");
    for m in &data.models {
        let auroc = m
            .auroc
            .map(format_f64_6)
            .unwrap_or_else(|| "NA".to_string());
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            m.name,
            m.n,
            m.positives,
            format_f64_6(m.weight),
            format_f64_6(m.auprc),
            auroc
        ));
    }
    out.push('\n');

    out.push_str("3. Average curve\n");
    out.push_str(&format!(
        "Weighted auPRC: {} ({})\n",
        format_f64_6(data.average.auprc),
        format_percent(data.average.auprc)
    ));
    out.push_str(&format!(
        "Area under averaged curve: {}\n",
        format_f64_6(data.average.curve_area)
    ));
    out.push_str(&format!("Recall grid points: {}\n", data.average.grid_points));
    out.push_str(&format!("{}\n\n", area_statement(data.average.discrepancy)));

    out.push_str("4. Figures\n");
    if data.figures.is_empty() {
        out.push_str("No figures recorded.\n");
    }
    for fig in &data.figures {
        out.push_str(&format!(
            "{} ({}): {} series\n",
            fig.title,
            fig.name,
            fig.series.len()
        ));
    }

    out
}

fn area_statement(discrepancy: f64) -> String {
    if discrepancy <= 1e-9 {
        "Weighted auPRC matches the integrated average curve.".to_string()
    } else {
        format!(
            "Weighted auPRC differs from the integrated average curve by {:e}.",
            discrepancy
        )
    }
}
