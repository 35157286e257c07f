use tracing::warn;

use crate::error::DegenerateInputError;
use crate::model::quality::issue_order;
use crate::model::{
    ImageQuality, PixelGrid, QualityIssue, QualityReport, QualityThresholds, round_to,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityStats {
    pub mean: f64,
    pub std: f64,
    pub blur: f64,
}

/// Flags exposure, contrast and blur problems. Never fails: a grid the
/// statistics cannot be computed on comes back as `Unknown`.
pub fn assess(grid: &PixelGrid, thresholds: &QualityThresholds) -> QualityReport {
    let stats = match measure(grid) {
        Ok(stats) => stats,
        Err(err) => {
            warn!(error = %err, "image quality check failed");
            return QualityReport::failed(err.to_string());
        }
    };

    let issues = collect_issues(&stats, thresholds);
    let quality = if issues.is_empty() {
        ImageQuality::Good
    } else {
        ImageQuality::Poor
    };

    QualityReport {
        quality,
        issues,
        mean_intensity: round_to(stats.mean, 3),
        std_intensity: round_to(stats.std, 3),
        blur_score: round_to(stats.blur, 6),
        error: None,
    }
}

/// Statistics over the min-max stretched grid.
pub fn measure(grid: &PixelGrid) -> Result<QualityStats, DegenerateInputError> {
    let (width, height) = (grid.width(), grid.height());
    if width < 2 || height < 2 {
        return Err(DegenerateInputError::TooSmall { width, height });
    }

    let data = grid.data();
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= f64::EPSILON {
        return Err(DegenerateInputError::ZeroRange);
    }
    let stretched = data.iter().map(|v| (v - min) / range).collect::<Vec<_>>();
    let at = |row: usize, col: usize| stretched[row * width + col];

    let (mean, var) = mean_var(stretched.iter().copied());

    let vertical = (0..height - 1)
        .flat_map(|r| (0..width).map(move |c| (r, c)))
        .map(|(r, c)| at(r + 1, c) - at(r, c));
    let horizontal = (0..height)
        .flat_map(|r| (0..width - 1).map(move |c| (r, c)))
        .map(|(r, c)| at(r, c + 1) - at(r, c));
    let blur = mean_var(vertical).1 + mean_var(horizontal).1;

    Ok(QualityStats {
        mean,
        std: var.sqrt(),
        blur,
    })
}

fn collect_issues(stats: &QualityStats, thresholds: &QualityThresholds) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    if stats.mean < thresholds.exposure_min || stats.mean > thresholds.exposure_max {
        issues.push(QualityIssue::Exposure);
    }
    if stats.std < thresholds.min_std {
        issues.push(QualityIssue::LowContrast);
    }
    if stats.blur < thresholds.min_blur {
        issues.push(QualityIssue::Blurry);
    }

    // stable ordering
    issue_order()
        .iter()
        .copied()
        .filter(|issue| issues.contains(issue))
        .collect()
}

/// Population mean and variance.
fn mean_var(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let mut n = 0usize;
    let mut sum = 0.0;
    for v in values.clone() {
        sum += v;
        n += 1;
    }
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = sum / n as f64;
    let var = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    (mean, var)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_quality.rs"]
mod tests;
