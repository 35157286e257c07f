use serde::Serialize;

use crate::error::InputValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Good,
    Poor,
    Unknown,
}

impl ImageQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageQuality::Good => "good",
            ImageQuality::Poor => "poor",
            ImageQuality::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    Exposure,
    LowContrast,
    Blurry,
    QualityCheckFailed,
}

impl QualityIssue {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityIssue::Exposure => "exposure",
            QualityIssue::LowContrast => "low_contrast",
            QualityIssue::Blurry => "blurry",
            QualityIssue::QualityCheckFailed => "quality_check_failed",
        }
    }
}

pub fn issue_order() -> &'static [QualityIssue] {
    &[
        QualityIssue::Exposure,
        QualityIssue::LowContrast,
        QualityIssue::Blurry,
        QualityIssue::QualityCheckFailed,
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub quality: ImageQuality,
    pub issues: Vec<QualityIssue>,
    pub mean_intensity: f64,
    pub std_intensity: f64,
    pub blur_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QualityReport {
    pub fn failed(reason: String) -> Self {
        Self {
            quality: ImageQuality::Unknown,
            issues: vec![QualityIssue::QualityCheckFailed],
            mean_intensity: 0.0,
            std_intensity: 0.0,
            blur_score: 0.0,
            error: Some(reason),
        }
    }
}

/// Row-major grayscale grid with intensities in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Result<Self, InputValidationError> {
        if width == 0 || height == 0 || data.is_empty() {
            return Err(InputValidationError::EmptyGrid);
        }
        if width.checked_mul(height) != Some(data.len()) {
            return Err(InputValidationError::GridShape {
                width,
                height,
                len: data.len(),
            });
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(InputValidationError::PixelOutOfRange { index, value });
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputValidationError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(InputValidationError::GridShape {
                    width,
                    height,
                    len: data.len() + row.len(),
                });
            }
            data.extend(row);
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }
}
