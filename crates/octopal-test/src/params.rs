//! Regression test parameters and operations

use crate::error::TestError;
use octopal_core::IndexedImage;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and report failures only (default)
    #[default]
    Compare,
    /// Compare and also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode, and every
/// failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "octree")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters, reading the mode from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, err: TestError) -> bool {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
        false
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("  [{:3}] expected {}, actual {}", self.index, expected, actual);
        }

        if (expected - actual).abs() > delta {
            return self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
        }
        true
    }

    /// Check a boolean condition, recorded as a value comparison.
    pub fn check(&mut self, condition: bool) -> bool {
        self.compare_values(1.0, if condition { 1.0 } else { 0.0 }, 0.0)
    }

    /// Compare two indexed images: sizes, every index, and the colormaps.
    pub fn compare_indexed(&mut self, img1: &IndexedImage, img2: &IndexedImage) -> bool {
        self.index += 1;

        if img1.width() != img2.width() || img1.height() != img2.height() {
            let reason = format!(
                "size mismatch {}x{} vs {}x{}",
                img1.width(),
                img1.height(),
                img2.width(),
                img2.height()
            );
            return self.fail(TestError::IndexedMismatch {
                index: self.index,
                reason,
            });
        }

        for y in 0..img1.height() {
            let (row1, row2) = (img1.row(y), img2.row(y));
            if let Some(x) = row1.iter().zip(row2).position(|(a, b)| a != b) {
                let reason = format!(
                    "index mismatch at ({}, {}): {} vs {}",
                    x, y, row1[x], row2[x]
                );
                return self.fail(TestError::IndexedMismatch {
                    index: self.index,
                    reason,
                });
            }
        }

        if img1.colormap() != img2.colormap() {
            return self.fail(TestError::IndexedMismatch {
                index: self.index,
                reason: "colormap mismatch".to_string(),
            });
        }

        true
    }

    /// Compare two byte strings for exact equality.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            return self.fail(TestError::BytesMismatch {
                index: self.index,
                left: data1.len(),
                right: data2.len(),
            });
        }
        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get the recorded failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
