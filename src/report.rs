use std::fmt;

/// Pass/seen tallies from classifying a labeled test corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReport {
    passed: Vec<usize>,
    seen: Vec<usize>,
}

impl ClassificationReport {
    pub fn new(num_classes: usize) -> Self {
        ClassificationReport {
            passed: vec![0; num_classes],
            seen: vec![0; num_classes],
        }
    }

    pub fn record(&mut self, expected: usize, predicted: Option<usize>) {
        if expected >= self.seen.len() {
            return;
        }
        self.seen[expected] += 1;
        if predicted == Some(expected) {
            self.passed[expected] += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.seen.iter().sum()
    }

    pub fn passed(&self) -> usize {
        self.passed.iter().sum()
    }

    /// Fraction of all samples classified correctly; NaN for an empty corpus.
    pub fn overall(&self) -> f64 {
        ratio(self.passed(), self.total())
    }

    /// Fraction of one digit's samples classified correctly; NaN if the digit never appeared.
    pub fn digit_accuracy(&self, digit: usize) -> f64 {
        match (self.passed.get(digit), self.seen.get(digit)) {
            (Some(&passed), Some(&seen)) => ratio(passed, seen),
            _ => f64::NAN,
        }
    }

    pub fn per_digit(&self) -> Vec<f64> {
        (0..self.seen.len()).map(|d| self.digit_accuracy(d)).collect()
    }

    pub fn seen(&self, digit: usize) -> usize {
        self.seen.get(digit).copied().unwrap_or(0)
    }
}

fn ratio(passed: usize, seen: usize) -> f64 {
    if seen == 0 {
        f64::NAN
    } else {
        passed as f64 / seen as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy of classification: {}", self.overall())?;
        for (digit, accuracy) in self.per_digit().iter().enumerate() {
            writeln!(
                f,
                "Accuracy of {digit}: {accuracy} ({} samples)",
                self.seen[digit]
            )?;
        }
        Ok(())
    }
}
