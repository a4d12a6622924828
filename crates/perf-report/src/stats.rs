//! Mean and confidence-interval computation
//!
//! One statistic is derived per (scenario, browser, dataset) key from
//! the raw per-pass durations. Small samples get explicit handling:
//! naive variance on fewer than two samples would divide by zero.

use serde::Serialize;

/// Fixed z value for a 95% interval. A normal approximation is used
/// rather than a t-distribution; reproducing historical figures
/// requires this exact constant.
const Z_95: f64 = 1.96;

/// Summary statistic for one sample of durations.
///
/// `mean_ms` and `ci95_ms` are NaN when the sample is empty, which
/// marks "no data" as distinct from zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    /// Arithmetic mean of the sample, in milliseconds.
    pub mean_ms: f64,
    /// Half-width of the 95% confidence interval, in milliseconds.
    /// Zero for a single sample, NaN for an empty one.
    pub ci95_ms: f64,
    /// Number of samples.
    pub n: usize,
}

impl Stat {
    /// Compute mean and 95% CI half-width from raw samples.
    ///
    /// Sample order is irrelevant. Variance uses Bessel's correction
    /// (n − 1 divisor); the half-width is `1.96 · sqrt(var / n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use perf_report::stats::Stat;
    ///
    /// let stat = Stat::from_samples(&[10.0, 20.0]);
    /// assert_eq!(stat.mean_ms, 15.0);
    /// assert!((stat.ci95_ms - 9.8).abs() < 1e-12);
    /// assert_eq!(stat.n, 2);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Stat {
                mean_ms: f64::NAN,
                ci95_ms: f64::NAN,
                n: 0,
            };
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        if n == 1 {
            return Stat {
                mean_ms: mean,
                ci95_ms: 0.0,
                n: 1,
            };
        }

        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let sem = (variance / n as f64).sqrt();
        Stat {
            mean_ms: mean,
            ci95_ms: Z_95 * sem,
            n,
        }
    }

    /// True when the statistic was computed from at least one sample.
    pub fn has_samples(&self) -> bool {
        self.n > 0
    }
}
