//! Mock analytics for the statistical-arbitrage panel.
//!
//! Three series are regenerated from an unseeded random source on every
//! render: a z-score spread series, a volatility series, and a
//! percentage-spread series from two independent random walks. None of these
//! are backed by a real model; only the stated formulas and ranges apply, and
//! the displayed "current" values read the last generated element.
//!
//! The uniform sample source sits behind a trait so tests can substitute a
//! deterministic fixture.

/// Number of z-score points per generation.
pub const Z_SCORE_POINTS: usize = 50;
/// Fixed spread mean used in the z-score formula.
pub const SPREAD_MEAN: f64 = 0.005;
/// Fixed spread standard deviation used in the z-score formula.
pub const SPREAD_STD: f64 = 0.003;
/// Number of volatility points per generation.
pub const VOLATILITY_POINTS: usize = 30;
/// Number of percentage-spread points per generation.
pub const PERCENTAGE_POINTS: usize = 100;
/// Starting prices for the two random-walk tracks.
pub const WALK_START: (f64, f64) = (1.0500, 1.2800);

/// A source of uniform samples in [0, 1).
pub trait SampleSource {
    fn next_unit(&mut self) -> f64;
}

/// Production source: the unseeded thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl SampleSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        rand::random()
    }
}

/// Deterministic source cycling over a fixed sample list. Test fixture.
#[derive(Debug, Clone)]
pub struct FixedSource {
    samples: Vec<f64>,
    index: usize,
}

impl FixedSource {
    pub fn new(samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty());
        Self { samples, index: 0 }
    }
}

impl SampleSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        let sample = self.samples[self.index % self.samples.len()];
        self.index += 1;
        sample
    }
}

/// Trading signal derived from a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// SELL above +2, BUY below -2, HOLD in between.
    pub fn classify(z_score: f64) -> Self {
        if z_score > 2.0 {
            Signal::Sell
        } else if z_score < -2.0 {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// One point of the z-score series.
#[derive(Debug, Clone, Copy)]
pub struct ZScorePoint {
    pub spread: f64,
    pub z_score: f64,
    pub signal: Signal,
}

/// One point of the volatility series. Forecast is independent of the
/// volatility value; there is no model relating them.
#[derive(Debug, Clone, Copy)]
pub struct VolatilityPoint {
    pub volatility: f64,
    pub forecast: f64,
}

/// One point of the percentage-spread series.
#[derive(Debug, Clone, Copy)]
pub struct SpreadPoint {
    pub pair1: f64,
    pub pair2: f64,
    pub percentage: f64,
}

/// Generate the z-score series: spread uniform in [-0.01, 0.01),
/// z = (spread - mean) / std.
pub fn z_score_series(source: &mut impl SampleSource) -> Vec<ZScorePoint> {
    (0..Z_SCORE_POINTS)
        .map(|_| {
            let spread = source.next_unit() * 0.02 - 0.01;
            let z_score = (spread - SPREAD_MEAN) / SPREAD_STD;
            ZScorePoint {
                spread,
                z_score,
                signal: Signal::classify(z_score),
            }
        })
        .collect()
}

/// Generate the volatility series: volatility in [0.005, 0.025),
/// forecast in [0.003, 0.028).
pub fn volatility_series(source: &mut impl SampleSource) -> Vec<VolatilityPoint> {
    (0..VOLATILITY_POINTS)
        .map(|_| VolatilityPoint {
            volatility: source.next_unit() * 0.02 + 0.005,
            forecast: source.next_unit() * 0.025 + 0.003,
        })
        .collect()
}

/// Generate the percentage-spread series from two independent random walks,
/// step uniform in [-0.005, 0.005); percentage = (p1 / p2 - 1) * 100.
pub fn percentage_series(source: &mut impl SampleSource) -> Vec<SpreadPoint> {
    let (mut pair1, mut pair2) = WALK_START;
    (0..PERCENTAGE_POINTS)
        .map(|_| {
            pair1 += (source.next_unit() - 0.5) * 0.01;
            pair2 += (source.next_unit() - 0.5) * 0.01;
            SpreadPoint {
                pair1,
                pair2,
                percentage: (pair1 / pair2 - 1.0) * 100.0,
            }
        })
        .collect()
}

/// One full regeneration of the stat-arb panel's datasets.
#[derive(Debug, Clone)]
pub struct StatArbSnapshot {
    pub z_scores: Vec<ZScorePoint>,
    pub volatility: Vec<VolatilityPoint>,
    pub spread: Vec<SpreadPoint>,
}

impl StatArbSnapshot {
    /// Regenerate all three series.
    pub fn generate(source: &mut impl SampleSource) -> Self {
        Self {
            z_scores: z_score_series(source),
            volatility: volatility_series(source),
            spread: percentage_series(source),
        }
    }

    /// The displayed "current" z-score point.
    pub fn latest_z(&self) -> &ZScorePoint {
        self.z_scores.last().expect("series is never empty")
    }

    /// The displayed "current" volatility point.
    pub fn latest_volatility(&self) -> &VolatilityPoint {
        self.volatility.last().expect("series is never empty")
    }

    /// The displayed "current" spread point.
    pub fn latest_spread(&self) -> &SpreadPoint {
        self.spread.last().expect("series is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signal_thresholds() {
        assert_eq!(Signal::classify(2.01), Signal::Sell);
        assert_eq!(Signal::classify(2.0), Signal::Hold);
        assert_eq!(Signal::classify(0.0), Signal::Hold);
        assert_eq!(Signal::classify(-2.0), Signal::Hold);
        assert_eq!(Signal::classify(-2.01), Signal::Buy);
    }

    #[test]
    fn test_series_lengths() {
        let mut source = ThreadRngSource;
        let snapshot = StatArbSnapshot::generate(&mut source);
        assert_eq!(snapshot.z_scores.len(), Z_SCORE_POINTS);
        assert_eq!(snapshot.volatility.len(), VOLATILITY_POINTS);
        assert_eq!(snapshot.spread.len(), PERCENTAGE_POINTS);
    }

    #[test]
    fn test_z_score_formula_exact() {
        // unit 0.75 -> spread = 0.75 * 0.02 - 0.01 = 0.005 -> z = 0
        let mut source = FixedSource::new(vec![0.75]);
        let series = z_score_series(&mut source);
        assert!(series.iter().all(|p| (p.spread - 0.005).abs() < 1e-12));
        assert!(series.iter().all(|p| p.z_score.abs() < 1e-9));
        assert!(series.iter().all(|p| p.signal == Signal::Hold));

        // unit 0.0 -> spread = -0.01 -> z = (-0.01 - 0.005) / 0.003 = -5 -> BUY
        let mut source = FixedSource::new(vec![0.0]);
        let point = z_score_series(&mut source)[0];
        assert!((point.z_score - (-5.0)).abs() < 1e-12);
        assert_eq!(point.signal, Signal::Buy);
    }

    #[test]
    fn test_generated_values_within_ranges() {
        let mut source = ThreadRngSource;
        for point in z_score_series(&mut source) {
            assert!(point.spread >= -0.01 && point.spread < 0.01);
        }
        for point in volatility_series(&mut source) {
            assert!(point.volatility >= 0.005 && point.volatility < 0.025);
            assert!(point.forecast >= 0.003 && point.forecast < 0.028);
        }
    }

    #[test]
    fn test_percentage_walk_exact() {
        // unit 0.5 -> step 0 on both tracks; prices stay at their starts.
        let mut source = FixedSource::new(vec![0.5]);
        let series = percentage_series(&mut source);
        let expected = (1.0500 / 1.2800 - 1.0) * 100.0;
        for point in &series {
            assert!((point.pair1 - 1.0500).abs() < 1e-12);
            assert!((point.pair2 - 1.2800).abs() < 1e-12);
            assert!((point.percentage - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_percentage_walk_steps_alternate_tracks() {
        // Track 1 steps +0.005, track 2 steps -0.005 on every point.
        let mut source = FixedSource::new(vec![1.0, 0.0]);
        let series = percentage_series(&mut source);
        assert!((series[0].pair1 - 1.0550).abs() < 1e-12);
        assert!((series[0].pair2 - 1.2750).abs() < 1e-12);
        assert!((series[1].pair1 - 1.0600).abs() < 1e-12);
        assert!((series[1].pair2 - 1.2700).abs() < 1e-12);
        // Spread widens monotonically with these steps.
        assert!(series[1].percentage > series[0].percentage);
    }

    #[test]
    fn test_latest_reads_last_element() {
        let mut source = ThreadRngSource;
        let snapshot = StatArbSnapshot::generate(&mut source);
        let last = snapshot.z_scores[snapshot.z_scores.len() - 1];
        assert_eq!(snapshot.latest_z().z_score, last.z_score);
    }

    #[test]
    fn test_fixed_source_cycles() {
        let mut source = FixedSource::new(vec![0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
    }
}
