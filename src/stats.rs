use std::fmt;

/// Fitness spread of one evolved population.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitnessSummary {
    pub min: f32,
    pub max: f32,
    pub avg: f32,
    pub median: f32,
}

impl FitnessSummary {
    pub fn from_samples(samples: &[f32]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let sum: f32 = sorted.iter().sum();
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            avg: sum / sorted.len() as f32,
            median,
        }
    }
}

/// Report emitted when a generation ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub generation: usize,
    pub fitness: FitnessSummary,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation {}:", self.generation)?;
        write!(
            f,
            "min[{:.2}] max[{:.2}] avg[{:.2}] median[{:.2}]",
            self.fitness.min, self.fitness.max, self.fitness.avg, self.fitness.median
        )
    }
}
