use ::rand::Rng;

/// Flat list of brain parameters passed between generations.
#[derive(Clone, Debug, PartialEq)]
pub struct Genome {
    pub genes: Vec<f32>,
}

impl Genome {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.genes.iter().copied()
    }

    /// Uniform crossover: each gene comes from either parent with equal odds.
    pub fn crossover(&self, other: &Genome, rng: &mut impl Rng) -> Self {
        debug_assert_eq!(self.len(), other.len());

        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
            .collect();

        Self { genes }
    }

    /// With probability `chance` a gene is nudged by up to `coeff` in either
    /// direction.
    pub fn mutate(&mut self, chance: f32, coeff: f32, rng: &mut impl Rng) {
        let chance = chance.clamp(0.0, 1.0) as f64;
        for gene in &mut self.genes {
            if rng.gen_bool(chance) {
                let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
                *gene += sign * coeff * rng.gen::<f32>();
            }
        }
    }
}

impl FromIterator<f32> for Genome {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}
