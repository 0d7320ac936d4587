use ::rand::seq::SliceRandom;
use ::rand::Rng;

use crate::genome::Genome;
use crate::stats::FitnessSummary;

/// A member of the finished generation, scored by how much it ate.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub genome: Genome,
    pub fitness: f32,
}

/// Breed a new population of the same size: roulette-wheel selection,
/// uniform crossover, then mutation.
pub fn evolve(
    population: &[Candidate],
    mut_chance: f32,
    mut_coeff: f32,
    rng: &mut impl Rng,
) -> (Vec<Genome>, FitnessSummary) {
    assert!(!population.is_empty());

    let fitness: Vec<f32> = population.iter().map(|c| c.fitness).collect();
    let summary = FitnessSummary::from_samples(&fitness);

    let children = (0..population.len())
        .map(|_| {
            let mom = select(population, rng);
            let dad = select(population, rng);
            let mut child = mom.genome.crossover(&dad.genome, rng);
            child.mutate(mut_chance, mut_coeff, rng);
            child
        })
        .collect();

    (children, summary)
}

/// Fitness-proportionate pick. A population where nobody ate falls back to a
/// uniform pick.
fn select<'a>(population: &'a [Candidate], rng: &mut impl Rng) -> &'a Candidate {
    population
        .choose_weighted(rng, |c| c.fitness.max(0.0))
        .ok()
        .or_else(|| population.choose(rng))
        .unwrap_or(&population[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn candidate(gene: f32, fitness: f32) -> Candidate {
        Candidate {
            genome: (0..8).map(|_| gene).collect(),
            fitness,
        }
    }

    #[test]
    fn evolve_keeps_population_size_and_reports_fitness() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let population = vec![candidate(0.0, 1.0), candidate(1.0, 3.0), candidate(2.0, 2.0)];

        let (children, summary) = evolve(&population, 0.0, 0.0, &mut rng);

        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.len() == 8));
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.median, 2.0);
    }

    #[test]
    fn selection_never_picks_zero_fitness_when_others_scored() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let population = vec![candidate(0.0, 0.0), candidate(1.0, 5.0)];

        let (children, _) = evolve(&population, 0.0, 0.0, &mut rng);

        for child in children {
            assert!(child.iter().all(|g| g == 1.0));
        }
    }

    #[test]
    fn all_zero_fitness_still_breeds() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let population = vec![candidate(0.0, 0.0), candidate(1.0, 0.0)];

        let (children, summary) = evolve(&population, 0.0, 0.0, &mut rng);

        assert_eq!(children.len(), 2);
        assert_eq!(summary.max, 0.0);
    }
}
