use ::rand::Rng;

use crate::config::Config;
use crate::genome::Genome;

/// Outputs per brain: speed change and rotation change.
pub const MOTOR_OUTPUTS: usize = 2;

/// Feed-forward network: eye cells -> hidden neurons -> motor outputs.
#[derive(Clone, Debug)]
pub struct Brain {
    layers: Vec<Layer>,
}

#[derive(Clone, Debug)]
struct Layer {
    neurons: Vec<Neuron>,
}

#[derive(Clone, Debug)]
struct Neuron {
    bias: f32,
    weights: Vec<f32>,
}

impl Brain {
    /// Layer sizes for a given configuration.
    pub fn topology(config: &Config) -> [usize; 3] {
        [config.eye_cells, config.brain_neurons, MOTOR_OUTPUTS]
    }

    /// Genes needed to describe a brain with this topology.
    pub fn genome_len(topology: &[usize]) -> usize {
        topology
            .windows(2)
            .map(|pair| (pair[0] + 1) * pair[1])
            .sum()
    }

    pub fn random(topology: &[usize], rng: &mut impl Rng) -> Self {
        let genome: Genome = (0..Self::genome_len(topology))
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();
        Self::from_genome(topology, &genome)
    }

    /// Rebuild a brain from genes laid out as [bias, weights..] per neuron,
    /// layer by layer.
    pub fn from_genome(topology: &[usize], genome: &Genome) -> Self {
        debug_assert_eq!(genome.len(), Self::genome_len(topology));

        let mut genes = genome.iter();
        let layers = topology
            .windows(2)
            .map(|pair| {
                let (inputs, outputs) = (pair[0], pair[1]);
                let neurons = (0..outputs)
                    .map(|_| {
                        let bias = genes.next().unwrap_or_default();
                        let weights = genes.by_ref().take(inputs).collect();
                        Neuron { bias, weights }
                    })
                    .collect();
                Layer { neurons }
            })
            .collect();

        Self { layers }
    }

    pub fn to_genome(&self) -> Genome {
        self.layers
            .iter()
            .flat_map(|layer| &layer.neurons)
            .flat_map(|neuron| std::iter::once(neuron.bias).chain(neuron.weights.iter().copied()))
            .collect()
    }

    pub fn propagate(&self, inputs: Vec<f32>) -> Vec<f32> {
        self.layers
            .iter()
            .fold(inputs, |inputs, layer| layer.propagate(&inputs))
    }
}

impl Layer {
    fn propagate(&self, inputs: &[f32]) -> Vec<f32> {
        self.neurons.iter().map(|n| n.propagate(inputs)).collect()
    }
}

impl Neuron {
    fn propagate(&self, inputs: &[f32]) -> f32 {
        debug_assert_eq!(inputs.len(), self.weights.len());

        let sum: f32 = inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum();

        (self.bias + sum).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn genome_len_counts_biases_and_weights() {
        // (3 + 1) * 4 + (4 + 1) * 2
        assert_eq!(Brain::genome_len(&[3, 4, 2]), 26);
    }

    #[test]
    fn genome_round_trip_preserves_outputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let topology = [5, 7, MOTOR_OUTPUTS];
        let brain = Brain::random(&topology, &mut rng);

        let rebuilt = Brain::from_genome(&topology, &brain.to_genome());

        let inputs = vec![0.1, 0.5, 0.0, 0.9, 0.3];
        assert_eq!(brain.propagate(inputs.clone()), rebuilt.propagate(inputs));
    }

    #[test]
    fn propagate_applies_bias_weights_and_relu() {
        let genome: Genome = vec![
            // hidden neuron 0: bias 0.5, weights [1.0, -1.0]
            0.5, 1.0, -1.0,
            // hidden neuron 1: bias -2.0, weights [1.0, 1.0]
            -2.0, 1.0, 1.0,
            // output 0: bias 0.0, weights [2.0, 1.0]
            0.0, 2.0, 1.0,
            // output 1: bias 0.25, weights [-1.0, 0.0]
            0.25, -1.0, 0.0,
        ]
        .into_iter()
        .collect();
        let brain = Brain::from_genome(&[2, 2, 2], &genome);

        let outputs = brain.propagate(vec![1.0, 0.25]);

        // hidden = [relu(0.5 + 1.0 - 0.25), relu(-2.0 + 1.25)] = [1.25, 0.0]
        assert!((outputs[0] - 2.5).abs() < 1e-6);
        assert_eq!(outputs[1], 0.0);
    }

    #[test]
    fn topology_follows_config() {
        let config = Config {
            eye_cells: 13,
            brain_neurons: 4,
            ..Config::default()
        };
        assert_eq!(Brain::topology(&config), [13, 4, MOTOR_OUTPUTS]);
    }
}
