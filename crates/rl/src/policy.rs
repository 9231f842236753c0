use fastrand::Rng;

/// Anything that maps an observation to an action vector.
pub trait Policy {
    /// Choose the action for `obs`.
    fn act(&mut self, obs: &[f32]) -> Vec<f32>;
}

impl<F> Policy for F
where
    F: FnMut(&[f32]) -> Vec<f32>,
{
    fn act(&mut self, obs: &[f32]) -> Vec<f32> {
        self(obs)
    }
}

/// Picks every branch uniformly at random, ignoring the observation.
pub struct RandomPolicy {
    rng: Rng,
    branches: Vec<usize>,
}

impl RandomPolicy {
    /// `branches[i]` is the number of discrete codes of action branch `i`.
    #[must_use]
    pub fn new(branches: Vec<usize>, seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            branches,
        }
    }

    #[must_use]
    pub fn branches(&self) -> &[usize] {
        &self.branches
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &[f32]) -> Vec<f32> {
        self.branches
            .iter()
            .map(|&codes| {
                if codes == 0 {
                    0.0
                } else {
                    // Branch sizes are tiny, the cast is exact.
                    self.rng.usize(..codes) as f32
                }
            })
            .collect()
    }
}
