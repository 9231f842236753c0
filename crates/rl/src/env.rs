/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// Actions are vectors so that multi-branch discrete action spaces can be
/// expressed: each element is one branch's chosen code.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation vector,
    /// `reward` is the reward earned during this step only, and `done`
    /// indicates episode termination. After `done` the caller must
    /// [`reset`](Env::reset) before stepping again.
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool);

    /// Reset the environment to the start of a new episode and return the
    /// initial observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of action branches expected by [`step`](Env::step).
    fn action_size(&self) -> usize;
}
