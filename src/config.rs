/// Tunable run parameters shared by the terminal and HTTP drivers.
#[derive(Clone, Debug)]
pub struct Params {
    /// Probability that a cell starts alive during random population.
    pub coverage: f64,
    /// Stop the run after this many generations; None runs until stable.
    pub max_generations: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            coverage: 0.75,
            max_generations: None,
        }
    }
}
