use tracing::{debug, debug_span};

use super::{elitism::apply_elitism, options::EvolutionOptions, scheme::SelectionScheme};
use crate::{
    breeding::{BreedStrategy, RouletteBreeding, UniformBreeding},
    crossover::UniformCrossover,
    error::Result,
    genome::{check_aligned, Genome, Population},
    mutation::MutationStrategy,
    rng::RandomNumberGenerator,
};

/// Turns one generation into the next.
///
/// A call to [`Evolver::evolve`] runs, in this order:
///
/// 1. parent selection according to the [`SelectionScheme`],
/// 2. breeding of `population.len()` children with uniform crossover, paired
///    uniformly or by roulette wheel for [`SelectionScheme::BreedRoulette`],
/// 3. mutation of every child,
/// 4. elitism: the best originals overwrite the first children verbatim.
///
/// The evolver holds no state between calls. Fitness of the new generation is
/// left to the caller.
///
/// # Example
///
/// ```rust
/// use genetools::evolution::{Evolver, SelectionScheme};
/// use genetools::mutation::GaussianMutation;
/// use genetools::rng::RandomNumberGenerator;
///
/// let population: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64; 4]).collect();
/// let fitness: Vec<f64> = population.iter().map(|g| g.iter().sum()).collect();
/// let mut rng = RandomNumberGenerator::from_seed(7);
///
/// let scheme = SelectionScheme::Best { n_parents: 5 };
/// let evolver = Evolver::new(scheme, GaussianMutation::default());
/// let next = evolver.evolve(&population, &fitness, &mut rng).unwrap();
///
/// assert_eq!(next.len(), population.len());
/// assert_eq!(next[0], population[19]);
/// ```
#[derive(Debug, Clone)]
pub struct Evolver<M> {
    scheme: SelectionScheme,
    mutation: M,
    options: EvolutionOptions,
}

impl<M> Evolver<M> {
    pub fn new(scheme: SelectionScheme, mutation: M) -> Self {
        Self {
            scheme,
            mutation,
            options: EvolutionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scheme(&self) -> &SelectionScheme {
        &self.scheme
    }

    pub fn mutation(&self) -> &M {
        &self.mutation
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Produces the next generation from `population` and its `fitness`.
    ///
    /// # Errors
    ///
    /// - `EmptyPopulation`, `LengthMismatch` or `InvalidNumericValue` when the
    ///   inputs break the generation boundary invariants.
    /// - Any selection, breeding or mutation error, e.g. `InvalidCardinality`
    ///   when the scheme asks for more parents than individuals exist.
    pub fn evolve<G>(
        &self,
        population: &[Genome<G>],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>>
    where
        G: Clone,
        M: MutationStrategy<G>,
    {
        check_aligned(population, fitness)?;

        let span = debug_span!("evolve", scheme = %self.scheme, population = population.len());
        let _enter = span.enter();

        let parents = self.scheme.select_parents(fitness, rng)?;
        debug!(parents = parents.len(), "selected parents");

        let mut children = self.breed(population, &parents, fitness, rng)?;
        debug!(children = children.len(), "bred children");

        for child in children.iter_mut() {
            self.mutation.mutate(child, rng)?;
        }

        let rate = self.options.elitism_rate();
        let elites = apply_elitism(population, fitness, &mut children, rate)?;
        debug!(elites, "generation complete");

        Ok(children)
    }

    fn breed<G: Clone>(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        let crossover = UniformCrossover::new(self.options.crossover_probability())?;
        let num_children = population.len();

        if self.scheme.pairs_by_roulette() {
            RouletteBreeding::new(crossover).breed(population, parents, fitness, num_children, rng)
        } else {
            UniformBreeding::new(crossover).breed(population, parents, fitness, num_children, rng)
        }
    }
}

/// Runs one generation with default options.
///
/// ```rust
/// use genetools::evolution::{evolve, SelectionScheme};
/// use genetools::mutation::UniformMutation;
/// use genetools::rng::RandomNumberGenerator;
///
/// let population = vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6], vec![0.7, 0.8]];
/// let fitness = vec![0.3, 0.7, 1.1, 1.5];
/// let mutation = UniformMutation::new(0.1, 0.0, 1.0).unwrap();
/// let mut rng = RandomNumberGenerator::new();
///
/// let scheme = SelectionScheme::Sus { n_parents: 3 };
/// let next = evolve(&population, &fitness, scheme, &mutation, &mut rng).unwrap();
/// assert_eq!(next.len(), 4);
/// ```
pub fn evolve<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    scheme: SelectionScheme,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    Evolver::new(scheme, mutation).evolve(population, fitness, rng)
}

/// Breeds only the `n_parents` fittest individuals.
pub fn evolve_best<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    n_parents: usize,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    evolve(population, fitness, SelectionScheme::Best { n_parents }, mutation, rng)
}

/// Breeds the winners of `tournaments` tournaments of `tour_size` contenders.
pub fn evolve_tournament<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    tournaments: usize,
    tour_size: usize,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    let scheme = SelectionScheme::Tournament {
        tournaments,
        tour_size,
    };
    evolve(population, fitness, scheme, mutation, rng)
}

/// Breeds `tournaments` parents drawn by roulette wheel.
pub fn evolve_roulette<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    tournaments: usize,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    evolve(population, fitness, SelectionScheme::Roulette { tournaments }, mutation, rng)
}

/// Draws `tournaments` parents uniformly, then pairs them by roulette wheel.
///
/// Unlike [`evolve_roulette`], fitness only matters when choosing which of
/// the drawn parents mate.
pub fn evolve_breed_roulette<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    tournaments: usize,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    let scheme = SelectionScheme::BreedRoulette { tournaments };
    evolve(population, fitness, scheme, mutation, rng)
}

/// Breeds `n_parents` parents picked by stochastic universal sampling.
pub fn evolve_sus<G, M>(
    population: &[Genome<G>],
    fitness: &[f64],
    n_parents: usize,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<G>>
where
    G: Clone,
    M: MutationStrategy<G> + ?Sized,
{
    evolve(population, fitness, SelectionScheme::Sus { n_parents }, mutation, rng)
}
