use genetools::{
    evolution::evolve_best,
    mutation::FnMutation,
    rng::RandomNumberGenerator,
    Population,
};
use tracing::info;

const TARGET: &str = "Hello world";
const POPULATION_SIZE: usize = 200;
const MAX_GENERATIONS: usize = 5000;
const MUTATION_PROBABILITY: f64 = 0.05;

fn alphabet() -> Vec<char> {
    (' '..='~').collect()
}

fn score(candidate: &[char], target: &[char]) -> f64 {
    candidate
        .iter()
        .zip(target)
        .filter(|(gene, wanted)| gene == wanted)
        .count() as f64
}

fn random_population(
    alphabet: &[char],
    length: usize,
    rng: &mut RandomNumberGenerator,
) -> Population<char> {
    (0..POPULATION_SIZE)
        .map(|_| (0..length).map(|_| alphabet[rng.index(alphabet.len())]).collect())
        .collect()
}

fn best(fitness: &[f64]) -> (usize, f64) {
    fitness
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |acc, (i, f)| if f > acc.1 { (i, f) } else { acc })
}

#[test]
fn test_hello_world() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let target: Vec<char> = TARGET.chars().collect();
    let alphabet = alphabet();
    let mut rng = RandomNumberGenerator::from_seed(2024);

    let mutation = FnMutation::new(|genome: &mut [char], rng: &mut RandomNumberGenerator| {
        for gene in genome.iter_mut() {
            if rng.uniform() < MUTATION_PROBABILITY {
                *gene = alphabet[rng.index(alphabet.len())];
            }
        }
    });

    let mut population = random_population(&alphabet, target.len(), &mut rng);
    let mut fitness: Vec<f64> = population.iter().map(|c| score(c, &target)).collect();
    let (_, mut best_score) = best(&fitness);

    let mut generation = 0;
    while best_score < target.len() as f64 && generation < MAX_GENERATIONS {
        generation += 1;
        population = evolve_best(&population, &fitness, 20, &mutation, &mut rng).unwrap();
        fitness = population.iter().map(|c| score(c, &target)).collect();

        let (index, score) = best(&fitness);
        // Elites carry the previous best over unchanged.
        assert!(score >= best_score);
        best_score = score;

        if generation % 50 == 0 {
            let candidate: String = population[index].iter().collect();
            info!(generation, score, %candidate, "best candidate");
        }
    }

    let (index, _) = best(&fitness);
    let winner: String = population[index].iter().collect();
    assert_eq!(winner, TARGET, "no match after {} generations", generation);
}
