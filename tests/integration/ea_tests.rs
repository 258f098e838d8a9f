use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::{fixture, rstest};

use symb_regr_gp::dataset::Dataset;
use symb_regr_gp::evaluator::{evaluate, Rmse};
use symb_regr_gp::generator::Generator;
use symb_regr_gp::genetic_ops::apply_genetic_ops;
use symb_regr_gp::opcode::OpSet;
use symb_regr_gp::population::Population;
use symb_regr_gp::selector::Selector;

fn is_well_formed(pop: &Population) -> bool {
    pop.individuals().iter().all(|ind| {
        let end = ind.code().traverse(0, |_| {}, |_| {});
        end == ind.code().len() - 1
    })
}

#[fixture]
fn sample_dataset() -> Dataset {
    let xs: Vec<f64> = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    let ys = xs.iter().map(|&v| v.powi(2) + v).collect::<Vec<f64>>();
    let input = xs.into_iter().map(|x| vec![x]).collect();
    return Dataset::new(vec!["x0".to_string()], input, ys);
}

#[rstest]
fn test_population_improves_over_generations(sample_dataset: Dataset) {
    let opset = OpSet::new(&["x0".to_string()]);
    let generator = Generator::Ramped { min_depth: 2, max_depth: 4 };
    let selector = Selector::Tournament { size: 5 };
    let rmse = Rmse;
    let mut rng = StdRng::seed_from_u64(42);

    let population_size = 200;
    let mut population = Population::create(population_size, &generator, &opset, &mut rng);
    evaluate(&mut population, &rmse, &sample_dataset, 1);
    assert!(is_well_formed(&population));

    let initial_mean_fitness = population.get_stats().mean_fit;
    let max_generations = 15;
    let mut final_mean_fitness = f64::MAX;

    for _ in 0..max_generations {
        let parents = selector.select(&population, population_size, 2, &sample_dataset, 1, &mut rng);
        let (offspring, _better, _worse) = apply_genetic_ops(&parents, &generator, &opset, 0.9, 0.1, &mut rng);

        assert_eq!(offspring.len(), population_size);
        assert!(is_well_formed(&offspring), "genetic operators produced a malformed tree");

        population = offspring;
        evaluate(&mut population, &rmse, &sample_dataset, 1);
        final_mean_fitness = population.get_stats().mean_fit;
    }

    // RMSE is lower-is-better: the population should not have degraded.
    assert!(
        final_mean_fitness <= initial_mean_fitness,
        "mean fitness worsened over {} generations: {} -> {}",
        max_generations,
        initial_mean_fitness,
        final_mean_fitness
    );
}

#[rstest]
fn test_elitism_never_loses_the_incumbent_best(sample_dataset: Dataset) {
    let opset = OpSet::new(&["x0".to_string()]);
    let generator = Generator::Ramped { min_depth: 2, max_depth: 4 };
    let selector = Selector::Tournament { size: 3 };
    let rmse = Rmse;
    let mut rng = StdRng::seed_from_u64(7);

    let population_size = 60;
    let mut population = Population::create(population_size, &generator, &opset, &mut rng);
    evaluate(&mut population, &rmse, &sample_dataset, 1);

    for _ in 0..5 {
        let best_before = population.best().expect("population has a valid best").fitness();
        let parents = selector.select(&population, population_size, 1, &sample_dataset, 1, &mut rng);
        assert_eq!(parents.individuals()[0].fitness(), best_before);
        let (offspring, _better, _worse) = apply_genetic_ops(&parents, &generator, &opset, 0.9, 0.1, &mut rng);
        population = offspring;
        evaluate(&mut population, &rmse, &sample_dataset, 1);
    }
}
