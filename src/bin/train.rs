use std::f64::consts::PI;

use neuralnet::feed_forward::{Activator, Network};
use neuralnet::trainer::{Logging, StopCondition, Trainer};
use neuralnet::vector;

type Input = [f64; 1];

/// Samples `x` in `[0, pi)` with targets `0.4 * sin(x) + 0.5`, which keeps
/// them inside the sigmoid's output range.
fn generate_data(num_samples: usize) -> (Vec<Input>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let xs = vector::random_uniform(num_samples, PI, &mut rng);
    let ys = xs.iter().map(|x| 0.4 * x.sin() + 0.5).collect();
    (xs.into_iter().map(|x| [x]).collect(), ys)
}

fn score(set_name: &str, network: &mut Network, inputs: &[Input], expecteds: &[f64]) {
    match network.validate_regression(inputs, expecteds, 0.05) {
        Ok(score) => println!(
            "{} set results: {} of {} correct ({:.1}%)",
            set_name,
            score.correct,
            score.total,
            score.percentage * 100.0
        ),
        Err(err) => eprintln!("{} set could not be scored: {}", set_name, err),
    }
}

fn main() -> neuralnet::Result<()> {
    tracing_subscriber::fmt::init();

    let (inputs, targets) = generate_data(200);
    let expecteds: Vec<[f64; 1]> = targets.iter().map(|&y| [y]).collect();

    let network = Network::builder(&[1, 8, 1])
        .activator(Activator::Sigmoid)
        .learning_rate(0.5)
        .bias(true)
        .build()?;
    let mut network = Trainer::new(network)
        .stop_condition(StopCondition::Epochs(2000))
        .logging(Logging::Epochs(250))
        .shuffle(true)
        .train(&inputs, &expecteds)?;

    println!();
    score("Training", &mut network, &inputs, &targets);
    let (test_inputs, test_targets) = generate_data(1_000);
    score("Test", &mut network, &test_inputs, &test_targets);
    Ok(())
}
