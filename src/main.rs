//! Colour classification demo: synthetic data, 80/20 split, PSO training,
//! accuracy on the held-out rows.

use std::error::Error;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pso_classifier::data::{generate_colors, shuffle_rows, train_test_split, Class, TrainingExample};
use pso_classifier::network::{NeuralNetwork, Topology};
use pso_classifier::swarm::{train, PsoParams};

/// Seed for data generation; gives a well-separated dataset
const DATA_SEED: u64 = 159;
const SHUFFLE_SEED: u64 = 0;
const NUM_ROWS: usize = 100;
const TRAIN_FRACTION: f64 = 0.8;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("\nBegin neural network classification demo\n");
    println!("Goal is to predict/classify color based on four numeric inputs\n");

    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    println!("Creating {NUM_ROWS} lines of raw data");
    let samples = generate_colors(NUM_ROWS, &mut rng)?;

    println!("\nFirst few rows of raw data are:");
    for sample in samples.iter().take(4) {
        println!("{sample}");
    }

    let mut examples: Vec<TrainingExample> = samples.iter().map(|s| s.to_example()).collect();
    println!("\nGenerating train and test matrices using an 80%-20% split");
    shuffle_rows(&mut examples, &mut StdRng::seed_from_u64(SHUFFLE_SEED));
    let (train_set, test_set) = train_test_split(&examples, TRAIN_FRACTION)?;

    println!("\nFirst few rows of training matrix are:");
    for example in train_set.iter().take(5) {
        println!("{}", format_row(example));
    }

    let topology = Topology::new(4, 5, 3)?;
    println!("\nCreating {topology} neural network");
    println!("Training to find best neural network weights using PSO with cross entropy error");
    let result = train(topology, &train_set, PsoParams::default())?;
    println!(
        "Final best (smallest) cross entropy error = {:.4}",
        result.best_fitness
    );
    println!("\nBest weights found:");
    println!("{}", format_vector(&result.best_position, 2));

    println!("\nLoading best weights into neural network");
    let mut network = NeuralNetwork::with_weights(topology, &result.best_position)?;

    println!("\nAnalyzing the neural network accuracy on the test data\n");
    for example in test_set.iter().take(4) {
        let predicted = network.compute_outputs(&example.features)?;
        let predicted_idx = network.predict(&example.features)?;
        println!("-----------------------------------");
        println!("Input:     {}", format_vector(&example.features, 2));
        println!(
            "Output:    {} ({})",
            format_vector(&example.label, 1),
            class_name(example.class_index())
        );
        println!(
            "Predicted: {} ({})",
            format_vector(&predicted, 1),
            class_name(predicted_idx)
        );
        if predicted_idx == example.class_index() {
            println!("correct");
        } else {
            println!("wrong");
        }
        println!("-----------------------------------");
    }
    println!(". . .");

    let accuracy = network.accuracy(&test_set)?;
    let correct = (accuracy * test_set.len() as f64).round() as usize;
    println!("\nCorrect = {correct}");
    println!("Wrong = {}", test_set.len() - correct);
    println!("Prediction accuracy = {accuracy:.4}");

    println!("\nEnd neural network classification demo\n");
    Ok(())
}

fn class_name(index: usize) -> &'static str {
    Class::from_index(index).map_or("?", Class::name)
}

/// Fixed-precision values, twelve per line, with room for a sign
fn format_vector(values: &[f64], decimals: usize) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 && i % 12 == 0 {
            out.push('\n');
        }
        if *v >= 0.0 {
            out.push(' ');
        }
        out.push_str(&format!("{v:.decimals$} "));
    }
    out
}

fn format_row(example: &TrainingExample) -> String {
    format!(
        "{}-> {}",
        format_vector(&example.features, 2),
        format_vector(&example.label, 2)
    )
}
