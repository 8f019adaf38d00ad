//! Size Check
//!
//! Evaluates a shopper against a size run and prints the verdict for every
//! size. With a path argument it reads `{ "user": {...}, "garments": [...] }`
//! in the loosely-typed host format (numbers may arrive as strings, with
//! either decimal separator); without one it runs a built-in demo wardrobe.
//!
//! Run with: cargo run --bin size_check [-- input.json]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use size_advisor_rust::{best_fit, evaluate_with, FitParams, Garment, Measurements, SizeEvaluation};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "size_advisor_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Optional parameter override, same mechanism as the host deployments
    let params = match std::env::var("FIT_PARAMS") {
        Ok(path) => {
            tracing::info!("loading fit parameter override: {}", path);
            FitParams::load(Path::new(&path))?
        }
        Err(_) => FitParams::default(),
    };

    let (user, garments) = match std::env::args().nth(1) {
        Some(path) => load_input(&path)?,
        None => demo_input(),
    };

    println!("Size Advisor Check");
    println!("==================\n");
    println!("Shopper: {}\n", describe(&user));

    let evaluations: Vec<SizeEvaluation> = garments
        .iter()
        .map(|garment| evaluate_with(&params, &user, garment))
        .collect();
    for evaluation in &evaluations {
        print_evaluation(evaluation);
    }

    match best_fit(&evaluations) {
        Some(index) => println!(
            "Best size: {} ({})",
            evaluations[index].size_label, evaluations[index].garment_id
        ),
        None => println!("No garments to evaluate"),
    }

    Ok(())
}

/// Read the `{ "user": ..., "garments": [...] }` host payload.
fn load_input(path: &str) -> Result<(Measurements, Vec<Garment>)> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).with_context(|| "Failed to parse input JSON")?;

    let user = value
        .get("user")
        .map(Measurements::from_json)
        .unwrap_or_default();
    let garments = value
        .get("garments")
        .and_then(|g| g.as_array())
        .map(|items| items.iter().map(Garment::from_json).collect())
        .unwrap_or_default();

    Ok((user, garments))
}

/// Built-in demo wardrobe covering all three garment classes.
fn demo_input() -> (Measurements, Vec<Garment>) {
    let user = Measurements {
        shoulders: 46.0,
        chest: 96.0,
        waist: 80.0,
        hip: Some(100.0),
        torso_length: 66.0,
        leg_length: 104.0,
        foot_length: 26.5,
    };

    let pants = |id: &str, label: &str, waist: f64, hip: f64, leg: f64| Garment {
        id: id.to_string(),
        size_label: label.to_string(),
        category: "pantalones".to_string(),
        measurements: Measurements {
            waist,
            hip: Some(hip),
            leg_length: leg,
            ..Default::default()
        },
        elasticity_pct: 2.0,
        ..Default::default()
    };

    let garments = vec![
        pants("jeans-s", "S", 76.0, 96.0, 103.0),
        pants("jeans-m", "M", 80.5, 100.5, 104.0),
        pants("jeans-l", "L", 85.0, 105.0, 105.0),
        Garment {
            id: "tee-m".to_string(),
            size_label: "M".to_string(),
            category: "camiseta".to_string(),
            measurements: Measurements {
                shoulders: 44.0,
                chest: 93.0,
                waist: 79.0,
                torso_length: 65.0,
                ..Default::default()
            },
            elasticity_pct: 5.0,
            ..Default::default()
        },
        Garment {
            id: "runner-42".to_string(),
            size_label: "42".to_string(),
            category: "zapatillas".to_string(),
            measurements: Measurements {
                foot_length: 27.0,
                ..Default::default()
            },
            ..Default::default()
        },
    ];

    (user, garments)
}

/// One-line summary of the provided (non-zero) measurements.
fn describe(user: &Measurements) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut push = |label: &str, value: f64| {
        if value > 0.0 {
            parts.push(format!("{} {:.1} cm", label, value));
        }
    };
    push("shoulders", user.shoulders);
    push("chest", user.chest);
    push("waist", user.waist);
    push("hip", user.hip.unwrap_or(0.0));
    push("torso", user.torso_length);
    push("leg", user.leg_length);
    push("foot", user.foot_length);

    if parts.is_empty() {
        "no measurements provided".to_string()
    } else {
        parts.join(", ")
    }
}

fn print_evaluation(evaluation: &SizeEvaluation) {
    let fit = &evaluation.fit;
    println!(
        "[{}] {} ({})",
        evaluation.size_label,
        evaluation.garment_id,
        fit.category.display_name()
    );
    println!("    overall: {}", fit.overall.as_str());
    for width in &fit.widths {
        println!(
            "    {:<12} {} ({:+.2} cm)",
            width.zone.label(),
            width.status.as_str(),
            width.delta
        );
    }
    for length in &fit.lengths {
        println!(
            "    {:<12} {} ({:+.2} cm)",
            length.zone.label(),
            length.status.as_str(),
            length.delta
        );
    }
    println!(
        "    -> {}: {}",
        evaluation.recommendation.tag.as_str(),
        evaluation.recommendation.title
    );
    println!("       {}\n", evaluation.recommendation.message);
}
