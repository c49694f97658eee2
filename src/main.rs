// Entry point: loads the model config, applies CLI overrides, runs the simulation.
mod cli;

use std::error::Error;
use std::fs::write;

use clap::Parser;
use tracing::info;

use vvsim::contour::{contour_csv, duration_contour};
use vvsim::plot::PngContourPlot;
use vvsim::{ModelConfig, compare_resetting, logging, run};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let args = cli::Args::parse();

    let mut cfg = ModelConfig::load_or_default(&args.config);
    args.apply_overrides(&mut cfg);

    if args.compare_resetting {
        let cmp = compare_resetting(&cfg)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&cmp)?);
        } else {
            println!("unit,fixed,variable");
            for (i, (f, v)) in cmp.fixed.iter().zip(&cmp.variable).enumerate() {
                println!("{},{f:.6},{v:.6}", i + 1);
            }
        }
        return Ok(());
    }

    let caption = format!(
        "VV durations ({} resetting, units {:?})",
        cfg.resetting, cfg.units_per_sg
    );
    let mut plot = PngContourPlot::new(&args.plot_path).with_caption(caption);
    let sim = run(&cfg, &mut plot)?;

    if let Some(path) = &args.csv {
        write(path, contour_csv(&duration_contour(&sim.durations)))?;
        info!(path = %path, "saved contour csv");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim)?);
    } else if args.show_sync {
        for (d, s) in sim.durations.iter().zip(&sim.sync) {
            println!("{d:.6}\t{s:.6}");
        }
    } else {
        for d in &sim.durations {
            println!("{d:.6}");
        }
    }
    Ok(())
}
