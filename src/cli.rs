use clap::Parser;

use vvsim::ModelConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (a commented template is written if missing)
    #[arg(long, default_value = "vvsim.toml")]
    pub config: String,

    /// Entrainment rate (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub alpha: Option<f64>,

    /// Decay rate (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub beta: Option<f64>,

    /// Coupling strength (overrides config)
    #[arg(long)]
    pub w0: Option<f64>,

    /// Resting period in seconds (overrides config)
    #[arg(long)]
    pub t0: Option<f64>,

    /// VV units per stress group, e.g. 4,4
    #[arg(long, value_delimiter = ',')]
    pub units: Option<Vec<u32>>,

    /// Stress amplitude per group, e.g. 0.5,1
    #[arg(long, value_delimiter = ',')]
    pub amplitudes: Option<Vec<f64>>,

    /// Trailing catalexis units (overrides config)
    #[arg(long)]
    pub catalexis: Option<u32>,

    /// Resetting mode: fixed or variable (overrides config)
    #[arg(long)]
    pub resetting: Option<String>,

    /// Render the duration contour to --plot-path
    #[arg(long, default_value_t = false)]
    pub plot_contour: bool,

    /// Output PNG for --plot-contour
    #[arg(long, default_value = "target/plots/vvsim_contour.png")]
    pub plot_path: String,

    /// Also write the (time, duration) contour as CSV
    #[arg(long)]
    pub csv: Option<String>,

    /// Print sync and durations as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the sync value next to each duration
    #[arg(long, default_value_t = false)]
    pub show_sync: bool,

    /// Simulate under both resetting modes and print them side by side
    #[arg(long, default_value_t = false)]
    pub compare_resetting: bool,
}

impl Args {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, cfg: &mut ModelConfig) {
        if let Some(v) = self.alpha {
            cfg.alpha = v;
        }
        if let Some(v) = self.beta {
            cfg.beta = v;
        }
        if let Some(v) = self.w0 {
            cfg.w0 = v;
        }
        if let Some(v) = self.t0 {
            cfg.t0 = v;
        }
        if let Some(v) = &self.units {
            cfg.units_per_sg = v.clone();
        }
        if let Some(v) = &self.amplitudes {
            cfg.amplitudes = v.clone();
        }
        if let Some(v) = self.catalexis {
            cfg.catalexis = v;
        }
        if let Some(v) = &self.resetting {
            cfg.resetting = v.clone();
        }
        if self.plot_contour {
            cfg.plot_contour = true;
        }
    }
}
