//! Project command implementation

use crate::config::Config;
use crate::data::{CsvSnapshotWriter, SnapshotSink};
use crate::model::{ProjectionEngine, ProjectionInput};
use crate::report::format_projection;
use clap::Args;

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Current quarter (1-4)
    #[arg(short, long)]
    pub quarter: u32,

    /// Time left in the quarter (mm:ss)
    #[arg(short = 't', long)]
    pub clock: String,

    /// Combined points scored so far
    #[arg(long)]
    pub points: f64,

    /// Live market total
    #[arg(long)]
    pub live: f64,

    /// Pregame total (defaults to config)
    #[arg(long)]
    pub pregame: Option<f64>,

    /// Live-pace weight; omit for the auto schedule
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Edge threshold in points (defaults to config)
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Teams are in the bonus
    #[arg(long)]
    pub bonus: bool,

    /// Free-throw parade in progress
    #[arg(long)]
    pub ft_parade: bool,

    /// Bonus boost in points per minute (defaults to config)
    #[arg(long)]
    pub bonus_boost: Option<f64>,

    /// Combined free-throw attempts so far
    #[arg(long)]
    pub fta: Option<f64>,

    /// Combined three-point percentage as a fraction (e.g. 0.41)
    #[arg(long)]
    pub three_pct: Option<f64>,

    /// Include the overtime adjustment
    #[arg(long)]
    pub ot: bool,

    /// Overtime probability in percent
    #[arg(long, requires = "ot")]
    pub ot_prob: Option<f64>,

    /// Expected overtime points
    #[arg(long, requires = "ot")]
    pub ot_points: Option<f64>,

    /// Append the result to the snapshot log
    #[arg(long)]
    pub save: bool,

    /// Print JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl ProjectArgs {
    /// Build the engine input, filling blanks from configuration
    pub fn to_input(&self, config: &Config) -> ProjectionInput {
        let defaults = &config.projection;
        let mut options = defaults.options();
        options.alpha = self.alpha;
        options.edge_threshold = self.threshold.unwrap_or(defaults.edge_threshold);
        options.bonus_active = self.bonus;
        options.ft_parade_active = self.ft_parade;
        options.bonus_boost_per_minute = self.bonus_boost.unwrap_or(defaults.bonus_boost_per_minute);
        options.free_throw_attempts = self.fta;
        options.three_point_pct = self.three_pct;
        options.overtime = self
            .ot
            .then(|| config.overtime.adjustment(self.ot_prob, self.ot_points));

        ProjectionInput::new(
            self.quarter,
            self.clock.clone(),
            self.points,
            self.live,
            self.pregame.unwrap_or(defaults.pregame_total),
        )
        .with_options(options)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let result = ProjectionEngine::new().project(&self.to_input(config))?;
        super::emit(&result, self.json, format_projection)?;

        if self.save {
            let writer = CsvSnapshotWriter::new(&config.snapshots.path);
            writer.append(&result)?;
            tracing::info!(path = ?writer.path(), "Saved snapshot");
        }
        Ok(())
    }
}
