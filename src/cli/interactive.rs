//! Interactive prompt loop
//!
//! Reads game state field by field, prints the projection, optionally runs the
//! hedge calculator and appends a snapshot. Typing `q` at any prompt quits.

use crate::config::Config;
use crate::data::SnapshotSink;
use crate::hedge::{BetSide, HedgeEngine, HedgeInput};
use crate::model::{ProjectionEngine, ProjectionInput, ProjectionResult};
use crate::report::{format_hedge, format_projection};
use std::io::{BufRead, Write};
use std::str::FromStr;

const QUIT: &str = "q";

/// Counters for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub projections: usize,
    pub hedges: usize,
    pub snapshots_saved: usize,
    pub errors: usize,
}

/// Prompt loop over any line reader and writer
pub struct InteractiveSession<'a, R, W> {
    input: R,
    output: W,
    config: Config,
    sink: &'a dyn SnapshotSink,
    engine: ProjectionEngine,
    hedger: HedgeEngine,
    stats: SessionStats,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(input: R, output: W, config: Config, sink: &'a dyn SnapshotSink) -> Self {
        Self {
            input,
            output,
            config,
            sink,
            engine: ProjectionEngine::new(),
            hedger: HedgeEngine::new(),
            stats: SessionStats::default(),
        }
    }

    /// Run until the user quits or input ends
    pub fn run(mut self) -> anyhow::Result<SessionStats> {
        writeln!(self.output, "NBA Live Total Calculator (Terminal)")?;
        writeln!(
            self.output,
            "Type 'q' at any prompt to quit. Snapshots save to {}\n",
            self.config.snapshots.path.display()
        )?;

        while self.cycle()? {
            writeln!(self.output, "\n--------------------------------\n")?;
        }

        tracing::info!(
            projections = self.stats.projections,
            hedges = self.stats.hedges,
            snapshots = self.stats.snapshots_saved,
            errors = self.stats.errors,
            "Interactive session finished"
        );
        Ok(self.stats)
    }

    /// One read-project-hedge-save pass. Returns false when the user quits.
    fn cycle(&mut self) -> anyhow::Result<bool> {
        let Some(input) = self.read_projection_input()? else {
            return Ok(false);
        };

        let result = match self.engine.project(&input) {
            Ok(result) => result,
            Err(e) => {
                self.report_error(&e)?;
                return Ok(true);
            }
        };
        self.stats.projections += 1;
        write!(self.output, "{}", format_projection(&result))?;

        let Some(run_hedge) = self.read_yes_no("\nRun hedge calc? (y/n): ")? else {
            return Ok(false);
        };
        if run_hedge && !self.run_hedge(&result)? {
            return Ok(false);
        }

        let Some(save) = self.read_yes_no("\nSave snapshot to CSV? (y/n): ")? else {
            return Ok(false);
        };
        if save {
            match self.sink.append(&result) {
                Ok(()) => {
                    self.stats.snapshots_saved += 1;
                    writeln!(
                        self.output,
                        "Saved -> {}",
                        self.config.snapshots.path.display()
                    )?;
                }
                Err(e) => self.report_error(&e)?,
            }
        }

        Ok(true)
    }

    fn read_projection_input(&mut self) -> anyhow::Result<Option<ProjectionInput>> {
        let Some(quarter) = self.read_parsed::<u32>("Quarter (1-4): ")? else {
            return Ok(None);
        };
        let Some(clock) = self.read_line("Time left (mm:ss): ")? else {
            return Ok(None);
        };
        let Some(points) = self.read_parsed::<f64>("Total points (both teams): ")? else {
            return Ok(None);
        };
        let Some(live) = self.read_parsed::<f64>("Live total (market): ")? else {
            return Ok(None);
        };

        let label = format!("Pregame total [{}]: ", self.config.projection.pregame_total);
        let Some(pregame) = self.read_optional::<f64>(&label)? else {
            return Ok(None);
        };
        if let Some(pregame) = pregame {
            self.config.projection.pregame_total = pregame;
        }

        let label = format!("Edge threshold pts [{}]: ", self.config.projection.edge_threshold);
        let Some(threshold) = self.read_optional::<f64>(&label)? else {
            return Ok(None);
        };
        if let Some(threshold) = threshold {
            self.config.projection.edge_threshold = threshold;
        }

        let Some(alpha) = self.read_optional::<f64>("Alpha (blank=auto): ")? else {
            return Ok(None);
        };
        let Some(bonus) = self.read_yes_no("Bonus/whistles on? (y/n): ")? else {
            return Ok(None);
        };
        let Some(ft_parade) = self.read_yes_no("FT parade? (y/n): ")? else {
            return Ok(None);
        };
        let Some(fta) = self.read_optional::<f64>("FTA total so far (optional blank): ")? else {
            return Ok(None);
        };
        let Some(three_pct) =
            self.read_optional::<f64>("3P% so far (optional blank, e.g. 0.41): ")?
        else {
            return Ok(None);
        };

        let Some(ot_on) = self.read_yes_no("Include OT adjustment? (y/n): ")? else {
            return Ok(None);
        };
        let overtime = if ot_on {
            let defaults = self.config.overtime.clone();
            let label = format!("OT probability % [{}]: ", defaults.probability_pct);
            let Some(prob) = self.read_optional::<f64>(&label)? else {
                return Ok(None);
            };
            let label = format!("Expected OT points [{}]: ", defaults.expected_points);
            let Some(points) = self.read_optional::<f64>(&label)? else {
                return Ok(None);
            };
            Some(defaults.adjustment(prob, points))
        } else {
            None
        };

        let mut options = self.config.projection.options();
        options.alpha = alpha;
        options.bonus_active = bonus;
        options.ft_parade_active = ft_parade;
        options.free_throw_attempts = fta;
        options.three_point_pct = three_pct;
        options.overtime = overtime;

        Ok(Some(
            ProjectionInput::new(
                quarter,
                clock,
                points,
                live,
                self.config.projection.pregame_total,
            )
            .with_options(options),
        ))
    }

    /// Returns false when the user quits mid-way
    fn run_hedge(&mut self, projection: &ProjectionResult) -> anyhow::Result<bool> {
        let Some(side) = self.read_parsed::<BetSide>("My bet side (UNDER/OVER): ")? else {
            return Ok(false);
        };
        let Some(my_line) = self.read_parsed::<f64>("My bet line: ")? else {
            return Ok(false);
        };
        let Some(my_stake) = self.read_parsed::<f64>("My stake $: ")? else {
            return Ok(false);
        };
        let Some(my_odds) = self.read_parsed::<f64>("My odds (American, e.g. -110): ")? else {
            return Ok(false);
        };
        let live = projection.live_market_total;
        let label = format!("Hedge line (blank=use live {live}): ");
        let Some(hedge_line) = self.read_optional::<f64>(&label)? else {
            return Ok(false);
        };
        let Some(hedge_odds) = self.read_parsed::<f64>("Hedge odds (American): ")? else {
            return Ok(false);
        };

        let input = HedgeInput {
            side,
            my_line,
            my_stake,
            my_odds_american: my_odds,
            hedge_line: hedge_line.unwrap_or(live),
            hedge_odds_american: hedge_odds,
            live_market_total: live,
            risk_flags: projection.flags.labels(),
        };

        match self.hedger.equalize(&input) {
            Ok(result) => {
                self.stats.hedges += 1;
                write!(self.output, "{}", format_hedge(&result))?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn report_error(&mut self, e: &dyn std::fmt::Display) -> anyhow::Result<()> {
        self.stats.errors += 1;
        tracing::debug!(error = %e, "Rejected input");
        writeln!(self.output, "\nError: {e}\nTry again.\n")?;
        Ok(())
    }

    /// Prompt for a raw line. `None` on quit or end of input.
    fn read_line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT) {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    /// Prompt until the answer parses
    fn read_parsed<T>(&mut self, label: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            let Some(line) = self.read_line(label)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Invalid value {line:?}: {e}")?,
            }
        }
    }

    /// Prompt for an optional value; blank yields `Some(None)`
    fn read_optional<T>(&mut self, label: &str) -> anyhow::Result<Option<Option<T>>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            let Some(line) = self.read_line(label)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(None));
            }
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(Some(value))),
                Err(e) => writeln!(self.output, "Invalid value {line:?}: {e}")?,
            }
        }
    }

    /// Anything other than y/yes is a no
    fn read_yes_no(&mut self, label: &str) -> anyhow::Result<Option<bool>> {
        Ok(self
            .read_line(label)?
            .map(|line| matches!(line.to_ascii_lowercase().as_str(), "y" | "yes")))
    }
}
