#[macro_use]
extern crate log;

use std::{fmt::Display, io, path::PathBuf};

use chrono::{Local, TimeZone, Utc};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use fitchart::{ChartReport, build_series, load_samples};
use fitchart_algos::{
    ActivityAggregator, AngledLabels, SleepTransition, SvgLabelRenderer, TimestampFormatter,
};
use fitchart_types::ActivityGoals;

#[derive(Parser)]
pub struct FitChartCli {
    /// Format times in UTC instead of the local time zone
    #[arg(env = "FITCHART_UTC", long)]
    pub utc: bool,
    /// strftime pattern for axis labels
    #[arg(
        env = "FITCHART_LABEL_PATTERN",
        long,
        default_value = TimestampFormatter::<Utc>::DEFAULT_PATTERN
    )]
    pub label_pattern: String,
    #[command(flatten)]
    pub goals: GoalArgs,
    #[clap(subcommand)]
    pub subcommand: FitChartCommand,
}

#[derive(Args)]
pub struct GoalArgs {
    #[arg(env, long, default_value_t = ActivityGoals::DEFAULT_STEPS_GOAL)]
    pub steps_goal: u32,
    #[arg(env, long, default_value_t = ActivityGoals::DEFAULT_SLEEP_DURATION_GOAL_HOURS)]
    pub sleep_goal_hours: u32,
    #[arg(env, long, default_value_t = ActivityGoals::DEFAULT_STEP_LENGTH_CM)]
    pub step_length_cm: u32,
}

impl From<GoalArgs> for ActivityGoals {
    fn from(args: GoalArgs) -> Self {
        Self {
            steps_goal: args.steps_goal,
            sleep_duration_goal_hours: args.sleep_goal_hours,
            step_length_cm: args.step_length_cm,
        }
    }
}

#[derive(Subcommand)]
pub enum FitChartCommand {
    ///
    /// Print axis labels for epoch-second values
    ///
    Label {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Emit angled SVG labels instead of plain text
        #[arg(long)]
        svg: bool,
        /// Horizontal distance between SVG labels
        #[arg(long, default_value_t = 40.0)]
        spacing: f32,
    },
    ///
    /// Print step, sleep and goal statistics for a sample file
    ///
    Summary {
        #[arg(long)]
        samples: PathBuf,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Print the chart series of a sample file
    ///
    Series {
        #[arg(long)]
        samples: PathBuf,
        /// Pad the series to start at this timestamp
        #[arg(long, requires = "to", allow_negative_numbers = true)]
        from: Option<i32>,
        /// Pad the series to end at this timestamp
        #[arg(long, requires = "from", allow_negative_numbers = true)]
        to: Option<i32>,
    },
    ///
    /// Print when the wearer fell asleep and woke up
    ///
    Sleep {
        #[arg(long)]
        samples: PathBuf,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = FitChartCli::parse();
    let goals = ActivityGoals::from(cli.goals);

    if cli.utc {
        let formatter = TimestampFormatter::with_pattern(cli.label_pattern, Utc)?;
        run(cli.subcommand, formatter, goals)
    } else {
        let formatter = TimestampFormatter::with_pattern(cli.label_pattern, Local)?;
        run(cli.subcommand, formatter, goals)
    }
}

fn run<Tz>(
    command: FitChartCommand,
    formatter: TimestampFormatter<Tz>,
    goals: ActivityGoals,
) -> anyhow::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match command {
        FitChartCommand::Label {
            values,
            svg,
            spacing,
        } => {
            let labels = values
                .iter()
                .map(|value| formatter.format(*value))
                .collect::<Vec<_>>();

            if svg {
                let placed = labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (label.as_str(), i as f32 * spacing, 0.0))
                    .collect::<Vec<_>>();
                let mut renderer = SvgLabelRenderer::new();
                AngledLabels::default().draw_labels(&mut renderer, &placed);
                print!("{}", renderer.into_svg());
            } else {
                for label in labels {
                    println!("{}", label);
                }
            }
            Ok(())
        }
        FitChartCommand::Summary { samples, json } => {
            let samples = load_samples(samples)?;
            let report = ChartReport::new(&samples, &goals, formatter.time_zone());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
        FitChartCommand::Series { samples, from, to } => {
            let samples = load_samples(samples)?;
            let range = from.zip(to);
            for point in build_series(samples, range, formatter) {
                println!("{}\t{}\t{}\t{}", point.x, point.label, point.kind, point.value);
            }
            Ok(())
        }
        FitChartCommand::Sleep { samples } => {
            let samples = load_samples(samples)?;
            let transitions = ActivityAggregator::sleep_transitions(&samples);
            if transitions.is_empty() {
                warn!("No sleep found");
            }
            for transition in transitions {
                match transition {
                    SleepTransition::FellAsleep(ts) => {
                        println!("Fell asleep: {}", formatter.format(ts))
                    }
                    SleepTransition::WokeUp(ts) => println!("Woke up: {}", formatter.format(ts)),
                }
            }
            Ok(())
        }
        FitChartCommand::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut FitChartCli::command(),
                "fitchart",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
