use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle, WriteMode};
use numen_base::{
    ChartYearRegistry, DiamondChart, ForecastInputs, NumberValue, YearPeriodCalculation,
    birthday_interpretation, compound_interpretation, compound_interpretation_for,
    compute_diamond_chart, current_period_index, forecast_span, parse_date, period_dates,
    year_forecast,
};
use serde::Serialize;

const LOG_ENV: &str = "NUMEN_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "numen", about = "Numerology chart and year-forecast CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log level spec (overrides NUMEN_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Who the forecast is for: a name, or explicit chart seeds.
#[derive(Args)]
struct Person {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth: String,
    /// Full name (derives top and bottom)
    #[arg(
        long,
        required_unless_present_all = ["top", "bottom"],
        conflicts_with_all = ["top", "bottom"]
    )]
    name: Option<String>,
    /// Chart top (1-9), instead of --name
    #[arg(long, requires = "bottom")]
    top: Option<u8>,
    /// Chart bottom, instead of --name
    #[arg(long, requires = "top")]
    bottom: Option<u32>,
    /// Numerological column (1-9)
    #[arg(long, default_value = "8")]
    column: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Diamond chart for a name and birth date
    Chart {
        /// Full name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
    },
    /// Year forecast with dated periods
    Forecast {
        /// Target year
        #[arg(long)]
        year: i32,
        /// Highlight the period active on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
        #[command(flatten)]
        person: Person,
    },
    /// Forecasts for a range of years
    Span {
        /// First year
        #[arg(long)]
        from: i32,
        /// Last year (inclusive)
        #[arg(long)]
        to: i32,
        #[command(flatten)]
        person: Person,
    },
    /// Period index active on a date
    Period {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Period count: 7, 11, 13 or 15
        #[arg(long)]
        count: usize,
    },
    /// Birthday-number meaning (1-9)
    Birthday {
        number: u8,
    },
    /// Compound-number meaning, e.g. 17/8
    Compound {
        display: String,
    },
    /// Chart years of a column
    Registry {
        #[arg(long, default_value = "8")]
        column: u8,
    },
}

fn init_logging(level: Option<&str>) -> Option<LoggerHandle> {
    let spec = level
        .map(str::to_owned)
        .or_else(|| std::env::var(LOG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
    match Logger::try_with_str(&spec) {
        Ok(logger) => match logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::detailed_format)
            .write_mode(WriteMode::Direct)
            .start()
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("Failed to start logger: {e}");
                None
            }
        },
        Err(e) => {
            eprintln!("Invalid log level {spec:?}: {e}");
            None
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn require<T, E: std::fmt::Display>(r: Result<T, E>) -> T {
    r.unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", require(serde_json::to_string_pretty(value)));
}

fn forecast_inputs(person: &Person) -> ForecastInputs {
    let birth = require(parse_date(&person.birth));
    match (&person.name, person.top, person.bottom) {
        (None, Some(top), Some(bottom)) => {
            ForecastInputs::new(top, bottom, birth.year(), person.column)
        }
        (Some(name), None, None) => {
            let chart = require(compute_diamond_chart(name, Some(birth)));
            ForecastInputs::from_chart(&chart, birth, person.column)
        }
        _ => fail("either --name or both --top and --bottom are required"),
    }
}

fn caption(n: &NumberValue) -> &'static str {
    compound_interpretation_for(*n).map_or("", |c| c.caption)
}

fn join(values: &[NumberValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_chart(chart: &DiamondChart) {
    println!("Top:          {}", chart.top);
    println!("Name values:  {}", join(&chart.name_values));
    println!("Upper mid:    {}", join(&chart.upper_mid));
    if let Some(c) = chart.upper_circle {
        println!("Upper circle: {c}");
    }
    if let Some(v) = &chart.upper_lower_circle {
        println!("Upper middle: {}", join(v));
    }
    if let Some(v) = &chart.lower_lower_circle {
        println!("Lower middle: {}", join(v));
    }
    if let Some(c) = chart.lower_circle {
        println!("Lower circle: {c}");
    }
    println!("Lower mid:    {}", join(&chart.lower_mid));
    println!("Bottom:       {}", chart.bottom);
    if let Some(b) = birthday_interpretation(chart.top) {
        println!();
        println!("Birthday {} ({}): {}", b.number, b.planet.name(), b.essence);
    }
}

fn print_forecast(f: &YearPeriodCalculation, active: Option<usize>) {
    println!(
        "{} - {} ({} periods)",
        f.year,
        f.year_type.name(),
        f.period_count
    );
    for (i, p) in f.periods.iter().enumerate() {
        let marker = if Some(i) == active { "*" } else { " " };
        println!(
            "{marker} {:>2}  {} .. {}  {:>6}  {}",
            i + 1,
            p.start.format("%Y-%m-%d"),
            p.end.format("%Y-%m-%d"),
            p.number.to_string(),
            caption(&p.number)
        );
    }
}

fn main() {
    let cli = Cli::parse();
    let _logger = init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Chart { name, birth } => {
            let date = require(parse_date(&birth));
            let chart = require(compute_diamond_chart(&name, Some(date)));
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Forecast { year, on, person } => {
            let inputs = forecast_inputs(&person);
            let f = require(year_forecast(year, &inputs));
            let active = on
                .map(|d| require(parse_date(&d)))
                .and_then(|d| f.active_index(d));
            if cli.json {
                print_json(&f);
            } else {
                print_forecast(&f, active);
            }
        }

        Commands::Span { from, to, person } => {
            if from > to {
                fail("--from must not be after --to");
            }
            let inputs = forecast_inputs(&person);
            let all = require(forecast_span(&inputs, from..=to));
            if cli.json {
                print_json(&all);
            } else {
                for f in &all {
                    print_forecast(f, None);
                    println!();
                }
            }
        }

        Commands::Period { date, count } => {
            let date = require(parse_date(&date));
            let idx = require(current_period_index(date, count));
            let ranges = require(period_dates(count, date.year()));
            if cli.json {
                print_json(&serde_json::json!({ "index": idx, "range": ranges[idx] }));
            } else {
                println!("Period {} of {count}: {}", idx + 1, ranges[idx]);
            }
        }

        Commands::Birthday { number } => match birthday_interpretation(number) {
            Some(b) if cli.json => print_json(b),
            Some(b) => {
                println!("{} - {}", b.number, b.planet.name());
                println!("Essence:       {}", b.essence);
                println!("Strengths:     {}", b.strengths);
                println!("Challenges:    {}", b.challenges);
                println!("Relationships: {}", b.relationships);
                println!("Vocation:      {}", b.vocation);
                println!("Guidance:      {}", b.guidance);
            }
            None => fail(format!("no birthday meaning for {number}; use 1-9")),
        },

        Commands::Compound { display } => match compound_interpretation(&display) {
            Some(c) if cli.json => print_json(c),
            Some(c) => {
                println!("{} - {} (base {})", c.key(), c.caption, c.category);
                println!("{}", c.description);
            }
            None => fail(format!("no compound meaning for {display:?}")),
        },

        Commands::Registry { column } => {
            let registry = require(ChartYearRegistry::for_column(column));
            if cli.json {
                print_json(registry.entries());
            } else {
                for e in registry.entries() {
                    println!("{}  {}", e.year, e.value);
                }
            }
        }
    }
}
