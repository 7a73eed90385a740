mod report;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate, Utc};
use meridian::cities::City;
use meridian::config::Settings;
use meridian::refresh::spawn_refresh;
use meridian::{Axis, Context, Options, logging, offset};
use report::{Frame, Panels};
use tracing::{error, info};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut settings = match Settings::resolve(config.config_path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = logging::init(&settings.logging.level) {
        eprintln!("warning: {err}");
    }

    if !config.cities.is_empty() {
        settings.cities = config.cities.clone();
    }
    if let Some(axis) = config.axis {
        settings.display.axis = axis;
    }

    // Validate overrides once up front so watch mode cannot fail mid-run.
    if let Err(err) = current_context(&config) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }

    let code = match config.watch {
        Some(period) => run_watch(config, settings, period),
        None => {
            render(&config, &settings);
            0
        }
    };
    std::process::exit(code);
}

struct CliConfig {
    config_path: Option<PathBuf>,
    cities: Vec<City>,
    axis: Option<Axis>,
    user_offset: Option<f64>,
    hour: Option<u32>,
    date: Option<NaiveDate>,
    watch: Option<Duration>,
    panels: Panels,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig {
        config_path: None,
        cities: Vec::new(),
        axis: None,
        user_offset: None,
        hour: None,
        date: None,
        watch: None,
        panels: Panels::all(),
        color: io::stdout().is_terminal(),
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(value) => Ok(value),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("meridian {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "-c" | "--config" => config.config_path = Some(PathBuf::from(value("--config")?)),
            "--city" => {
                let spec = value("--city")?;
                config.cities.push(City::parse_spec(&spec).map_err(|err| format!("error: {err}"))?);
            }
            "--axis" => config.axis = Some(value("--axis")?.parse::<Axis>().map_err(|err| format!("error: {err}"))?),
            "--offset" => {
                let raw = value("--offset")?;
                config.user_offset = Some(offset::parse_offset(&raw).map_err(|err| format!("error: {err}"))?);
            }
            "--hour" => {
                let raw = value("--hour")?;
                let hour: u32 = raw.parse().map_err(|_| format!("error: invalid --hour '{raw}' (expected 0-23)"))?;
                if hour > 23 {
                    return Err(format!("error: invalid --hour '{raw}' (expected 0-23)"));
                }
                config.hour = Some(hour);
            }
            "--date" => {
                let raw = value("--date")?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| format!("error: invalid --date '{raw}' (expected YYYY-MM-DD)"))?;
                config.date = Some(date);
            }
            "--watch" => {
                let raw = value("--watch")?;
                let secs: u64 = raw.parse().map_err(|_| format!("error: invalid --watch '{raw}' (expected seconds)"))?;
                if secs == 0 {
                    return Err("error: --watch needs at least 1 second".to_string());
                }
                config.watch = Some(Duration::from_secs(secs));
            }
            "--only" => config.panels = Panels::parse_list(&value("--only")?)?,
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    if config.panels.is_empty() {
        return Err("error: --only selected no panels".to_string());
    }

    Ok(config)
}

fn current_context(config: &CliConfig) -> meridian::Result<Context> {
    let local = Context::from_local();
    Context::new(config.user_offset.unwrap_or(local.user_utc_offset), config.hour.unwrap_or(local.current_local_hour))
}

fn render(config: &CliConfig, settings: &Settings) {
    let context = match current_context(config) {
        Ok(context) => context,
        Err(err) => {
            error!(%err, "could not build viewer context");
            return;
        }
    };

    let frame = Frame {
        settings,
        context,
        options: Options { axis: settings.display.axis },
        now: Utc::now(),
        today: config.date.unwrap_or_else(|| Local::now().date_naive()),
    };
    report::print_frame(&frame, config.panels, config.color);
}

fn run_watch(config: CliConfig, settings: Settings, period: Duration) -> i32 {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(async move {
        info!(?period, cities = settings.cities.len(), "watching");
        let clear = config.color;
        let handle = spawn_refresh(period, move || {
            if clear {
                print!("\x1b[2J\x1b[H");
            }
            render(&config, &settings);
        });

        let code = match tokio::signal::ctrl_c().await {
            Ok(()) => 0,
            Err(err) => {
                error!(%err, "failed to listen for Ctrl-C");
                1
            }
        };
        handle.stop().await;
        code
    })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "meridian {version}

World clock and meeting-overlap dashboard for fixed-offset cities.

Usage:
  meridian [OPTIONS]

Options:
  -c, --config <path>       TOML settings file (default: ${config_env}, then built-in cities).
  --city <NAME=OFFSET>      Add a city, e.g. 'TYO (JST)=+9'. Repeatable; replaces
                            the configured city list.
  --axis <utc|local>        Grid columns in UTC or in your local time. Default: utc
  --offset <OFFSET>         Your UTC offset, e.g. +1 or UTC-5:30. Default: host clock.
  --hour <0-23>             Your current local hour. Default: host clock.
  --date <YYYY-MM-DD>       Date for quarter progress. Default: today.
  --only <panels>           Comma-separated subset of clocks,grid,window,ticker,quarter.
  --watch <secs>            Redraw every <secs> seconds until Ctrl-C.
  --color                   Force ANSI color output.
  --no-color                Disable ANSI color output.
  -h, --help                Show this help message.
  -V, --version             Print version information.

Long options also accept --name=value (e.g. --config=meridian.toml); short
options take their value as the next argument (-c meridian.toml).

Environment:
  {log_env}               Log filter directives (e.g. meridian::engine=debug).

Exit codes:
  0  Success.
  1  Runtime or config error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        config_env = meridian::config::CONFIG_ENV,
        log_env = logging::LOG_ENV,
    )
}
