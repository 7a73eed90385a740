use chrono::{DateTime, NaiveDate, Utc};
use meridian::clock::{clock_face, is_user_city};
use meridian::config::Settings;
use meridian::offset::format_offset;
use meridian::quarter::QuarterProgress;
use meridian::store::UnitStore;
use meridian::ticker::ticker_text;
use meridian::weather::WeatherCard;
use meridian::{Context, HourStatus, Options, OverlapGrid, optimal_window_with, overlap_grid};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

bitflags::bitflags! {
    /// Sections of the dashboard to print.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Panels: u8 {
        const CLOCKS  = 1 << 0;
        const GRID    = 1 << 1;
        const WINDOW  = 1 << 2;
        const TICKER  = 1 << 3;
        const QUARTER = 1 << 4;
    }
}

impl Panels {
    /// Parse a comma-separated list such as `grid,window`.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        list.split(',').map(str::trim).filter(|name| !name.is_empty()).try_fold(Panels::empty(), |acc, name| {
            let panel = match name.to_ascii_lowercase().as_str() {
                "clocks" => Panels::CLOCKS,
                "grid" => Panels::GRID,
                "window" => Panels::WINDOW,
                "ticker" => Panels::TICKER,
                "quarter" => Panels::QUARTER,
                other => return Err(format!("error: unknown panel '{other}'")),
            };
            Ok(acc | panel)
        })
    }
}

/// Everything one frame of the dashboard needs.
pub struct Frame<'a> {
    pub settings: &'a Settings,
    pub context: Context,
    pub options: Options,
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

pub fn print_frame(frame: &Frame<'_>, panels: Panels, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}  {}",
        palette.bold(palette.paint("⚙  MERIDIAN", ansi::CYAN)),
        palette.dim(format!(
            "viewer {} // {:02}:00 local",
            format_offset(frame.context.user_utc_offset),
            frame.context.current_local_hour
        )),
    );

    if panels.contains(Panels::TICKER) {
        let outcome: Option<meridian::Result<_>> = frame.settings.rates.map(Ok);
        println!("\n{}", palette.paint(ticker_text(outcome.as_ref()), ansi::YELLOW));
    }

    if panels.contains(Panels::CLOCKS) {
        println!("\n{}", palette.paint("━━━ Clocks ━━━", ansi::GRAY));
        print_clocks(frame, &palette);
    }

    if panels.contains(Panels::GRID) {
        let grid = overlap_grid(&frame.settings.cities, &frame.context, &frame.options);
        println!("\n{}", palette.paint(format!("━━━ Overlap ({}) ━━━", grid.axis.label()), ansi::GRAY));
        print_grid(&grid, &palette);
    }

    if panels.contains(Panels::WINDOW) {
        let window = optimal_window_with(&frame.settings.cities, &frame.settings.aux_zones);
        println!("\n{}", palette.paint("━━━ Optimal window ━━━", ansi::GRAY));
        println!("  {}", palette.bold(palette.paint(window.to_string(), ansi::GREEN)));
        println!(
            "  {}",
            palette.dim(format!("{} of {} cities in working hours", window.overlap, frame.settings.cities.len()))
        );
    }

    if panels.contains(Panels::QUARTER) {
        let progress = QuarterProgress::for_date(frame.today);
        println!("\n{}", palette.paint("━━━ Quarter ━━━", ansi::GRAY));
        println!("  {}", palette.paint(progress.to_string(), ansi::BLUE));
        println!(
            "  {}  {}",
            palette.paint(progress.bar(30), ansi::CYAN),
            palette.dim(format!("{} days left", progress.remaining()))
        );
    }

    println!();
}

fn print_clocks(frame: &Frame<'_>, palette: &ansi::Palette) {
    if frame.settings.cities.is_empty() {
        println!("{}", palette.dim("  No cities configured"));
        return;
    }

    // Nothing is fetched here, so every card stays in its loading state.
    let store = UnitStore::new(frame.settings.display.unit);
    for city in &frame.settings.cities {
        let card = WeatherCard::new(city.clone(), store.subscribe());
        println!("{}", clock_line(frame, &card, palette));
    }
}

fn clock_line(frame: &Frame<'_>, card: &WeatherCard, palette: &ansi::Palette) -> String {
    let city = card.city();
    let face = clock_face(city, frame.now);
    let marker = if is_user_city(city, &frame.context) { palette.paint(" ◀ YOU", ansi::GREEN) } else { String::new() };
    format!(
        "  {:<12} {} {} {}  {} {}{}",
        palette.bold(&city.name),
        palette.paint(face.time, ansi::GREEN),
        palette.dim(face.date),
        palette.dim(format_offset(city.utc_offset)),
        palette.paint(card.temperature(), ansi::YELLOW),
        palette.dim(card.description()),
        marker,
    )
}

fn print_grid(grid: &OverlapGrid, palette: &ansi::Palette) {
    let header: String = (0..24).map(|h| format!("{h:02}")).collect::<Vec<_>>().join(" ");
    println!("  {:<6} {}", "", palette.dim(header));

    for row in &grid.rows {
        let cells: Vec<String> = row.cells.iter().map(|cell| paint_cell(cell.status, palette)).collect();
        println!("  {:<6} {}", palette.paint(&row.city.code, ansi::BLUE), cells.join(" "));
    }

    let counts: String = grid.working_per_column().iter().map(|n| format!("{n:>2}")).collect::<Vec<_>>().join(" ");
    println!("  {:<6} {}", palette.dim("work"), palette.dim(counts));
    println!(
        "  {}",
        palette.dim(format!(
            "{} working  {} shoulder  {} off  {} now",
            glyph(HourStatus::Working),
            glyph(HourStatus::Shoulder),
            glyph(HourStatus::Off),
            glyph(HourStatus::Current)
        ))
    );
}

fn paint_cell(status: HourStatus, palette: &ansi::Palette) -> String {
    let color = match status {
        HourStatus::Working => ansi::GREEN,
        HourStatus::Shoulder => ansi::YELLOW,
        HourStatus::Off => ansi::GRAY,
        HourStatus::Current => ansi::CYAN,
        HourStatus::CurrentLight => ansi::DIM,
    };
    palette.paint(glyph(status), color)
}

fn glyph(status: HourStatus) -> &'static str {
    match status {
        HourStatus::Working => "██",
        HourStatus::Shoulder => "▒▒",
        HourStatus::Off => "··",
        HourStatus::Current => "▓▓",
        HourStatus::CurrentLight => "░░",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use meridian::store::TempUnit;

    fn clock_lines(settings: &Settings) -> Vec<String> {
        let frame = Frame {
            settings,
            context: Context::new(1.0, 15).unwrap(),
            options: Options::default(),
            now: Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 0).unwrap(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        let palette = ansi::Palette::new(false);
        let store = UnitStore::new(settings.display.unit);
        settings
            .cities
            .iter()
            .map(|city| clock_line(&frame, &WeatherCard::new(city.clone(), store.subscribe()), &palette))
            .collect()
    }

    #[test]
    fn clock_lines_follow_the_configured_unit() {
        let mut settings = Settings::default();
        let celsius = clock_lines(&settings);
        assert!(celsius.iter().all(|line| line.contains("--°C") && line.contains("LOADING...")));

        settings.display.unit = TempUnit::Fahrenheit;
        let fahrenheit = clock_lines(&settings);
        assert!(fahrenheit.iter().all(|line| line.contains("--°F") && !line.contains("°C")));
    }

    #[test]
    fn clock_line_marks_the_viewer_city() {
        let lines = clock_lines(&Settings::default());
        let wro = lines.iter().find(|line| line.contains("WRO (CET)")).unwrap();
        assert!(wro.contains("15:30:00"));
        assert!(wro.ends_with("◀ YOU"));
        assert!(!lines[0].contains("YOU"));
    }

    #[test]
    fn panel_list_parses() {
        assert_eq!(Panels::parse_list("grid,window").unwrap(), Panels::GRID | Panels::WINDOW);
        assert_eq!(Panels::parse_list(" Quarter , ").unwrap(), Panels::QUARTER);
        assert!(Panels::parse_list("grid,weather").is_err());
    }

    #[test]
    fn glyphs_are_two_columns_wide() {
        let statuses = [
            HourStatus::Working,
            HourStatus::Shoulder,
            HourStatus::Off,
            HourStatus::Current,
            HourStatus::CurrentLight,
        ];
        for status in statuses {
            assert_eq!(glyph(status).chars().count(), 2);
        }
    }
}
