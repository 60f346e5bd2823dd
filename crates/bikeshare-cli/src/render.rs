//! Text rendering of selections, reports and raw rows.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare::stats::Share;
use bikeshare::{
    DurationReport, FilterSelection, Reports, StationReport, TimeReport, Timed, TripRecord,
    UserReport, seconds_to_sentence,
};
use colored::Colorize;

fn rule(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(40))
}

fn took(w: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    rule(w)
}

fn occurrences(share: &Share) -> String {
    format!(
        "with {} occurrences ({:.1} percent)",
        share.count,
        share.percent()
    )
}

pub fn greeting(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "Hello! Let's explore some US bikeshare data!".cyan().bold())?;
    writeln!(w, "\nNote: Data is available for the first six months of 2017 only.")
}

pub fn selection(w: &mut impl Write, selection: &FilterSelection) -> io::Result<()> {
    rule(w)?;
    writeln!(w, "\nThanks for your inputs! You have made the following selection:\n")?;
    writeln!(w, "City: {}", selection.city.title().white().bold())?;
    writeln!(w, "Month: {}", selection.month.title().white().bold())?;
    writeln!(w, "Day: {}", selection.day.title().white().bold())?;
    rule(w)
}

pub fn time_report(w: &mut impl Write, timed: &Timed<TimeReport>) -> io::Result<()> {
    let report = &timed.report;
    rule(w)?;
    writeln!(w, "\n{}\n", "Calculating The Most Frequent Times of Travel...".yellow().bold())?;
    writeln!(
        w,
        "Total rides based on your initial selection: {}\n",
        report.total.to_string().white().bold()
    )?;
    writeln!(
        w,
        "Most Common Month: {} - {}",
        report.month_name().green(),
        occurrences(&report.month.share)
    )?;
    writeln!(
        w,
        "\nMost Common Day of the Week: {} - {}",
        report.day_name().green(),
        occurrences(&report.day.share)
    )?;
    let (from, to) = report.hour_range();
    writeln!(
        w,
        "\nMost Common Start Hour: {} - {}",
        format!("{}-{}", from, to).green(),
        occurrences(&report.hour.share)
    )?;
    took(w, timed.elapsed)
}

pub fn station_report(w: &mut impl Write, timed: &Timed<StationReport>) -> io::Result<()> {
    let report = &timed.report;
    writeln!(w, "\n{}\n", "Calculating The Most Popular Stations and Trip...".yellow().bold())?;
    writeln!(w, "\nThe most popular start station is:\n{}", report.start.value.green())?;
    writeln!(w, "\nThe most popular end station is:\n{}", report.end.value.green())?;
    writeln!(w, "\nThe most popular trip is:\n{}", report.trip.value.green())?;
    took(w, timed.elapsed)
}

pub fn duration_report(w: &mut impl Write, timed: &Timed<DurationReport>) -> io::Result<()> {
    let report = &timed.report;
    writeln!(w, "\n{}\n", "Calculating Trip Duration...".yellow().bold())?;
    writeln!(w, "Total travel time: {}", seconds_to_sentence(report.total).green())?;
    writeln!(w, "\nMean travel time: {}", seconds_to_sentence(report.mean).green())?;
    writeln!(w, "\nMedian travel time: {}", seconds_to_sentence(report.median).green())?;
    took(w, timed.elapsed)
}

fn counts(w: &mut impl Write, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(w, "  {:<width$}  {}", value, count, width = width)?;
    }
    Ok(())
}

pub fn user_report(w: &mut impl Write, timed: &Timed<UserReport>) -> io::Result<()> {
    let report = &timed.report;
    writeln!(w, "\n{}\n", "Calculating User Stats...".yellow().bold())?;
    writeln!(w, "Counts of user type:\n")?;
    counts(w, &report.user_types)?;
    writeln!(w, "\nCounts of gender:\n")?;
    counts(w, &report.genders)?;
    writeln!(
        w,
        "\nMost common birth year among customers: {}",
        report.birth_year.value.green()
    )?;
    took(w, timed.elapsed)
}

pub fn reports(w: &mut impl Write, reports: &Reports) -> io::Result<()> {
    time_report(w, &reports.time)?;
    station_report(w, &reports.stations)?;
    duration_report(w, &reports.durations)?;
    user_report(w, &reports.users)
}

pub fn rows(w: &mut impl Write, records: &[TripRecord]) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        format!(
            "{:<14}{:<21}{:<21}{:>10}  {:<11}{:<8}{:<8}{:>6}{:>4}{:>5}  {}",
            "City",
            "Start Time",
            "End Time",
            "Duration",
            "User Type",
            "Gender",
            "Born",
            "month",
            "day",
            "hour",
            "Trip"
        )
        .bold()
    )?;
    for r in records {
        writeln!(
            w,
            "{:<14}{:<21}{:<21}{:>10.1}  {:<11}{:<8}{:<8}{:>6}{:>4}{:>5}  {}",
            r.city.to_string(),
            r.start_time.to_string(),
            r.end_time.to_string(),
            r.trip_duration,
            r.user_type,
            r.gender,
            r.birth_year,
            r.month,
            r.day,
            r.hour,
            r.trip()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare::pipeline::parse_timestamp;
    use bikeshare::{Choice, City, TripTable, UNKNOWN};

    /// A Chicago trip starting on a Monday.
    fn record(start: &str, duration: f64, from: &str, to: &str) -> TripRecord {
        let start_time = parse_timestamp(start).unwrap();
        TripRecord {
            city: City::Chicago,
            start_time,
            end_time: start_time,
            trip_duration: duration,
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: "Subscriber".to_string(),
            gender: "Female".to_string(),
            birth_year: UNKNOWN.to_string(),
            month: start[5..7].parse().unwrap(),
            day: 1,
            hour: start[11..13].parse().unwrap(),
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reports_render_every_section() {
        let table = TripTable::new(vec![
            record("2017-01-02 08:10:00", 3725.0, "Canal St", "Lake St"),
            record("2017-01-02 08:40:00", 125.0, "Canal St", "State St"),
            record("2017-02-06 17:00:00", 45.0, "Clark St", "Lake St"),
        ]);
        let reports = Reports::compute(&table).unwrap();
        let out = render(|w| super::reports(w, &reports));

        assert!(out.contains("Total rides based on your initial selection: 3"));
        assert!(out.contains("Most Common Month: January - with 2 occurrences (66.7 percent)"));
        assert!(out.contains("Most Common Day of the Week: Monday - with 3 occurrences (100.0 percent)"));
        assert!(out.contains("Most Common Start Hour: 8-9 - with 2 occurrences"));
        assert!(out.contains("The most popular start station is:\nCanal St"));
        assert!(out.contains("The most popular trip is:\nCanal St - Lake St"));
        assert!(out.contains("Total travel time: 1 hours 4 minutes 55 seconds"));
        assert!(out.contains("Median travel time: 2 minutes 5 seconds"));
        assert!(out.contains("  Subscriber  3"));
        assert!(out.contains(&format!("Most common birth year among customers: {}", UNKNOWN)));
        assert_eq!(out.matches("This took").count(), 4);
    }

    #[test]
    fn test_selection_summary() {
        let selection = FilterSelection::new(Choice::Only(City::Washington), Choice::All, Choice::All);
        let out = render(|w| super::selection(w, &selection));
        assert!(out.contains("City: Washington"));
        assert!(out.contains("Month: All"));
    }

    #[test]
    fn test_rows() {
        let records = vec![record("2017-01-02 08:10:00", 321.0, "Canal St", "Lake St")];
        let out = render(|w| rows(w, &records));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("City"));
        assert!(lines[1].contains("2017-01-02 08:10:00"));
        assert!(lines[1].contains("321.0"));
        assert!(lines[1].ends_with("Canal St - Lake St"));
    }
}
