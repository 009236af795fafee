use std::env;
use std::process::ExitCode;

use chrono::Datelike;

use marked_days::{parse_day, Calendar, MarkedDays, MONTHS};

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let mut store = MarkedDays::new();

    for arg in env::args().skip(1) {
        match parse_day(&arg) {
            Ok(day) => store.mark(day),
            Err(err) => {
                eprintln!("Invalid day `{arg}`: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(last) = store.iter().last() else {
        eprintln!("Usage: ./streak <YYYY-MM-DD>...");
        return ExitCode::FAILURE;
    };

    println!(" - marked days: {}", store.count());
    println!(" - last marked day: {last}");
    println!(" - streak: {}", store.streak_at(last));

    let first = store.iter().next().unwrap_or(last);

    for year in first.year()..=last.year() {
        print_year(&store, year);
    }

    ExitCode::SUCCESS
}

fn print_year(store: &MarkedDays, year: i32) {
    if store.year(year).is_empty() {
        return;
    }

    println!("---");
    println!("{year}:");

    for month in MONTHS {
        let days = store.month(year, month);

        if days.is_empty() {
            continue;
        }

        let days: Vec<_> = days.iter().map(|day| day.format("%d").to_string()).collect();
        println!(" - {:<9} {}", month.name(), days.join(" "));
    }
}
