use marked_days::{Calendar, MarkedDays};

use chrono::{Days, Month, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LARGE_CALENDAR_YEARS: u64 = 30;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Marks all days of the last 30 years
fn large_calendar() -> MarkedDays {
    let mut store = MarkedDays::new();
    let first = today() - Days::new(366 * LARGE_CALENDAR_YEARS);
    let mut day = first;

    while day <= today() {
        store.mark(day);
        day = day.succ_opt().unwrap();
    }

    store
}

fn bench_mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark");

    group.bench_function("same_day", |b| {
        let mut store = MarkedDays::new();
        b.iter(|| store.mark(black_box(today())))
    });

    group.bench_function("incremental_days", |b| {
        let mut store = MarkedDays::new();
        let mut day = today();

        b.iter(|| {
            store.mark(black_box(day));
            day = day.succ_opt().unwrap_or(today());
        })
    });

    group.bench_function("large_calendar", |b| {
        let mut store = large_calendar();
        let mut day = today();

        b.iter(|| {
            store.mark(black_box(day));
            day = day.succ_opt().unwrap_or(today());
        })
    });

    group.bench_function("mark_unmark", |b| {
        let mut store = MarkedDays::new();

        b.iter(|| {
            store.mark(black_box(today()));
            store.unmark(black_box(today()));
        })
    });
}

fn bench_unmark(c: &mut Criterion) {
    c.bench_function("unmark/large_calendar", |b| {
        let mut store = large_calendar();
        let mut day = today();

        b.iter(|| {
            store.unmark(black_box(day));
            day = day.pred_opt().unwrap_or(today());
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let store = large_calendar();

    c.bench_function("is_marked", |b| {
        b.iter(|| black_box(&store).is_marked(black_box(today())))
    });

    {
        let mut group = c.benchmark_group("month");

        let targets = [
            ("one_month_back", 2024, Month::May),
            ("one_year_back", 2023, Month::June),
            ("five_years_back", 2019, Month::June),
        ];

        for (slug, year, month) in targets {
            group.bench_function(slug, |b| {
                b.iter(|| black_box(&store).month(black_box(year), black_box(month)))
            });
        }
    }

    c.bench_function("year", |b| {
        b.iter(|| black_box(&store).year(black_box(2019)))
    });

    c.bench_function("streak_at", |b| {
        b.iter(|| black_box(&store).streak_at(black_box(today())))
    });
}

criterion_group!(benches, bench_mark, bench_unmark, bench_query);
criterion_main!(benches);
