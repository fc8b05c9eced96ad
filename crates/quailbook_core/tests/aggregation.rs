mod common;

use common::{date, time, FixedClock, SequentialIds};
use quailbook_core::aggregate::{
    dashboard_summary, egg_histogram, recent_activity, recent_eggs, tasks_for_day,
};
use quailbook_core::{
    ActivityKind, EggDraft, EggRecord, FlockStore, Health, MemoryKvStore, Quail, QuailDraft, Task,
    TaskDraft,
};

fn egg(id: i64, day: &str, count: u32) -> EggRecord {
    EggRecord::from_draft(id, EggDraft::new(count).on(date(day)), date(day))
}

fn quail(id: i64, name: &str, day: &str, health: Health) -> Quail {
    Quail::from_draft(
        id,
        QuailDraft {
            date: Some(date(day)),
            health: Some(health),
            ..QuailDraft::new(name)
        },
        date(day),
    )
}

fn task(id: i64, title: &str, day: &str, at: Option<&str>) -> Task {
    let draft = TaskDraft::new(title).on(date(day));
    let draft = match at {
        Some(text) => draft.at(time(text)),
        None => draft,
    };
    Task::from_draft(id, draft, date(day))
}

#[test]
fn dashboard_counts_only_records_dated_today() {
    let eggs = vec![
        egg(1, "2024-03-10", 5),
        egg(2, "2024-03-10", 3),
        egg(3, "2024-03-11", 2),
    ];
    let mut done = task(2, "Clean", "2024-03-10", None);
    done.completed = true;
    let tasks = vec![
        task(1, "Feed", "2024-03-10", Some("08:00")),
        done,
        task(3, "Feed", "2024-03-11", None),
    ];
    let quails = vec![
        quail(1, "Pepper", "2024-01-01", Health::Healthy),
        quail(2, "Salt", "2024-01-02", Health::Sick),
        quail(3, "Sage", "2024-01-03", Health::Healthy),
    ];

    let summary = dashboard_summary(&quails, &eggs, &tasks, date("2024-03-10"));

    assert_eq!(summary.total_quails, 3);
    assert_eq!(summary.eggs_today, 8);
    assert_eq!(summary.open_tasks_today, 1);
    assert_eq!(summary.healthy_quails, 2);
}

#[test]
fn histogram_has_seven_buckets_ending_today() {
    let eggs = vec![
        egg(1, "2024-03-10", 5),
        egg(2, "2024-03-10", 3),
        egg(3, "2024-03-11", 2),
        egg(4, "2024-03-04", 9),
    ];

    let histogram = egg_histogram(&eggs, date("2024-03-11"));

    let dates: Vec<String> = histogram
        .buckets
        .iter()
        .map(|bucket| bucket.date.to_string())
        .collect();
    assert_eq!(
        dates,
        [
            "2024-03-05",
            "2024-03-06",
            "2024-03-07",
            "2024-03-08",
            "2024-03-09",
            "2024-03-10",
            "2024-03-11"
        ]
    );
    assert_eq!(histogram.buckets[5].count, 8);
    assert_eq!(histogram.buckets[6].count, 2);
    assert_eq!(histogram.max_count, 8);
    assert_eq!(histogram.total(), 10);
    assert!((histogram.bar_height_percent(&histogram.buckets[5]) - 100.0).abs() < f64::EPSILON);
    assert!((histogram.bar_height_percent(&histogram.buckets[6]) - 25.0).abs() < f64::EPSILON);
    assert!((histogram.bar_height_percent(&histogram.buckets[0]) - 10.0).abs() < f64::EPSILON);
}

#[test]
fn empty_histogram_is_all_zero_with_unit_max() {
    let histogram = egg_histogram(&[], date("2024-03-01"));

    assert_eq!(histogram.buckets.len(), 7);
    assert!(histogram.buckets.iter().all(|bucket| bucket.count == 0));
    assert_eq!(histogram.max_count, 1);
    assert_eq!(histogram.buckets[0].date, date("2024-02-24"));
}

#[test]
fn recent_eggs_returns_ten_newest_first() {
    let eggs: Vec<EggRecord> = (1..=12)
        .map(|day| egg(i64::from(day), &format!("2024-03-{day:02}"), day))
        .collect();

    let recent = recent_eggs(&eggs);

    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].count, 12);
    assert_eq!(recent[9].count, 3);
}

#[test]
fn tasks_for_day_sorts_untimed_first_then_by_time() {
    let tasks = vec![
        task(1, "Evening feed", "2024-03-10", Some("19:00")),
        task(2, "Tomorrow", "2024-03-11", Some("07:00")),
        task(3, "Morning feed", "2024-03-10", Some("07:30")),
        task(4, "All day", "2024-03-10", None),
    ];

    let titles: Vec<&str> = tasks_for_day(&tasks, date("2024-03-10"))
        .into_iter()
        .map(|task| task.title.as_str())
        .collect();

    assert_eq!(titles, ["All day", "Morning feed", "Evening feed"]);
}

#[test]
fn activity_feed_merges_sources_newest_first_capped_at_five() {
    let quails = vec![
        quail(1, "Old", "2024-01-01", Health::Healthy),
        quail(2, "Newer", "2024-03-01", Health::Healthy),
        quail(3, "Newest", "2024-03-09", Health::Healthy),
        quail(4, "Middle", "2024-02-01", Health::Healthy),
    ];
    let eggs = vec![
        egg(1, "2024-03-10", 4),
        egg(2, "2024-03-05", 6),
        egg(3, "2024-03-08", 1),
        egg(4, "2024-02-20", 2),
    ];
    let tasks = vec![task(1, "Clean", "2024-03-07", Some("10:00"))];

    let feed = recent_activity(&quails, &eggs, &tasks);

    assert_eq!(feed.len(), 5);
    assert!(feed.windows(2).all(|pair| pair[0].timestamp >= pair[1].timestamp));
    let headlines: Vec<String> = feed.iter().map(|entry| entry.kind.headline()).collect();
    assert_eq!(
        headlines,
        [
            "Collected 4 eggs",
            "Quail added: Newest",
            "Collected 1 eggs",
            "Task: Clean",
            "Collected 6 eggs",
        ]
    );
}

#[test]
fn activity_feed_takes_at_most_three_per_source() {
    let quails: Vec<Quail> = (1..=5)
        .map(|day| quail(i64::from(day), "Q", &format!("2024-03-{day:02}"), Health::Healthy))
        .collect();

    let feed = recent_activity(&quails, &[], &[]);

    assert_eq!(feed.len(), 3);
    assert!(feed
        .iter()
        .all(|entry| matches!(entry.kind, ActivityKind::QuailAdded { .. })));
    assert_eq!(feed[0].date, date("2024-03-05"));
}

#[test]
fn store_views_use_the_clock_date_as_today() {
    let kv = MemoryKvStore::new();
    let mut flock = FlockStore::open_with_ids(
        &kv,
        FixedClock::at(2024, 3, 10, 12, 0),
        SequentialIds::boxed(),
    )
    .unwrap();
    flock.create_egg_record(EggDraft::new(5)).unwrap();
    flock.create_egg_record(EggDraft::new(3)).unwrap();
    flock
        .create_egg_record(EggDraft::new(2).on(date("2024-03-11")))
        .unwrap();
    flock.create_task(TaskDraft::new("Feed")).unwrap();

    assert_eq!(flock.dashboard().eggs_today, 8);
    assert_eq!(flock.dashboard().open_tasks_today, 1);
    assert_eq!(flock.egg_histogram().buckets[6].count, 8);
    assert_eq!(flock.today_tasks().len(), 1);
    assert_eq!(flock.recent_eggs().len(), 3);
    assert_eq!(flock.recent_activity().len(), 4);
}
