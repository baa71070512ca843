use super::*;

fn ms(v: u64) -> TimestampMs {
    TimestampMs(v)
}

#[test]
fn fires_once_after_idle_window() {
    let mut d = Debouncer::new(Duration::from_millis(200));
    assert!(d.schedule(ms(0), 1).is_none());
    assert_eq!(d.poll(ms(199)), None);
    assert_eq!(d.poll(ms(200)), Some(1));
    assert_eq!(d.poll(ms(400)), None);
    assert!(!d.is_pending());
}

#[test]
fn burst_collapses_to_last_task() {
    let mut d = Debouncer::new(Duration::from_millis(200));
    let mut fired = Vec::new();
    let mut now = 0;
    for edit in 0..5 {
        d.schedule(ms(now), edit);
        now += 50;
        if let Some(t) = d.poll(ms(now)) {
            fired.push((now, t));
        }
    }
    assert_eq!(d.due_at(), Some(ms(400)));
    for t in (now..=1_000).step_by(10) {
        if let Some(task) = d.poll(ms(t)) {
            fired.push((t, task));
        }
    }
    assert_eq!(fired, vec![(400, 4)]);
}

#[test]
fn replace_returns_previous_task() {
    let mut d = Debouncer::new(Duration::from_millis(200));
    d.schedule(ms(0), "a");
    assert_eq!(d.schedule(ms(10), "b"), Some("a"));
    assert_eq!(d.due_at(), Some(ms(210)));
}

#[test]
fn cancel_prevents_firing() {
    let mut d = Debouncer::new(Duration::from_millis(200));
    d.schedule(ms(0), ());
    assert_eq!(d.cancel(), Some(()));
    assert_eq!(d.poll(ms(1_000)), None);
    assert_eq!(d.delay(), Duration::from_millis(200));
}
