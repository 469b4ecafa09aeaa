use std::time::Duration;

pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);
pub const MIN_QUERY_LEN: usize = 2;

/// What a search keystroke should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Debounce {
    /// Input emptied out: drop the results now, cancel any pending timer,
    /// issue nothing.
    Clear,
    /// Schedule `query` once the window elapses. Carries the ticket that a
    /// completed response must present to be rendered.
    Schedule { seq: u64, query: String },
}

/// Sequencing side of the debounced search box.
///
/// The timer itself lives in the task registry (one key, abort-on-replace),
/// so this type only has to decide per keystroke and hand out monotonically
/// increasing tickets. A response whose ticket is not the latest issued is
/// stale and gets discarded, which keeps an out-of-order slow response from
/// overwriting the results of a newer query.
#[derive(Debug, Default)]
pub struct SearchDebouncer {
    seq: u64,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, input: &str) -> Debounce {
        let query = input.trim();
        // Every keystroke invalidates the tickets before it, including the
        // clearing one: a response to an earlier query must not resurface
        // after the box was emptied.
        self.seq += 1;

        if query.is_empty() {
            return Debounce::Clear;
        }

        Debounce::Schedule {
            seq: self.seq,
            query: query.to_string(),
        }
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Whether a scheduled query is long enough to hit the network.
    /// Sub-minimum queries take a ticket but must never arm a timer.
    pub fn should_fire(query: &str) -> bool {
        query.chars().count() >= MIN_QUERY_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_clears_without_scheduling() {
        let mut debouncer = SearchDebouncer::new();
        assert_eq!(debouncer.accept(""), Debounce::Clear);
        assert_eq!(debouncer.accept("   "), Debounce::Clear);
    }

    #[test]
    fn input_is_trimmed_before_scheduling() {
        let mut debouncer = SearchDebouncer::new();
        match debouncer.accept("  ab  ") {
            Debounce::Schedule { query, .. } => assert_eq!(query, "ab"),
            other => panic!("expected schedule, got {other:?}"),
        }
    }

    #[test]
    fn short_queries_schedule_but_never_fire() {
        let mut debouncer = SearchDebouncer::new();
        let decision = debouncer.accept("a");
        assert!(matches!(decision, Debounce::Schedule { .. }));
        assert!(!SearchDebouncer::should_fire("a"));
        assert!(SearchDebouncer::should_fire("ab"));
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut debouncer = SearchDebouncer::new();
        let first = match debouncer.accept("ab") {
            Debounce::Schedule { seq, .. } => seq,
            other => panic!("expected schedule, got {other:?}"),
        };
        let second = match debouncer.accept("abc") {
            Debounce::Schedule { seq, .. } => seq,
            other => panic!("expected schedule, got {other:?}"),
        };

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn clearing_invalidates_in_flight_responses() {
        let mut debouncer = SearchDebouncer::new();
        let seq = match debouncer.accept("ab") {
            Debounce::Schedule { seq, .. } => seq,
            other => panic!("expected schedule, got {other:?}"),
        };
        debouncer.accept("");

        assert!(!debouncer.is_current(seq));
    }

    #[test]
    fn burst_of_keystrokes_yields_one_current_ticket_for_final_text() {
        let mut debouncer = SearchDebouncer::new();
        let mut last = None;
        for input in ["g", "go", "goa", "goat"] {
            if let Debounce::Schedule { seq, query } = debouncer.accept(input) {
                last = Some((seq, query));
            }
        }

        let (seq, query) = last.unwrap();
        assert!(debouncer.is_current(seq));
        assert_eq!(query, "goat");
    }
}
