use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Keyed registry of background tasks. Spawning under an occupied key aborts
/// the previous task, which gives the debounce timer and the delayed re-poll
/// their at-most-one-live-instance invariant for free.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            handle.abort();
        }
    }

    pub fn contains(&self, key: &'static str) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn abort(&mut self, key: &'static str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn fire_after(
        counter: Arc<AtomicUsize>,
        delay: Duration,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn spawning_same_key_aborts_previous_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut tasks = TaskManager::new();

        tasks.spawn("timer", fire_after(fired.clone(), Duration::from_millis(500)));
        tasks.spawn("timer", fire_after(fired.clone(), Duration::from_millis(500)));
        tasks.spawn("timer", fire_after(fired.clone(), Duration::from_millis(500)));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn abort_removes_pending_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut tasks = TaskManager::new();

        tasks.spawn("timer", fire_after(fired.clone(), Duration::from_millis(500)));
        tasks.abort("timer");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_run_independently() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut tasks = TaskManager::new();

        tasks.spawn("a", fire_after(fired.clone(), Duration::from_millis(100)));
        tasks.spawn("b", fire_after(fired.clone(), Duration::from_millis(100)));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
