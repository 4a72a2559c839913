use std::{
    sync::{LazyLock, RwLock},
    time::{Duration, Instant},
};

/// Frame clock shared by the whole app. `delta` is the wall time between the
/// two most recent `update_time` calls.
pub struct Time {
    pub last_update: Option<Instant>,
    pub delta: Duration,
}

pub static TIME: LazyLock<RwLock<Time>> = LazyLock::new(|| {
    RwLock::new(Time {
        last_update: None,
        delta: Duration::default(),
    })
});

pub fn update_time() {
    let mut time = TIME.write().unwrap();
    let now = Instant::now();
    if let Some(last_update) = time.last_update {
        time.delta = now - last_update;
    }
    time.last_update = Some(now);
}
