use std::ops::{Deref, DerefMut};

pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: std::time::Duration,
}

impl<T> Deref for TimedResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.res
    }
}

impl<T> DerefMut for TimedResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.res
    }
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = std::time::Instant::now();
    let res = f();

    TimedResult {
        res,
        elapsed: begin.elapsed(),
    }
}

pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let timed_res = timed_scope(f);
    log::log!(target: "scoped timer", log::Level::Info, "{}: {}", label, format_elapsed(timed_res.elapsed));
    timed_res
}

pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    let secs = elapsed.as_secs_f32();
    if elapsed < std::time::Duration::from_millis(1) {
        format!("{:.3}µs", secs * 1_000_000.)
    } else if elapsed < std::time::Duration::from_secs(1) {
        format!("{:.3}ms", secs * 1_000.)
    } else if elapsed < std::time::Duration::from_secs(60) {
        format!("{secs:.3}s")
    } else {
        let minutes = (secs / 60.0) as u32;
        let h = minutes / 60;
        let m = minutes % 60;
        let s = (secs % 60.0) as u32;
        format!("{h}h{m}m{s}s")
    }
}
