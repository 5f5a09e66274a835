use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

/// A named event counter, cheap enough to sit on the per-ray hot path.
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }

    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

pub fn report_counters() {
    let counters = COUNTERS.lock().unwrap();
    for (counter_name, counter) in counters.iter() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, counter.value())
    }
}

lazy_static::lazy_static! {
    pub static ref COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

/// Bump the named counter. Compiles to nothing unless the `counter`
/// feature is enabled.
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use std::sync::Arc;
            use $crate::utils::counter::{Counter, COUNTERS};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: Arc<Counter> = {
                    let mut counters = COUNTERS.lock().unwrap();
                    counters
                        .entry($descr)
                        .or_insert_with(|| Arc::new(Counter::new()))
                        .clone()
                };
            }
            COUNTER_REF.inc();
        }
    };
}

pub use counter;
