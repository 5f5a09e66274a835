use std::{fmt::Display, sync::atomic};

/// A console progress bar over a known amount of work, shared by reference
/// between the workers (who `inc`) and the writer task (who `print`s).
pub struct Progress {
    current: atomic::AtomicUsize,
    done: atomic::AtomicBool,
    max: usize,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            done: Default::default(),
            max,
        }
    }

    pub fn inc(&self) -> usize {
        self.current.fetch_add(1, atomic::Ordering::SeqCst)
    }

    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn print(&self) {
        use std::io::Write;

        if self.done.load(atomic::Ordering::SeqCst) {
            return;
        }
        if self.get_raw() >= self.max {
            self.done.store(true, atomic::Ordering::SeqCst);
            println!("\r{}", self);
        } else {
            print!("\r{}", self);
        }
        let _ = std::io::stdout().flush();
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = 50;
        let val = self.get_raw() as f32 / self.max as f32;
        let width = ((n - 1) as f32 * val).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {val:.1}%",
            empty = "",
            width_left = width,
            width_right = n - width,
            val = 100. * val
        )
    }
}
