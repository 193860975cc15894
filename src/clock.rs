use chrono::NaiveDateTime;

/// Source of the current local date-time.
///
/// History records are timestamped through this trait, so tests can pin the
/// clock instead of depending on ambient system time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the instant it was built with.
#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
