use chrono::{DateTime, Local, NaiveDate};

/// Wall-clock source
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Today's calendar date in local time
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a settable instant, for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub std::rc::Rc<std::cell::Cell<DateTime<Local>>>);

#[cfg(test)]
impl FixedClock {
    /// Clock at noon of the given day
    pub fn at(y: i32, m: u32, d: u32) -> Self {
        Self(std::rc::Rc::new(std::cell::Cell::new(Self::noon(y, m, d))))
    }

    pub fn set_day(&self, y: i32, m: u32, d: u32) {
        self.0.set(Self::noon(y, m, d));
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        use chrono::TimeZone;
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .expect("valid local date")
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0.get()
    }
}
