//! Shop-local wall clock.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Where "now" comes from when deciding which times have already passed.
#[derive(Debug, Clone, Copy)]
pub enum ShopClock {
    /// The system clock, read in the shop's timezone.
    System(Tz),
    /// A frozen shop-local instant.
    Fixed(NaiveDateTime),
}

impl ShopClock {
    pub fn now_local(&self) -> NaiveDateTime {
        match self {
            ShopClock::System(tz) => Utc::now().with_timezone(tz).naive_local(),
            ShopClock::Fixed(now) => *now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_does_not_move() {
        let instant = NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(13, 10, 0)
            .unwrap();
        let clock = ShopClock::Fixed(instant);
        assert_eq!(clock.now_local(), instant);
        assert_eq!(clock.now_local(), clock.now_local());
    }

    #[test]
    fn system_clock_reads_shop_timezone() {
        let tokyo = ShopClock::System(chrono_tz::Asia::Tokyo).now_local();
        let utc = Utc::now().naive_utc();
        let offset = (tokyo - utc).num_minutes();
        assert!((539..=541).contains(&offset), "offset was {} minutes", offset);
    }
}
