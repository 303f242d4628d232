//! Forecast aggregator - groups forecast steps into calendar days

use std::collections::HashMap;

use domain::{DayBucket, HourlyForecast, ReferenceZone};
use tracing::{debug, warn};

/// Groups flat forecast steps into per-day buckets
///
/// Two steps share a bucket iff their timestamps fall on the same calendar
/// day in the reference zone. Buckets come out in the order their day was
/// first seen; steps keep their input order inside a bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastAggregator {
    zone: ReferenceZone,
}

impl ForecastAggregator {
    /// Create an aggregator for the given reference zone
    pub const fn new(zone: ReferenceZone) -> Self {
        Self { zone }
    }

    /// Reference zone used to derive calendar days
    pub const fn zone(&self) -> ReferenceZone {
        self.zone
    }

    /// Group forecast steps by local calendar day
    pub fn group(&self, forecasts: Vec<HourlyForecast>) -> Vec<DayBucket> {
        let mut buckets: Vec<DayBucket> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for forecast in forecasts {
            let date = self.zone.local_date(&forecast.timestamp);
            let key = DayBucket::key_for(date);

            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    let start = self.zone.start_of_day(date).unwrap_or_else(|| {
                        warn!(%date, zone = %self.zone, "No local midnight, using step time");
                        forecast.timestamp
                    });
                    buckets.push(DayBucket::new(date, start));
                    index.insert(key, buckets.len() - 1);
                    buckets.len() - 1
                },
            };

            buckets[slot].push(forecast);
        }

        debug!(days = buckets.len(), zone = %self.zone, "Grouped forecast");
        buckets
    }
}
