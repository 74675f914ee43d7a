//! Back-office dashboard figures, computed client-side from the collection
//! requests and the user list.

use chrono::{Datelike, Days, NaiveDate};

use super::collection::{CollectionRequest, CollectionStatus, ProfileKind};

/// Days covered by the activity chart, ending today.
pub const ACTIVITY_DAYS: u64 = 7;

/// Number of requests in the "recent" panel.
pub const RECENT_LIMIT: usize = 5;

const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPoint {
    /// Short French date, e.g. `4 mars`.
    pub label: String,
    pub date: NaiveDate,
    pub collections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileShare {
    pub kind: ProfileKind,
    pub count: usize,
}

/// Summary row for the "recent requests" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRequest {
    pub id: String,
    pub customer: String,
    pub city: String,
    pub status: CollectionStatus,
    pub submitted_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_collections: usize,
    pub processed_collections: usize,
    /// Processed share, rounded to a whole percent; 0 with no requests.
    pub conversion_rate: u32,
    pub total_users: usize,
    pub recent: Vec<RecentRequest>,
    pub activity: Vec<ActivityPoint>,
    pub profiles: Vec<ProfileShare>,
}

pub fn short_date_fr(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_FR[date.month0() as usize])
}

impl DashboardStats {
    pub fn compute<F>(collections: &[CollectionRequest<F>], total_users: usize, today: NaiveDate) -> Self {
        let total = collections.len();
        let processed = collections
            .iter()
            .filter(|c| c.status == CollectionStatus::Processed)
            .count();
        let conversion_rate = if total == 0 {
            0
        } else {
            ((processed as f64 / total as f64) * 100.0).round() as u32
        };

        // Undated requests sort last.
        let mut by_date: Vec<&CollectionRequest<F>> = collections.iter().collect();
        by_date.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        let recent = by_date
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|c| RecentRequest {
                id: c.id.clone(),
                customer: c.draft.personal_info.full_name(),
                city: c.draft.city.clone(),
                status: c.status,
                submitted_at: c.submitted_at,
            })
            .collect();

        let activity = (0..ACTIVITY_DAYS)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|date| ActivityPoint {
                label: short_date_fr(date),
                date,
                collections: collections
                    .iter()
                    .filter(|c| c.submitted_at == Some(date))
                    .count(),
            })
            .collect();

        let profiles = [ProfileKind::Invoice, ProfileKind::Equipment]
            .into_iter()
            .map(|kind| ProfileShare {
                kind,
                count: collections
                    .iter()
                    .filter(|c| c.draft.profile_kind() == Some(kind))
                    .count(),
            })
            .collect();

        Self {
            total_collections: total,
            processed_collections: processed,
            conversion_rate,
            total_users,
            recent,
            activity,
            profiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::collection::{CollectionDraft, ConsumptionProfile};

    fn request(id: &str, status: CollectionStatus, date: Option<NaiveDate>) -> CollectionRequest<()> {
        let mut draft = CollectionDraft::default();
        draft.personal_info.first_name = "Awa".into();
        draft.personal_info.name = id.to_uppercase();
        draft.profile = Some(ConsumptionProfile::Equipment(Vec::new()));
        CollectionRequest {
            id: id.into(),
            status,
            submitted_at: date,
            step: 5,
            draft,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).expect("valid date")
    }

    #[test]
    fn empty_input_gives_zero_rate_and_seven_empty_days() {
        let stats = DashboardStats::compute::<()>(&[], 3, day(10));
        assert_eq!(stats.conversion_rate, 0);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.activity.len(), 7);
        assert_eq!(stats.activity[0].label, "4 mars");
        assert_eq!(stats.activity[6].label, "10 mars");
        assert!(stats.activity.iter().all(|p| p.collections == 0));
    }

    #[test]
    fn rounds_conversion_rate() {
        let collections = [
            request("a", CollectionStatus::Processed, Some(day(1))),
            request("b", CollectionStatus::Pending, Some(day(2))),
            request("c", CollectionStatus::Rejected, Some(day(3))),
        ];
        let stats = DashboardStats::compute(&collections, 0, day(3));
        assert_eq!(stats.processed_collections, 1);
        assert_eq!(stats.conversion_rate, 33);
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let collections: Vec<_> = (1..=7)
            .map(|d| request(&format!("r{d}"), CollectionStatus::Pending, Some(day(d))))
            .chain(std::iter::once(request("undated", CollectionStatus::Pending, None)))
            .collect();
        let stats = DashboardStats::compute(&collections, 0, day(7));
        let ids: Vec<_> = stats.recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r7", "r6", "r5", "r4", "r3"]);
        assert_eq!(stats.recent[0].customer, "Awa R7");
    }

    #[test]
    fn buckets_activity_by_exact_date() {
        let collections = [
            request("a", CollectionStatus::Pending, Some(day(9))),
            request("b", CollectionStatus::Pending, Some(day(9))),
            request("c", CollectionStatus::Pending, Some(day(1))),
        ];
        let stats = DashboardStats::compute(&collections, 0, day(10));
        let nine = stats.activity.iter().find(|p| p.date == day(9)).expect("bucket");
        assert_eq!(nine.collections, 2);
        assert_eq!(stats.activity.iter().map(|p| p.collections).sum::<usize>(), 2);
        assert_eq!(stats.profiles[1], ProfileShare { kind: ProfileKind::Equipment, count: 3 });
    }
}
