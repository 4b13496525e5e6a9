/// Lifecycle state an event must carry to be counted
pub const EVENT_STATE_ONLINE: &str = "online";

/// Participant lifecycle state for the registered count
pub const PARTICIPANT_STATE_REGISTERED: &str = "registered";

/// Booking state counted towards the acceptance rate
pub const BOOKING_STATE_ACCEPTED: &str = "accepted";

/// Sentinel state for bookings with a NULL state column
pub const BOOKING_STATE_UNKNOWN: &str = "unknown";

/// Administrator dashboard opt-in flag values
pub const DASHBOARD_FLAG_OPTED_IN: &str = "1";
pub const DASHBOARD_FLAG_OPTED_OUT: &str = "0";

// Metric names
pub const METRIC_TOTAL_PARTICIPANTS: &str = "total_participants";
pub const METRIC_NEW_PARTICIPANTS: &str = "new_participants";
pub const METRIC_REGISTERED_PARTICIPANTS: &str = "registered_participants";
pub const METRIC_TOTAL_MEETINGS: &str = "total_meetings";
pub const METRIC_PARTICIPANT_COUNT: &str = "participant_count";
pub const METRIC_MEETING_ACCEPTANCE_RATE: &str = "meeting_acceptance_rate";
pub const METRIC_NEWSLETTER_OPTED_IN: &str = "newsletter_opted_in";
pub const METRIC_NEWSLETTER_OPTED_OUT: &str = "newsletter_opted_out";
pub const METRIC_DASHBOARD_OPTED_IN: &str = "dashboard_opted_in";
pub const METRIC_DASHBOARD_OPTED_OUT: &str = "dashboard_opted_out";

/// Prefix for the per-state meeting metrics (`meetings_accepted`, ...)
pub const METRIC_MEETINGS_PREFIX: &str = "meetings_";

// Metric categories
pub const CATEGORY_PARTICIPANTS: &str = "participants";
pub const CATEGORY_MEETINGS: &str = "meetings";
pub const CATEGORY_NEWSLETTER: &str = "newsletter";
pub const CATEGORY_APP_USAGE: &str = "app_usage";

/// Date format used for metric date columns (SQLite stores dates as TEXT)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
