use time::OffsetDateTime;
use time::macros::datetime;

/// The zero `createdAt`: what a record carries when no creation time was set.
pub const UNSET: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

/// Current wall-clock time, normalized to UTC.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
