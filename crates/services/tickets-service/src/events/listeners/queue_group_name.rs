/// Queue group shared by every tickets-service instance, so each event is
/// handled by exactly one of them.
pub const QUEUE_GROUP_NAME: &str = "tickets-service";
