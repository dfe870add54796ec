//! Category Handlers

pub(crate) mod create;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use ordering_app::domain::categories::records::{CategoryRecord, CategoryUuid};

    pub(super) fn make_category(uuid: CategoryUuid, name: &str) -> CategoryRecord {
        CategoryRecord {
            uuid,
            name: name.to_string(),
            addons: Some("extra cheese".to_string()),
            removable_items: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
