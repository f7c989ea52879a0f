use serde::Deserialize;
use validator::Validate;

use crate::domain::archive::ArchiveItem;
use crate::domain::types::NonEmptyString;
use crate::forms::FormError;

/// Upper bound for the selected item as stored in the cookie session, after
/// the item JSON is encoded as a session value and again inside the cookie
/// payload.
pub const ARCHIVE_ITEM_MAX_BYTES: usize = 1536;

#[derive(Deserialize, Validate)]
/// Archive record the user opened from the archive list.
pub struct SelectArchiveItemForm {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 160))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub category: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub date: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: String,
}

/// Size of `item` once nested the way the cookie session stores it.
fn stored_size(item: &ArchiveItem) -> Result<usize, serde_json::Error> {
    let value = serde_json::to_string(item)?;
    let entry = serde_json::to_string(&value)?;
    Ok(serde_json::to_string(&entry)?.len())
}

impl TryFrom<SelectArchiveItemForm> for ArchiveItem {
    type Error = FormError;

    fn try_from(form: SelectArchiveItemForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let item = ArchiveItem {
            id: NonEmptyString::new(form.id)?.into_inner(),
            title: NonEmptyString::new(form.title)?.into_inner(),
            category: form.category.trim().to_string(),
            date: form.date.trim().to_string(),
            summary: form.summary.trim().to_string(),
        };

        match stored_size(&item) {
            Ok(size) if size <= ARCHIVE_ITEM_MAX_BYTES => Ok(item),
            Ok(size) => Err(FormError::TooLarge {
                size,
                max: ARCHIVE_ITEM_MAX_BYTES,
            }),
            Err(err) => Err(FormError::Encoding(err.to_string())),
        }
    }
}
