use opsdesk_domain::{ExtraItems, NewRequestedItem};

use crate::validation::{ValidationError, ValidationResult};

/// Client-side checks run before a requested item is created.
///
/// `businessId`, `itemName` and `qty` must be non-blank, and a request that
/// declares extra items must describe them. Every violation is reported.
pub fn validate_new_requested_item(item: &NewRequestedItem) -> ValidationResult<()> {
    let mut errors = ValidationError::new();

    errors.require("businessId", Some(item.business_id.as_str()), "Business is required");
    errors.require("itemName", Some(item.item_name.as_str()), "Item name is required");
    errors.require("qty", Some(item.qty.as_str()), "Quantity is required");

    if item.extra_items == ExtraItems::Yes {
        errors.require(
            "extraItemsDescriptions",
            item.extra_items_descriptions.as_deref(),
            "Describe the extra items",
        );
    }

    errors.into_result(())
}
