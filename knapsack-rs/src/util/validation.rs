use crate::KSError;
use crate::entities::Item;

/// Rejects items the solvers cannot reason about:
/// negative or non-finite values, and zero sizes (for which the value density is undefined).
pub fn validate_items(items: &[Item]) -> Result<(), KSError> {
    for (idx, item) in items.iter().enumerate() {
        if !item.value.is_finite() || item.value < 0.0 {
            return Err(KSError::InvalidInput(format!(
                "item {idx} has an invalid value: {}",
                item.value
            )));
        }
        if item.size == 0 {
            return Err(KSError::InvalidInput(format!("item {idx} has size 0")));
        }
    }
    Ok(())
}
