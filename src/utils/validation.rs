use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the target or any of the numbers is NaN or infinite.
pub fn validate_inputs(target: f64, numbers: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating target {} with numbers {:?}", target, numbers);

    if !target.is_finite() {
        warn!("Target is not finite: {}", target);
        return Err(UtilsError::NonFiniteTarget(target));
    }

    if let Some(&bad) = numbers.iter().find(|n| !n.is_finite()) {
        warn!("Source number is not finite: {}", bad);
        return Err(UtilsError::NonFiniteNumber(bad));
    }

    debug!("Input validation successful");
    Ok(())
}
