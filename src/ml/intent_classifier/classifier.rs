//! Intent classifier trait definition.

use crate::error::Result;

use super::types::Prediction;

/// Intent classifier trait.
///
/// Implementations turn a (pivot-language) message into exactly one intent
/// tag. There is no rejection: even a weak match yields a tag, and callers
/// that want a floor inspect [`Prediction::confidence`].
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent for a given message.
    ///
    /// # Arguments
    /// * `text` - The message to classify
    ///
    /// # Returns
    /// The best-scoring tag and its probability
    fn predict(&self, text: &str) -> Result<Prediction>;

    /// Tags this classifier can return.
    fn tags(&self) -> &[String];

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
