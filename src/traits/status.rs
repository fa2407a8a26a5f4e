use serde::{de::DeserializeOwned, Serialize};

/// A trait which holds the running state of an optimizer between steps.
pub trait Status: Clone + Default + Serialize + DeserializeOwned {
    /// Resets the status to its default state.
    fn reset(&mut self);
    /// Returns the message of the minimization.
    fn message(&self) -> &str;
    /// Sets the message of the minimization.
    fn update_message(&mut self, message: &str);
}
