use super::dashboard_model::Notice;

/// Channel for messages the user must see, such as a failed refresh.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}
