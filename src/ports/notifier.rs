/// Port for fire-and-forget, user-visible transient messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}
