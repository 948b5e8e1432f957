/// Port for reading configuration values by key.
///
/// Implementations cover the process environment, `.env` files, and layered
/// combinations of both.
pub trait ConfigSource {
    /// Value for `key`, or `None` when the source does not define it.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
