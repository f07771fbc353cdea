/// Anything that has a language setting, such as a connected player.
///
/// The host server provides an implementation for its own player type. Plain
/// locale strings implement it too, which is handy for consoles and tests.
pub trait Player {
    /// The caller's locale code, for example "en_US".
    fn locale(&self) -> &str;
}

impl Player for str {
    fn locale(&self) -> &str {
        self
    }
}

impl Player for String {
    fn locale(&self) -> &str {
        self
    }
}

impl<T: Player + ?Sized> Player for &T {
    fn locale(&self) -> &str {
        (**self).locale()
    }
}
