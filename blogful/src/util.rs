pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl<T: AsRef<str>> StrExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonblank_to_some() {
        assert_eq!("".nonblank_to_some(), None);
        assert_eq!(" \t\n".nonblank_to_some(), None);
        assert_eq!(" /entry/add ".nonblank_to_some(), Some("/entry/add".into()));
    }
}
