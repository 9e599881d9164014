use std::borrow::Cow;

/// A source of labels that can be queried by index without materializing the
/// whole list, e.g. a memory view producing one label per address.
pub trait IndexableSource {
    fn len(&self) -> usize;
    fn string_at(&self, idx: usize) -> Cow<'_, str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The choices a picker selects from. Indices are stable and the order is the
/// display order when no query narrows the list.
#[derive(Clone, Copy)]
pub enum Choices<'a> {
    Fixed(&'a [String]),
    Indexable(&'a dyn IndexableSource),
}

impl<'a> Choices<'a> {
    pub fn indexable(source: &'a dyn IndexableSource) -> Self {
        Choices::Indexable(source)
    }

    pub fn len(&self) -> usize {
        match *self {
            Choices::Fixed(items) => items.len(),
            Choices::Indexable(source) => source.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Out of range indices yield an empty label rather than panicking.
    pub fn string_at(&self, idx: usize) -> Cow<'a, str> {
        match *self {
            Choices::Fixed(items) => items
                .get(idx)
                .map(|s| Cow::Borrowed(s.as_str()))
                .unwrap_or_default(),
            Choices::Indexable(source) => {
                if idx < source.len() {
                    source.string_at(idx)
                } else {
                    Cow::Borrowed("")
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Cow<'a, str>)> + '_ {
        (0..self.len()).map(move |idx| (idx, self.string_at(idx)))
    }
}

impl<'a> From<&'a [String]> for Choices<'a> {
    fn from(items: &'a [String]) -> Self {
        Choices::Fixed(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Squares(usize);

    impl IndexableSource for Squares {
        fn len(&self) -> usize {
            self.0
        }

        fn string_at(&self, idx: usize) -> Cow<'_, str> {
            Cow::Owned((idx * idx).to_string())
        }
    }

    #[test]
    fn test_fixed_choices() {
        let items = vec!["a".to_string(), "b".to_string()];
        let choices = Choices::from(items.as_slice());
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.string_at(1), "b");
        assert_eq!(choices.string_at(2), "");
    }

    #[test]
    fn test_indexable_choices() {
        let squares = Squares(4);
        let choices = Choices::indexable(&squares);
        assert_eq!(choices.len(), 4);
        assert_eq!(choices.string_at(3), "9");
        assert_eq!(choices.string_at(4), "");
        let all: Vec<String> = choices.iter().map(|(_, s)| s.into_owned()).collect();
        assert_eq!(all, vec!["0", "1", "4", "9"]);
    }
}
