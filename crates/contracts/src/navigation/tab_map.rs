use super::TabKey;
use std::ops::{Index, IndexMut};

/// Fixed-size record holding exactly one value per [`TabKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMap<T>([T; TabKey::COUNT]);

impl<T> TabMap<T> {
    pub fn from_fn(mut f: impl FnMut(TabKey) -> T) -> Self {
        Self(std::array::from_fn(|i| f(TabKey::ALL[i])))
    }

    pub fn get(&self, key: TabKey) -> &T {
        &self.0[key.index()]
    }

    pub fn set(&mut self, key: TabKey, value: T) {
        self.0[key.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TabKey, &T)> {
        TabKey::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<TabKey> for TabMap<T> {
    type Output = T;

    fn index(&self, key: TabKey) -> &T {
        self.get(key)
    }
}

impl<T> IndexMut<TabKey> for TabMap<T> {
    fn index_mut(&mut self, key: TabKey) -> &mut T {
        &mut self.0[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_independent() {
        let mut map = TabMap::from_fn(|key| key.as_str().len());
        map[TabKey::Ethics] = 0;
        assert_eq!(map[TabKey::Ethics], 0);
        assert_eq!(map[TabKey::Company], "company".len());

        let keys: Vec<TabKey> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, TabKey::ALL.to_vec());
    }
}
