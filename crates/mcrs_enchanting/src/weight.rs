use mcrs_random::RandomInteger;
use serde::{Deserialize, Serialize};

/// Largest total weight [`WeightedList::pick`] can draw from without bias:
/// the draw range `[0, total - 1]` has to fit in an `i32`.
pub const MAX_TOTAL_WEIGHT: u64 = i32::MAX as u64 + 1;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Weighted<T> {
    data: T,
    weight: u32,
}

impl<T> Weighted<T> {
    pub const fn new(data: T, weight: u32) -> Self {
        Self { data, weight }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Ordered list of weighted entries. Order only decides which slice of the
/// draw range an entry owns, not its probability.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WeightedList<T> {
    entries: Vec<Weighted<T>>,
}

impl<T> Default for WeightedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedList<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, data: T, weight: u32) {
        self.entries.push(Weighted::new(data, weight));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Weighted<T>> {
        self.entries.iter()
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| e.weight as u64).sum()
    }

    pub fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
        self.entries.retain(|e| f(&e.data));
    }

    /// Removes the first entry matching `predicate`, returning it.
    pub fn remove_first(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<Weighted<T>> {
        let index = self.entries.iter().position(|e| predicate(&e.data))?;
        Some(self.entries.remove(index))
    }

    /// Draws one entry with probability `weight / total_weight`.
    ///
    /// Returns `None` for an empty list or a zero total weight. Lists heavier
    /// than [`MAX_TOTAL_WEIGHT`] only draw from the first `MAX_TOTAL_WEIGHT`
    /// units.
    pub fn pick<R>(&self, random: &mut R) -> Option<&T>
    where
        R: RandomInteger + ?Sized,
    {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let max = i32::try_from(total.min(MAX_TOTAL_WEIGHT) - 1).unwrap_or(i32::MAX);
        let mut remainder = random.generate_integer(0, max) as i64;
        for entry in &self.entries {
            remainder -= entry.weight as i64;
            if remainder < 0 {
                return Some(&entry.data);
            }
        }
        None
    }
}

impl<T> FromIterator<Weighted<T>> for WeightedList<T> {
    fn from_iter<I: IntoIterator<Item = Weighted<T>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a WeightedList<T> {
    type Item = &'a Weighted<T>;
    type IntoIter = std::slice::Iter<'a, Weighted<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
