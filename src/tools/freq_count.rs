/// Occurrence count for every byte value seen in an input.
///
/// Backed by a fixed 256 slot array, so iteration is always in ascending symbol order.
/// That ordering is what the tree builder relies on for its tie-break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// An empty table (every count zero).
    pub fn new() -> Self {
        Self {
            counts: vec![0_u64; 256],
        }
    }

    /// Set the count for one symbol. Used when a table is read back from a container.
    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Count recorded for `symbol` (0 if it never occurred).
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts, which equals the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (symbol, count) pairs for every symbol present, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    data.iter().for_each(|&el| table.counts[el as usize] += 1);
    table
}
