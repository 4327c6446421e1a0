use std::fmt::{Debug, Display, Formatter, Result};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counts for one expanded generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// States expanded.
    pub frontier: usize,
    /// Successors generated, including duplicates.
    pub created: usize,
    /// Successors which were already known.
    pub duplicates: usize,
    /// Successors which form the next generation.
    pub new: usize,
    /// All distinct states discovered so far, including the next generation.
    pub discovered: usize,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    generations: Vec<GenerationStats>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub(crate) fn add_generation(&mut self, generation: GenerationStats) {
        self.generations.push(generation);
    }

    pub fn generations(&self) -> &[GenerationStats] {
        &self.generations
    }

    /// What the solver prints after each generation.
    pub fn discovered(&self) -> Vec<usize> {
        self.generations.iter().map(|g| g.discovered).collect()
    }

    pub fn total_created(&self) -> usize {
        self.generations.iter().map(|g| g.created).sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.generations.iter().map(|g| g.duplicates).sum()
    }

    pub fn total_discovered(&self) -> usize {
        // the initial state is there before the first generation
        self.generations.last().map_or(1, |g| g.discovered)
    }
}

fn separated(n: usize) -> String {
    // separator doesn't support usize
    (n as u64).separated_string()
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let created: Vec<_> = self.generations.iter().map(|g| g.created).collect();
        let duplicates: Vec<_> = self.generations.iter().map(|g| g.duplicates).collect();
        let new: Vec<_> = self.generations.iter().map(|g| g.new).collect();
        writeln!(f, "created by depth: {:?}", created)?;
        writeln!(f, "duplicates by depth: {:?}", duplicates)?;
        writeln!(f, "new by depth: {:?}", new)?;
        writeln!(f, "total created: {}", separated(self.total_created()))?;
        writeln!(f, "total duplicates: {}", separated(self.total_duplicates()))?;
        writeln!(f, "total discovered: {}", separated(self.total_discovered()))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "States created total: {}", separated(self.total_created()))?;
        writeln!(f, "Duplicates total: {}", separated(self.total_duplicates()))?;
        writeln!(f, "Distinct states total: {}", separated(self.total_discovered()))?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Expanded", "Created", "Duplicates", "New", "Discovered"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        for (depth, g) in self.generations.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&separated(g.frontier)),
                Cell::new(&separated(g.created)),
                Cell::new(&separated(g.duplicates)),
                Cell::new(&separated(g.new)),
                Cell::new(&separated(g.discovered)),
            ]));
        }
        write!(f, "{}", table)
    }
}
