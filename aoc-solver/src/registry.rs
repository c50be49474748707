//! Solver registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage covers (2015-2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for a year/day, or None when out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory that parses input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for an immutable [`SolverRegistry`]
///
/// Registration fails on duplicates and on year/day values outside
/// 2015-2034 / 1-25.
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_solver_plugins(|plugin| plugin.year == 2023)
///     .unwrap()
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Storage and Registry
// ============================================================================

/// Read-only view of the registered factories, in (year, day) order
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Immutable registry mapping year/day to solver factories
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook, so solvers of different types can sit in
/// one inventory.
///
/// Every `Solver + Sync + 'static` gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance: Box<dyn DynSolver + '_> =
                Box::new(SolverInstance::<S>::new(year, day, input)?);
            Ok(instance)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Inventory entry describing one solver plugin.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; the tags let the
/// runner select subsets (e.g. `"2023"`, `"grid"`).
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type on a builder variable without the plugin system
///
/// # Example
///
/// ```
/// use aoc_solver::{register_solver, AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, Echo, 2023, 1);
/// let registry = builder.build();
///
/// let mut solver = registry.create_solver(2023, 1, " hi ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_factory(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str| {
                    let instance: Box<dyn $crate::DynSolver + '_> = Box::new(
                        $crate::SolverInstance::<$solver>::new($year, $day, input)?,
                    );
                    Ok(instance)
                },
            )
            .expect("Failed to register solver");
    };
}
