//! Regular expression flags: parsing, descriptions, and engine support.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::compiler::{CompileError, PatternCompiler};

/// One of the eight recognised flag letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Global,
    IgnoreCase,
    Multiline,
    DotAll,
    Unicode,
    Sticky,
    Indices,
    UnicodeSets,
}

impl Flag {
    pub const ALL: [Self; 8] = [
        Self::Global,
        Self::IgnoreCase,
        Self::Multiline,
        Self::DotAll,
        Self::Unicode,
        Self::Sticky,
        Self::Indices,
        Self::UnicodeSets,
    ];

    /// Look up a flag by its letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.letter() == ch)
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Global => 'g',
            Self::IgnoreCase => 'i',
            Self::Multiline => 'm',
            Self::DotAll => 's',
            Self::Unicode => 'u',
            Self::Sticky => 'y',
            Self::Indices => 'd',
            Self::UnicodeSets => 'v',
        }
    }

    /// One-line description of what the flag does.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Global => "Global: find all matches, not just the first",
            Self::IgnoreCase => "Insensitive: ignore case",
            Self::Multiline => "Multiline: ^ and $ match line breaks",
            Self::DotAll => "DotAll: . also matches line breaks",
            Self::Unicode => "Unicode: treat pattern as Unicode",
            Self::Sticky => "Sticky: match only at the current search position",
            Self::Indices => "Indices: provide start/end indices for matches",
            Self::UnicodeSets => "Set notation: enable Unicode set syntax",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The resolved set of flags a pattern is compiled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FlagSet {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
    pub indices: bool,
    pub unicode_sets: bool,
}

impl FlagSet {
    /// Whether `flag` is set.
    #[must_use]
    pub const fn contains(&self, flag: Flag) -> bool {
        match flag {
            Flag::Global => self.global,
            Flag::IgnoreCase => self.ignore_case,
            Flag::Multiline => self.multiline,
            Flag::DotAll => self.dot_all,
            Flag::Unicode => self.unicode,
            Flag::Sticky => self.sticky,
            Flag::Indices => self.indices,
            Flag::UnicodeSets => self.unicode_sets,
        }
    }

    /// Set `flag`.
    pub const fn insert(&mut self, flag: Flag) {
        match flag {
            Flag::Global => self.global = true,
            Flag::IgnoreCase => self.ignore_case = true,
            Flag::Multiline => self.multiline = true,
            Flag::DotAll => self.dot_all = true,
            Flag::Unicode => self.unicode = true,
            Flag::Sticky => self.sticky = true,
            Flag::Indices => self.indices = true,
            Flag::UnicodeSets => self.unicode_sets = true,
        }
    }

    /// A set holding only `flag`.
    #[must_use]
    pub const fn single(flag: Flag) -> Self {
        let mut set = Self {
            global: false,
            ignore_case: false,
            multiline: false,
            dot_all: false,
            unicode: false,
            sticky: false,
            indices: false,
            unicode_sets: false,
        };
        set.insert(flag);
        set
    }

    /// Iterate over the flags that are set, in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(|flag| self.contains(*flag))
    }
}

impl FromStr for FlagSet {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::default();
        for ch in s.chars() {
            let flag = Flag::from_char(ch).ok_or(CompileError::UnsupportedFlag(ch))?;
            if set.contains(flag) {
                return Err(CompileError::InvalidPattern {
                    message: format!("duplicate flag '{ch}'"),
                });
            }
            set.insert(flag);
        }

        if set.unicode && set.unicode_sets {
            return Err(CompileError::InvalidPattern {
                message: "flags 'u' and 'v' cannot be combined".to_string(),
            });
        }

        Ok(set)
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.enabled() {
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

/// Memoised answers to "does the engine accept this flag?".
///
/// Each letter is probed at most once; later lookups reuse the stored
/// answer until [`clear`](Self::clear) is called.
#[derive(Debug, Clone, Default)]
pub struct FlagSupportCache {
    entries: HashMap<Flag, bool>,
}

impl FlagSupportCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached answer for `flag`, running `probe` if there is none.
    pub fn get_or_probe(&mut self, flag: Flag, probe: impl FnOnce(Flag) -> bool) -> bool {
        *self.entries.entry(flag).or_insert_with(|| {
            let supported = probe(flag);
            trace!(target: "regularish", %flag, supported, "probed flag support");
            supported
        })
    }

    /// Whether `compiler` accepts an empty pattern with only `flag` set.
    pub fn is_supported<C: PatternCompiler>(&mut self, flag: Flag, compiler: &C) -> bool {
        self.get_or_probe(flag, |flag| {
            compiler.compile("", &FlagSet::single(flag)).is_ok()
        })
    }

    /// The cached answer for `flag`, if it has been probed.
    #[must_use]
    pub fn get(&self, flag: Flag) -> Option<bool> {
        self.entries.get(&flag).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Status of a single character in a flag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStatus {
    /// A recognised flag the engine accepts.
    Known(Flag),
    /// A recognised flag the engine rejects.
    Unsupported(Flag),
    /// Not a flag letter at all.
    Invalid,
}

/// One character of a flag string together with its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagReport {
    pub letter: char,
    pub status: FlagStatus,
}

impl FlagReport {
    /// Short text suitable for a tooltip or listing.
    #[must_use]
    pub const fn detail(&self) -> &'static str {
        match self.status {
            FlagStatus::Known(flag) => flag.description(),
            FlagStatus::Unsupported(_) => "Unsupported by engine",
            FlagStatus::Invalid => "Invalid flag",
        }
    }
}

/// Report on every character of `flags`, in order.
pub fn describe_flags<C: PatternCompiler>(
    flags: &str,
    compiler: &C,
    cache: &mut FlagSupportCache,
) -> Vec<FlagReport> {
    flags
        .chars()
        .map(|letter| {
            let status = match Flag::from_char(letter) {
                None => FlagStatus::Invalid,
                Some(flag) if cache.is_supported(flag, compiler) => FlagStatus::Known(flag),
                Some(flag) => FlagStatus::Unsupported(flag),
            };
            FlagReport { letter, status }
        })
        .collect()
}
