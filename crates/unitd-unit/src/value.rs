//! Typed option values that need more than a plain string.
//!
//! Each type parses from the text systemd accepts and displays back in the
//! canonical form written to unit files. `Default` is the unset value, which
//! the section codec omits from output.

use std::fmt;
use std::str::FromStr;

/// Error parsing a typed option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid time span {input:?}: {reason}")]
    Timespan { input: String, reason: &'static str },

    #[error("invalid file mode {0:?}: expected up to four octal digits")]
    FileMode(String),

    #[error("unknown signal {0:?}")]
    Signal(String),

    #[error("invalid unit name {input:?}: {reason}")]
    UnitName { input: String, reason: &'static str },

    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },
}

const USEC_PER_MSEC: u64 = 1_000;
const USEC_PER_SEC: u64 = 1_000_000;
const USEC_PER_MINUTE: u64 = 60 * USEC_PER_SEC;
const USEC_PER_HOUR: u64 = 60 * USEC_PER_MINUTE;
const USEC_PER_DAY: u64 = 24 * USEC_PER_HOUR;
const USEC_PER_WEEK: u64 = 7 * USEC_PER_DAY;

/// Accepted unit suffixes, longest spellings first within each group.
const TIMESPAN_UNITS: &[(&str, u64)] = &[
    ("usec", 1),
    ("us", 1),
    ("µs", 1),
    ("msec", USEC_PER_MSEC),
    ("ms", USEC_PER_MSEC),
    ("seconds", USEC_PER_SEC),
    ("second", USEC_PER_SEC),
    ("sec", USEC_PER_SEC),
    ("s", USEC_PER_SEC),
    ("minutes", USEC_PER_MINUTE),
    ("minute", USEC_PER_MINUTE),
    ("min", USEC_PER_MINUTE),
    ("m", USEC_PER_MINUTE),
    ("hours", USEC_PER_HOUR),
    ("hour", USEC_PER_HOUR),
    ("hr", USEC_PER_HOUR),
    ("h", USEC_PER_HOUR),
    ("days", USEC_PER_DAY),
    ("day", USEC_PER_DAY),
    ("d", USEC_PER_DAY),
    ("weeks", USEC_PER_WEEK),
    ("week", USEC_PER_WEEK),
    ("w", USEC_PER_WEEK),
];

/// Display units, largest first.
const TIMESPAN_DISPLAY: &[(&str, u64)] = &[
    ("w", USEC_PER_WEEK),
    ("d", USEC_PER_DAY),
    ("h", USEC_PER_HOUR),
    ("min", USEC_PER_MINUTE),
    ("s", USEC_PER_SEC),
    ("ms", USEC_PER_MSEC),
    ("us", 1),
];

/// A systemd time span such as `5min 20s`, stored in microseconds.
///
/// A bare number is read as seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespan(u64);

impl Timespan {
    pub const ZERO: Self = Self(0);
    pub const INFINITY: Self = Self(u64::MAX);

    pub fn from_micros(usec: u64) -> Self {
        Self(usec)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(USEC_PER_SEC))
    }

    pub fn as_micros(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Timespan {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ValueError::Timespan {
            input: s.to_string(),
            reason,
        };

        let input = s.trim();
        if input.is_empty() {
            return Err(err("empty"));
        }
        if input == "infinity" {
            return Ok(Self::INFINITY);
        }

        let mut total: u64 = 0;
        let mut rest = input;
        while !rest.is_empty() {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return Err(err("expected a number"));
            }
            let value: u64 = rest[..digits].parse().map_err(|_| err("number too large"))?;
            rest = rest[digits..].trim_start();

            let unit_len = rest.len() - rest.trim_start_matches(char::is_alphabetic).len();
            let unit = &rest[..unit_len];
            rest = rest[unit_len..].trim_start();

            let scale = if unit.is_empty() {
                USEC_PER_SEC
            } else {
                TIMESPAN_UNITS
                    .iter()
                    .find(|(name, _)| *name == unit)
                    .map(|&(_, scale)| scale)
                    .ok_or_else(|| err("unknown unit"))?
            };

            total = value
                .checked_mul(scale)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(|| err("overflow"))?;
        }

        Ok(Self(total))
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INFINITY {
            return f.write_str("infinity");
        }
        if self.0 == 0 {
            return f.write_str("0");
        }

        let mut rest = self.0;
        let mut first = true;
        for &(name, scale) in TIMESPAN_DISPLAY {
            let n = rest / scale;
            if n == 0 {
                continue;
            }
            rest %= scale;
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{n}{name}")?;
            first = false;
        }
        Ok(())
    }
}

/// Octal permission bits such as `0644`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    pub const MAX: u32 = 0o7777;

    pub fn new(bits: u32) -> Option<Self> {
        (bits <= Self::MAX).then_some(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for FileMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() || input.len() > 4 {
            return Err(ValueError::FileMode(s.to_string()));
        }
        u32::from_str_radix(input, 8)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ValueError::FileMode(s.to_string()))
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Standard Linux signal names, indexed by signal number - 1.
const SIGNAL_NAMES: &[&str] = &[
    "HUP", "INT", "QUIT", "ILL", "TRAP", "ABRT", "BUS", "FPE", "KILL", "USR1", "SEGV", "USR2",
    "PIPE", "ALRM", "TERM", "STKFLT", "CHLD", "CONT", "STOP", "TSTP", "TTIN", "TTOU", "URG",
    "XCPU", "XFSZ", "VTALRM", "PROF", "WINCH", "IO", "PWR", "SYS",
];

/// A process signal, written by name (`SIGTERM`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signal(u8);

impl Signal {
    pub const HUP: Self = Self(1);
    pub const KILL: Self = Self(9);
    pub const TERM: Self = Self(15);

    pub fn from_number(number: u8) -> Option<Self> {
        (1..=SIGNAL_NAMES.len()).contains(&usize::from(number)).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Name without the `SIG` prefix, `None` for the unset signal.
    pub fn name(self) -> Option<&'static str> {
        usize::from(self.0)
            .checked_sub(1)
            .and_then(|i| SIGNAL_NAMES.get(i).copied())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Signal {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(number) = input.parse::<u8>() {
            return Self::from_number(number).ok_or_else(|| ValueError::Signal(s.to_string()));
        }

        let name = input.strip_prefix("SIG").unwrap_or(input);
        SIGNAL_NAMES
            .iter()
            .position(|&candidate| candidate == name)
            .and_then(|i| u8::try_from(i + 1).ok())
            .map(Self)
            .ok_or_else(|| ValueError::Signal(s.to_string()))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "SIG{name}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Unit type suffixes a unit name may carry.
pub const UNIT_SUFFIXES: &[&str] = &[
    "service", "socket", "device", "mount", "automount", "swap", "target", "path", "timer",
    "slice", "scope",
];

/// Reference to another unit by its full name, e.g. `network-online.target`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitRef(String);

impl UnitRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unit type, i.e. the part after the last dot.
    pub fn suffix(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, suffix)| suffix)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for UnitRef {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ValueError::UnitName {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(err("empty"));
        }
        if s.contains(|c: char| c.is_whitespace() || c == '/') {
            return Err(err("contains whitespace or '/'"));
        }
        let Some((prefix, suffix)) = s.rsplit_once('.') else {
            return Err(err("missing unit type suffix"));
        };
        if prefix.is_empty() {
            return Err(err("empty unit prefix"));
        }
        if !UNIT_SUFFIXES.contains(&suffix) {
            return Err(err("unknown unit type suffix"));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
