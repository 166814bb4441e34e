/// How to pick one version when a BIOS fingerprint matches several.
///
/// Consecutive releases often ship the same BIOS (4.1 GA through 4.1u4, for
/// example), and from the fingerprint alone there is no way to tell where in
/// that range a host is. The picked version is therefore a bound, not a fact:
///
/// - `RoundLow` (default) answers "at least this version".
/// - `RoundHigh` answers "at most this version", and will report a host on
///   4.1u2 as 4.1u4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakPolicy {
    #[default]
    RoundLow,
    RoundHigh,
}

impl TieBreakPolicy {
    pub fn from_round_high(round_high: bool) -> Self {
        if round_high {
            TieBreakPolicy::RoundHigh
        } else {
            TieBreakPolicy::RoundLow
        }
    }

    /// Picks from candidates already sorted smallest first.
    pub fn pick<'a>(&self, sorted_candidates: &'a [String]) -> Option<&'a str> {
        let picked = match self {
            TieBreakPolicy::RoundLow => sorted_candidates.first(),
            TieBreakPolicy::RoundHigh => sorted_candidates.last(),
        };
        picked.map(String::as_str)
    }
}

/// Which version label a build resolves to: `6.0` or `6.0u2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelChoice {
    #[default]
    Major,
    Minor,
}

impl LabelChoice {
    pub fn from_prefer_minor(prefer_minor: bool) -> Self {
        if prefer_minor {
            LabelChoice::Minor
        } else {
            LabelChoice::Major
        }
    }
}
