/// How many value tokens a field consumes per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bound {
    Range(u8, u8),
    Lower(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentConfig {
    name: String,
    bound: Bound,
}

impl ArgumentConfig {
    pub(crate) fn new(name: impl Into<String>, bound: Bound) -> Self {
        Self {
            name: name.into(),
            bound,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn bound(&self) -> Bound {
        self.bound
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OptionConfig {
    name: String,
    short: Option<char>,
    bound: Bound,
    repeatable: bool,
}

impl OptionConfig {
    pub(crate) fn new(
        name: impl Into<String>,
        short: Option<char>,
        bound: Bound,
        repeatable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            short,
            bound,
            repeatable,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn short(&self) -> &Option<char> {
        &self.short
    }

    pub(crate) fn bound(&self) -> Bound {
        self.bound
    }

    /// Scalar options are retired after their first match; list options never are.
    pub(crate) fn repeatable(&self) -> bool {
        self.repeatable
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use rand::{distributions::Standard, prelude::Distribution, Rng};

    impl Distribution<Bound> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bound {
            match rng.gen_range(0..2) {
                0 => {
                    let upper: u8 = rng.gen();

                    if upper == 0 {
                        Bound::Range(0, upper)
                    } else {
                        Bound::Range(rng.gen_range(0..upper), upper)
                    }
                }
                1 => Bound::Lower(rng.gen()),
                _ => unreachable!("internal error - impossible gen_range()"),
            }
        }
    }
}
