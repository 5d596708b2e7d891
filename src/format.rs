/// Which notations a float literal may use.
///
/// Special tokens (`inf`, `infinity`, `nan`) are accepted in every format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// An exponent is required: `1.5e3` but not `1500`.
    Scientific,

    /// No exponent: `1500` but not `1.5e3`, of which only `1.5` is consumed.
    Fixed,

    /// Either notation.
    #[default]
    General,
}

impl Format {
    #[inline]
    pub(crate) fn allows_exponent(self) -> bool {
        self != Format::Fixed
    }

    #[inline]
    pub(crate) fn requires_exponent(self) -> bool {
        self == Format::Scientific
    }
}
