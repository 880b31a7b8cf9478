use serde::{Deserialize, Serialize};

///
/// The rendering convention used when turning elements of a p-adic ring
/// into strings. The mode is part of a ring's identity: two rings that
/// agree mathematically but print their elements differently are
/// deliberately considered different objects, since they cannot share a
/// canonical representative in the coercion graph.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PrintMode {
    /// Power series in the uniformizer, e.g. `2 + 3*5 + 5^2 + O(5^4)`.
    Series,
    /// Valuation-and-unit form, e.g. `5^2 * 17 + O(5^4)`.
    ValUnit,
    /// A single lift, e.g. `427 + O(5^4)`.
    Terse,
    /// Digit string in a fixed alphabet, most significant digit first.
    Digits,
    /// Digit list separated by a configurable separator.
    Bars,
}

///
/// Immutable print configuration of a p-adic ring: the [`PrintMode`] plus
/// the named options the various modes consult. Built once via the `with_*`
/// methods and passed by value; rings never mutate their print options
/// after construction.
///
/// Raw `==` compares all fields; ring equality instead uses
/// [`PrintOptions::eq_for_mode()`], which only consults the options that
/// are relevant for the active mode, so that rings differing in an option
/// their mode never reads still compare equal.
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PrintOptions {
    mode: PrintMode,
    pos: bool,
    show_prec: bool,
    var_name: Option<String>,
    unram_name: Option<String>,
    ram_name: Option<String>,
    sep: Option<String>,
    alphabet_len: Option<usize>,
    max_ram_terms: Option<usize>,
    max_unram_terms: Option<usize>,
    max_terse_terms: Option<usize>,
}

impl Default for PrintOptions {

    fn default() -> Self {
        PrintOptions {
            mode: PrintMode::Series,
            pos: true,
            show_prec: true,
            var_name: None,
            unram_name: None,
            ram_name: None,
            sep: None,
            alphabet_len: None,
            max_ram_terms: None,
            max_unram_terms: None,
            max_terse_terms: None,
        }
    }
}

impl PrintOptions {

    pub fn new(mode: PrintMode) -> Self {
        PrintOptions { mode, ..Self::default() }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    ///
    /// Whether coefficients are printed as nonnegative representatives.
    ///
    pub fn pos(&self) -> bool {
        self.pos
    }

    pub fn show_prec(&self) -> bool {
        self.show_prec
    }

    ///
    /// The name of the generator of the ring, if one has been assigned.
    ///
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    pub fn unram_name(&self) -> Option<&str> {
        self.unram_name.as_deref()
    }

    pub fn ram_name(&self) -> Option<&str> {
        self.ram_name.as_deref()
    }

    pub fn with_mode(mut self, mode: PrintMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_pos(mut self, pos: bool) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_show_prec(mut self, show_prec: bool) -> Self {
        self.show_prec = show_prec;
        self
    }

    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = Some(name.into());
        self
    }

    pub fn with_unram_name(mut self, name: impl Into<String>) -> Self {
        self.unram_name = Some(name.into());
        self
    }

    pub fn with_ram_name(mut self, name: impl Into<String>) -> Self {
        self.ram_name = Some(name.into());
        self
    }

    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = Some(sep.into());
        self
    }

    pub fn with_alphabet_len(mut self, len: usize) -> Self {
        self.alphabet_len = Some(len);
        self
    }

    pub fn with_max_ram_terms(mut self, n: usize) -> Self {
        self.max_ram_terms = Some(n);
        self
    }

    pub fn with_max_unram_terms(mut self, n: usize) -> Self {
        self.max_unram_terms = Some(n);
        self
    }

    pub fn with_max_terse_terms(mut self, n: usize) -> Self {
        self.max_terse_terms = Some(n);
        self
    }

    ///
    /// Compares two print configurations the way ring equality requires:
    /// the mode itself, the generator names, `show_prec`, and then only
    /// those options that the active mode actually consults when rendering
    /// an element. An option that the mode never reads does not influence
    /// the comparison, and omitted options compare equal to their defaults.
    ///
    pub fn eq_for_mode(&self, other: &PrintOptions) -> bool {
        if self.mode != other.mode {
            return false;
        }
        if self.show_prec != other.show_prec ||
            self.var_name != other.var_name ||
            self.unram_name != other.unram_name ||
            self.ram_name != other.ram_name
        {
            return false;
        }
        match self.mode {
            PrintMode::Series => {
                self.pos == other.pos &&
                    self.max_ram_terms == other.max_ram_terms &&
                    self.max_unram_terms == other.max_unram_terms
            },
            PrintMode::ValUnit => self.pos == other.pos,
            PrintMode::Terse => {
                self.pos == other.pos &&
                    self.max_terse_terms == other.max_terse_terms
            },
            PrintMode::Digits => self.alphabet_len == other.alphabet_len,
            PrintMode::Bars => self.sep == other.sep,
        }
    }

    ///
    /// Returns a copy of this configuration with every option present in
    /// `overrides` replaced. Used by the `fraction_field()`/`integer_ring()`
    /// views, which accept a partial print configuration on top of the
    /// current one.
    ///
    pub fn with_overrides(&self, overrides: &PrintOverrides) -> PrintOptions {
        let mut result = self.clone();
        if let Some(mode) = overrides.mode {
            result.mode = mode;
        }
        if let Some(pos) = overrides.pos {
            result.pos = pos;
        }
        if let Some(show_prec) = overrides.show_prec {
            result.show_prec = show_prec;
        }
        if let Some(var_name) = &overrides.var_name {
            result.var_name = Some(var_name.clone());
        }
        if let Some(sep) = &overrides.sep {
            result.sep = Some(sep.clone());
        }
        if let Some(alphabet_len) = overrides.alphabet_len {
            result.alphabet_len = Some(alphabet_len);
        }
        if let Some(max_ram_terms) = overrides.max_ram_terms {
            result.max_ram_terms = Some(max_ram_terms);
        }
        if let Some(max_unram_terms) = overrides.max_unram_terms {
            result.max_unram_terms = Some(max_unram_terms);
        }
        if let Some(max_terse_terms) = overrides.max_terse_terms {
            result.max_terse_terms = Some(max_terse_terms);
        }
        return result;
    }
}

///
/// A partial print configuration: every field is optional, and only the
/// present fields replace the corresponding option of an existing
/// [`PrintOptions`]. The generator names of an extension are fixed at
/// construction time and deliberately not overridable here, except for the
/// overall variable name.
///
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct PrintOverrides {
    pub mode: Option<PrintMode>,
    pub pos: Option<bool>,
    pub show_prec: Option<bool>,
    pub var_name: Option<String>,
    pub sep: Option<String>,
    pub alphabet_len: Option<usize>,
    pub max_ram_terms: Option<usize>,
    pub max_unram_terms: Option<usize>,
    pub max_terse_terms: Option<usize>,
}

impl PrintOverrides {

    pub fn pos(pos: bool) -> Self {
        PrintOverrides { pos: Some(pos), ..Self::default() }
    }

    pub fn mode(mode: PrintMode) -> Self {
        PrintOverrides { mode: Some(mode), ..Self::default() }
    }
}

#[test]
fn test_eq_for_mode_ignores_irrelevant_options() {
    let base = PrintOptions::new(PrintMode::Series).with_var_name("w");
    // the separator is only consulted in bars mode
    assert!(base.eq_for_mode(&base.clone().with_sep("|")));
    // term caps of other modes are irrelevant for series
    assert!(base.eq_for_mode(&base.clone().with_max_terse_terms(3)));
    assert!(!base.eq_for_mode(&base.clone().with_max_ram_terms(3)));
    assert!(!base.eq_for_mode(&base.clone().with_pos(false)));
}

#[test]
fn test_eq_for_mode_compares_mode_and_names() {
    let base = PrintOptions::new(PrintMode::Terse).with_var_name("w");
    assert!(base.eq_for_mode(&base.clone()));
    assert!(!base.eq_for_mode(&base.clone().with_mode(PrintMode::ValUnit)));
    assert!(!base.eq_for_mode(&base.clone().with_var_name("v")));
    assert!(!base.eq_for_mode(&base.clone().with_show_prec(false)));
}

#[test]
fn test_overrides_apply_only_present_fields() {
    let base = PrintOptions::new(PrintMode::Series).with_var_name("w").with_pos(true);
    let overridden = base.with_overrides(&PrintOverrides::pos(false));
    assert_eq!(PrintMode::Series, overridden.mode());
    assert_eq!(Some("w"), overridden.var_name());
    assert!(!overridden.pos());
}
